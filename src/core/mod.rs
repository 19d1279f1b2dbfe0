//! # Core Module
//!
//! 계층 사이의 경계를 이루는 협력 객체 인터페이스를 정의합니다.
//!
//! | 인터페이스 | 구현체 |
//! |------------|--------|
//! | [`protocols::EmailValidator`] | `utils::email_validator::EmailValidatorAdapter` |
//! | [`protocols::Encrypter`] | `services::crypto::BcryptAdapter` |
//! | [`protocols::AddAccountRepository`] | `repositories::accounts::MongoAccountRepository` |
//! | [`protocols::AddAccount`] | `services::accounts::DbAddAccount` |
//! | [`protocols::ErrorLogger`] | `repositories::logs::MongoLogRepository`, `ConsoleErrorLogger` |

pub mod protocols;

pub use protocols::{AddAccount, AddAccountRepository, EmailValidator, Encrypter, ErrorLogger};
