//! # Services Module
//!
//! 비즈니스 로직 계층입니다.
//!
//! - [`accounts`] - 계정 추가 유스케이스 (`DbAddAccount`)
//! - [`crypto`] - bcrypt 기반 `Encrypter` 구현 (`BcryptAdapter`)

pub mod accounts;
pub mod crypto;
