//! Accounts Entity Module
//!
//! 가입 흐름에서 사용하는 계정 모델을 정의합니다.
//!
//! - [`AddAccountModel`] - 검증된 가입 입력값 (평문 비밀번호)
//! - [`AccountModel`] - 저장소가 `id`를 부여한 계정 (해시된 비밀번호)

pub mod account;

pub use account::{AccountModel, AddAccountModel};
