//! # Domain Layer Module
//!
//! 전송 방식(HTTP)이나 저장 방식(MongoDB)과 무관한 도메인 모델을 담습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! └── Entities     - 계정 모델 (AddAccountModel, AccountModel)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
