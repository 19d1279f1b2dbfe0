//! 공통 유틸리티 모듈
//!
//! # Modules
//!
//! - [`email_validator`] - `validator` 크레이트 기반 `EmailValidator` 어댑터
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::email_validator::EmailValidatorAdapter;
//!
//! let validator = EmailValidatorAdapter::new();
//! assert!(validator.is_valid("user@example.com")?);
//! ```

pub mod email_validator;
