//! 이메일 형식 검증 어댑터
//!
//! `validator` 크레이트의 이메일 문법 검사기를 [`EmailValidator`]로 감쌉니다.
//! 검사기는 생성 시점에 교체할 수 있습니다.

use validator::ValidateEmail;
use crate::core::protocols::EmailValidator;
use crate::errors::AppResult;

/// 이메일 문법 검사 함수
pub type EmailChecker = fn(&str) -> bool;

fn is_email(email: &str) -> bool {
    email.validate_email()
}

pub struct EmailValidatorAdapter {
    checker: EmailChecker,
}

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self { checker: is_email }
    }

    pub fn with_checker(checker: EmailChecker) -> Self {
        Self { checker }
    }
}

impl Default for EmailValidatorAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok((self.checker)(email))
    }
}
