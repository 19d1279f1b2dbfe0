//! HTTP 응답 본문으로 사용되는 에러 종류
//!
//! - [`HttpError::MissingParam`] - 필수 필드 누락 (400)
//! - [`HttpError::InvalidParam`] - 필드 값이 유효하지 않음 (400)
//! - [`HttpError::Server`] - 예상하지 못한 모든 실패 (500)
//!
//! 클라이언트에는 `{name, message}`만 직렬화되며, 스택 트레이스는
//! [`ServerError::stack`]을 통해 로거에게만 전달됩니다.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// 예상하지 못한 실패를 감싸는 서버 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    stack: String,
}

impl ServerError {
    /// 원본 에러와 `source()` 체인을 스택 문자열로 기록합니다.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut stack = format!("ServerError: {}", error);
        let mut source = error.source();

        while let Some(cause) = source {
            stack.push_str(&format!("\n    caused by: {}", cause));
            source = cause.source();
        }

        Self { stack }
    }

    /// 이미 만들어진 스택 트레이스로 생성합니다.
    pub fn with_stack(stack: impl Into<String>) -> Self {
        Self { stack: stack.into() }
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Internal server error")
    }
}

impl std::error::Error for ServerError {}

/// 컨트롤러가 응답 본문으로 돌려주는 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    #[error("Missing param: {0}")]
    MissingParam(String),

    #[error("Invalid param: {0}")]
    InvalidParam(String),

    #[error(transparent)]
    Server(ServerError),
}

impl HttpError {
    pub fn missing_param(field: &str) -> Self {
        HttpError::MissingParam(field.to_string())
    }

    pub fn invalid_param(field: &str) -> Self {
        HttpError::InvalidParam(field.to_string())
    }

    /// 응답 JSON의 `name` 필드 값
    pub fn name(&self) -> &'static str {
        match self {
            HttpError::MissingParam(_) => "MissingParamError",
            HttpError::InvalidParam(_) => "InvalidParamError",
            HttpError::Server(_) => "ServerError",
        }
    }

    /// 서버 에러인 경우 스택 트레이스
    pub fn stack(&self) -> Option<&str> {
        match self {
            HttpError::Server(error) => Some(error.stack()),
            _ => None,
        }
    }
}

impl Serialize for HttpError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("HttpError", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
