//! 에러 분류 체계
//!
//! - [`errors`] - 협력 객체가 반환하는 실패 (`AppError`)
//! - [`http_errors`] - 응답 본문으로 쓰이는 검증/서버 에러 (`HttpError`)

pub mod errors;
pub mod http_errors;

pub use errors::{AppError, AppResult, ErrorContext};
pub use http_errors::{HttpError, ServerError};
