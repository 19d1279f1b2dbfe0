//! 협력 객체(collaborator) 에러 시스템
//!
//! 비밀번호 해싱, 영속화, 설정 로딩 등 컨트롤러 아래 계층에서 발생하는
//! 실패를 표현합니다. 하위 계층은 이 에러를 자유롭게 반환하고,
//! HTTP 응답으로의 변환은 컨트롤러 경계에서만 일어납니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn add(&self, data: AddAccountModel) -> AppResult<AccountModel> {
//!     let result = self.collection()
//!         .insert_one(&document)
//!         .await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 협력 객체 인터페이스(`Encrypter`, `AddAccountRepository`, `ErrorLogger` 등)가
/// 반환하는 "명시되지 않은" 실패의 구체적인 형태입니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 비밀번호 해싱 에러
    #[error("Hashing error: {0}")]
    HashingError(String),

    /// 경계에서 들어온 형식이 잘못된 입력 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 설정 로딩 에러
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 종류 이름
    pub fn name(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "DatabaseError",
            AppError::HashingError(_) => "HashingError",
            AppError::ValidationError(_) => "ValidationError",
            AppError::ConfigError(_) => "ConfigError",
            AppError::InternalError(_) => "InternalError",
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// 라우팅 계층에서 직접 발생한 에러(예: 잘못된 JSON 본문)를 응답으로 변환합니다.
    ///
    /// 내부 에러의 상세 내용은 클라이언트에 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let (status, message) = match self {
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string()),
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "name": self.name(),
                "message": message,
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
