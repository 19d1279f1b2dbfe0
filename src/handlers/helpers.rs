//! 응답 생성 헬퍼
//!
//! 상태 코드가 지정되는 유일한 장소입니다. 모두 순수하고 실패하지 않습니다.

use crate::errors::{HttpError, ServerError};
use crate::handlers::protocols::{HttpResponse, ResponseBody};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_SERVER_ERROR: u16 = 500;

pub fn bad_request(error: HttpError) -> HttpResponse {
    HttpResponse {
        status_code: STATUS_BAD_REQUEST,
        body: ResponseBody::Error(error),
    }
}

/// 원본 에러를 [`ServerError`]로 감싸 500 응답을 만듭니다.
pub fn server_error(error: &(dyn std::error::Error + 'static)) -> HttpResponse {
    HttpResponse {
        status_code: STATUS_SERVER_ERROR,
        body: ResponseBody::Error(HttpError::Server(ServerError::from_error(error))),
    }
}

pub fn ok(data: impl Into<ResponseBody>) -> HttpResponse {
    HttpResponse {
        status_code: STATUS_OK,
        body: data.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::accounts::AccountModel;
    use crate::errors::AppError;

    fn make_account() -> AccountModel {
        AccountModel {
            id: "valid_id".to_string(),
            name: "valid_name".to_string(),
            email: "valid@email.com".to_string(),
            password: "hashed_password".to_string(),
        }
    }

    #[test]
    fn test_ok_is_pure() {
        let first = ok(make_account());
        let second = ok(make_account());

        assert_eq!(first.status_code, 200);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_request_is_pure() {
        let first = bad_request(HttpError::missing_param("email"));
        let second = bad_request(HttpError::missing_param("email"));

        assert_eq!(first.status_code, 400);
        assert_eq!(first, second);
    }

    #[test]
    fn test_server_error_is_pure() {
        let error = AppError::DatabaseError("down".to_string());
        let first = server_error(&error);
        let second = server_error(&error);

        assert_eq!(first.status_code, 500);
        assert_eq!(first, second);

        let body = first.body.as_error().unwrap();
        assert_eq!(body.name(), "ServerError");
        assert_eq!(body.stack(), Some("ServerError: Database error: down"));
    }
}
