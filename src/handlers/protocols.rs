//! 컨트롤러 계약과 전송 계층 독립적인 요청/응답 타입

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::domain::entities::accounts::AccountModel;
use crate::errors::HttpError;

/// 경계에서 들어온 요청
///
/// 본문은 타입이 정해지지 않은 필드 이름 → 값 매핑입니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub body: Map<String, Value>,
}

impl HttpRequest {
    /// JSON 값으로부터 요청을 만듭니다. 객체가 아니면 빈 본문으로 취급합니다.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(body) => Self { body },
            _ => Self::default(),
        }
    }
}

/// 응답 본문
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Account(AccountModel),
    Error(HttpError),
    Json(Value),
}

impl ResponseBody {
    /// 에러 본문인 경우 그 에러
    pub fn as_error(&self) -> Option<&HttpError> {
        match self {
            ResponseBody::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl From<AccountModel> for ResponseBody {
    fn from(account: AccountModel) -> Self {
        ResponseBody::Account(account)
    }
}

impl From<Value> for ResponseBody {
    fn from(value: Value) -> Self {
        ResponseBody::Json(value)
    }
}

/// 컨트롤러가 만든 응답
///
/// 상태 코드는 `handlers::helpers`에서만 지정됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

/// 컨트롤러 계약
///
/// 모든 실패는 응답으로 표현되며, 호출자에게 에러로 전파되지 않습니다.
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
