//! # Sign-up Controller
//!
//! `POST /api/signup` 요청을 검증하고 계정 추가 유스케이스를 호출합니다.
//!
//! ## 처리 순서
//!
//! 첫 번째 실패에서 즉시 응답을 반환합니다.
//!
//! 1. 필수 필드(`email`, `name`, `password`, `passwordConfirmation`) 누락 → 400 `MissingParamError`
//! 2. 문자열이 아닌 필드 → 400 `InvalidParamError`
//! 3. `password != passwordConfirmation` → 400 `InvalidParamError("passwordConfirmation")`
//! 4. 이메일 형식 오류 → 400 `InvalidParamError("email")`
//! 5. 계정 추가 → 200 `AccountModel`
//!
//! 검증기나 유스케이스의 실패는 모두 500 `ServerError`로 변환됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use crate::core::protocols::{AddAccount, EmailValidator};
use crate::domain::entities::accounts::AddAccountModel;
use crate::errors::HttpError;
use crate::handlers::helpers::{bad_request, ok, server_error};
use crate::handlers::protocols::{Controller, HttpRequest, HttpResponse};

const REQUIRED_FIELDS: [&str; 4] = ["email", "name", "password", "passwordConfirmation"];

pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let body = &request.body;

        for field in REQUIRED_FIELDS {
            if !body.get(field).is_some_and(is_truthy) {
                return bad_request(HttpError::missing_param(field));
            }
        }

        let [email, name, password, password_confirmation] = match string_fields(&request) {
            Ok(fields) => fields,
            Err(error) => return bad_request(error),
        };

        if password != password_confirmation {
            return bad_request(HttpError::invalid_param("passwordConfirmation"));
        }

        match self.email_validator.is_valid(email) {
            Ok(true) => {}
            Ok(false) => return bad_request(HttpError::invalid_param("email")),
            Err(e) => return server_error(&e),
        }

        let account = AddAccountModel {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.add_account.add(account).await {
            Ok(account) => ok(account),
            Err(e) => {
                log::debug!("계정 추가 실패: {}", e);
                server_error(&e)
            }
        }
    }
}

/// 필수 필드를 순서대로 문자열로 꺼냅니다.
fn string_fields(request: &HttpRequest) -> Result<[&str; 4], HttpError> {
    let mut fields = [""; 4];

    for (slot, field) in fields.iter_mut().zip(REQUIRED_FIELDS) {
        *slot = request
            .body
            .get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| HttpError::invalid_param(field))?;
    }

    Ok(fields)
}

/// JavaScript의 truthiness와 같은 규칙 (`null`, `false`, `0`, `""`는 거짓)
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
