//! HTTP 라우트 설정 모듈
//!
//! actix-web 요청을 전송 계층 독립적인 [`HttpRequest`]로 바꾸어 컨트롤러에
//! 전달하고, 결과 [`HttpResponse`](crate::handlers::HttpResponse)를 JSON 응답으로 직렬화합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/signup` | 계정 생성 |
//! | `GET` | `/health` | 헬스 체크 |
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(SignUpRoute(make_signup_controller(database.clone()))))
//!     .configure(configure_all_routes)
//! ```

pub mod factories;

use std::sync::Arc;
use actix_web::{http::StatusCode, web};
use serde_json::{json, Value};
use crate::errors::AppError;
use crate::handlers::protocols::{Controller, HttpRequest};

/// `POST /api/signup`을 처리하는 컨트롤러
#[derive(Clone)]
pub struct SignUpRoute(pub Arc<dyn Controller>);

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 잘못된 JSON 본문은 400으로 응답
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );

    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .route("/signup", web::post().to(signup))
    );
}

async fn signup(
    route: web::Data<SignUpRoute>,
    payload: web::Json<Value>,
) -> actix_web::HttpResponse {
    adapt_route(route.0.as_ref(), payload.into_inner()).await
}

/// 컨트롤러를 actix-web 응답으로 연결하는 어댑터
pub async fn adapt_route(controller: &dyn Controller, body: Value) -> actix_web::HttpResponse {
    let response = controller.handle(HttpRequest::from_json(body)).await;

    let status = StatusCode::from_u16(response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    actix_web::HttpResponse::build(status).json(&response.body)
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "signup_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
