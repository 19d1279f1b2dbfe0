//! 가입 서비스 메인 애플리케이션
//!
//! MongoDB 연결을 열고 가입 컨트롤러를 조립한 뒤 actix-web 서버를 구동합니다.
//! 서버가 종료되면 연결을 명시적으로 닫습니다.

use std::path::PathBuf;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use signup_service_backend::config::{DatabaseConfig, ServerConfig};
use signup_service_backend::db::Database;
use signup_service_backend::repositories::accounts::MongoAccountRepository;
use signup_service_backend::routes::factories::make_signup_controller;
use signup_service_backend::routes::{configure_all_routes, SignUpRoute};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화 (.env의 RUST_LOG가 반영되도록 순서 유지)
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let env_file = load_env_file(&profile);
    init_logging();

    info!("Current profile: {}", profile);
    match env_file {
        Ok(path) => info!("{} 파일 로드 됨", path.display()),
        Err(e) => error!("환경 파일 로드 실패: {}", e),
    }

    info!("🚀 가입 서비스 시작중...");

    let database = match Database::connect(&DatabaseConfig::from_env()).await {
        Ok(database) => Arc::new(database),
        Err(e) => {
            error!("데이터베이스 연결 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    if let Err(e) = MongoAccountRepository::new(database.clone()).create_indexes().await {
        error!("accounts 인덱스 생성 실패: {}", e);
    }

    let signup_route = web::Data::new(SignUpRoute(make_signup_controller(database.clone())));

    let result = start_http_server(signup_route).await;

    // 서버 종료 후 연결 정리
    database.disconnect().await;

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(signup_route: web::Data<SignUpRoute>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Sign-up: POST http://{}/api/signup", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(signup_route.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file(profile: &str) -> Result<PathBuf, dotenv::Error> {
    match profile {
        "prod" => dotenv::from_filename(".env.prod"),
        "dev" => dotenv::from_filename(".env.dev"),
        _ => dotenv(),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬 프론트엔드와의 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
