//! 가입(sign-up) 서비스 백엔드
//!
//! 요청 검증과 계정 생성 흐름을 작은 계층 구조로 구현합니다.
//! 비밀번호 해싱, 영속화, 이메일 형식 검증, 에러 기록은 모두 생성 시점에
//! 주입되는 협력 객체가 담당하며, 이들은 안정된 인터페이스 뒤에서 교체 가능합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │   HTTP Routes (actix)    │ ← POST /api/signup, 라우트 어댑터
//! └──────────────────────────┘
//!              │
//!              ▼
//! ┌──────────────────────────┐
//! │  LogControllerDecorator  │ ← 500 응답의 스택을 ErrorLogger에 기록
//! └──────────────────────────┘
//!              │
//!              ▼
//! ┌──────────────────────────┐
//! │    SignUpController      │ ← 필드 검증, EmailValidator, 에러 → 응답 변환
//! └──────────────────────────┘
//!              │
//!              ▼
//! ┌──────────────────────────┐
//! │      DbAddAccount        │ ← Encrypter → AddAccountRepository
//! └──────────────────────────┘
//!              │
//!              ▼
//! ┌──────────────────────────┐
//! │         MongoDB          │ ← accounts, errors 컬렉션
//! └──────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use signup_service_backend::db::Database;
//! use signup_service_backend::routes::factories::make_signup_controller;
//!
//! let database = Arc::new(Database::connect(&DatabaseConfig::from_env()).await?);
//! let controller = make_signup_controller(database.clone());
//! let response = controller.handle(HttpRequest::from_json(body)).await;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
