//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 로드됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//!
//! # MongoDB
//! export MONGO_URL="mongodb://localhost:27017"
//! export DATABASE_NAME="signup_service"
//!
//! # 환경 및 보안
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;

pub use data_config::*;
