//! bcrypt 기반 비밀번호 해싱

use async_trait::async_trait;
use actix_web::web;
use crate::config::PasswordConfig;
use crate::core::protocols::Encrypter;
use crate::errors::{AppError, AppResult, ErrorContext};

/// bcrypt로 [`Encrypter`]를 구현합니다.
///
/// 해싱은 CPU 비용이 크므로 actix 블로킹 스레드 풀에서 실행합니다.
pub struct BcryptAdapter {
    cost: u32,
}

impl BcryptAdapter {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경 설정의 cost를 사용합니다.
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

#[async_trait]
impl Encrypter for BcryptAdapter {
    async fn encrypt(&self, value: &str) -> AppResult<String> {
        let value = value.to_string();
        let cost = self.cost;

        web::block(move || bcrypt::hash(value, cost))
            .await
            .context("해싱 작업 실행 실패")?
            .map_err(|e| AppError::HashingError(format!("비밀번호 해싱 실패: {}", e)))
    }
}
