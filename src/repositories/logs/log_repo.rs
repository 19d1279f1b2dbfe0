use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::core::protocols::ErrorLogger;
use crate::db::Database;
use crate::errors::{AppError, AppResult};

pub const ERRORS_COLLECTION: &str = "errors";

/// `errors` 컬렉션에 저장되는 서버 에러 기록
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorLogDocument {
    pub stack: String,
    pub date: DateTime,
}

impl ErrorLogDocument {
    pub fn new(stack: &str) -> Self {
        Self {
            stack: stack.to_string(),
            date: DateTime::from_millis(Utc::now().timestamp_millis()),
        }
    }
}

/// MongoDB에 서버 에러 스택을 저장하는 로거
pub struct MongoLogRepository {
    db: Arc<Database>,
}

impl MongoLogRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ErrorLogger for MongoLogRepository {
    async fn log(&self, stack: &str) -> AppResult<()> {
        self.db
            .collection::<ErrorLogDocument>(ERRORS_COLLECTION)
            .insert_one(ErrorLogDocument::new(stack))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// `log` 파사드로 서버 에러 스택을 출력하는 로거
#[derive(Debug, Default)]
pub struct ConsoleErrorLogger;

#[async_trait]
impl ErrorLogger for ConsoleErrorLogger {
    async fn log(&self, stack: &str) -> AppResult<()> {
        log::error!("{}", stack);
        Ok(())
    }
}
