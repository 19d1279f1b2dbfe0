//! Database Connection Management Module
//!
//! MongoDB 연결을 명시적으로 생성하고 종료하는 핸들을 제공합니다.
//! 전역 상태 없이 `main`에서 만든 [`Database`]를 `Arc`로 리포지토리에 주입합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::from_env()).await?;
//! let accounts = database.collection::<AddAccountModel>("accounts");
//! // ...
//! database.disconnect().await;
//! ```

use mongodb::{bson::{doc, Bson}, options::ClientOptions, Client, Collection};
use log::info;
use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 핸들
#[derive(Clone, Debug)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 생성하고 `ping`으로 연결 상태를 검증합니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::ConfigError(format!("MongoDB URI 파싱 실패: {}", e)))?;

        client_options.app_name = Some("signup_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB ping 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// 지정한 이름의 컬렉션을 반환합니다.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.client.database(&self.database_name).collection::<T>(name)
    }

    /// 연결을 종료합니다. 진행 중인 작업이 끝날 때까지 기다립니다.
    pub async fn disconnect(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB 연결 종료: {}", self.database_name);
    }
}

/// `insert_one` 결과의 식별자를 불투명 문자열 ID로 변환합니다.
pub fn inserted_id_to_string(inserted_id: &Bson) -> String {
    match inserted_id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
