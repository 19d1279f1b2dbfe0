use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::core::protocols::AddAccountRepository;
use crate::db::{inserted_id_to_string, Database};
use crate::domain::entities::accounts::{AccountModel, AddAccountModel};
use crate::errors::{AppError, AppResult};

pub const ACCOUNTS_COLLECTION: &str = "accounts";

/// MongoDB `accounts` 컬렉션 기반 계정 리포지토리
pub struct MongoAccountRepository {
    db: Arc<Database>,
}

impl MongoAccountRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<AddAccountModel> {
        self.db.collection::<AddAccountModel>(ACCOUNTS_COLLECTION)
    }

    /// 이메일 유니크 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl AddAccountRepository for MongoAccountRepository {
    async fn add(&self, account_data: AddAccountModel) -> AppResult<AccountModel> {
        let result = self.collection()
            .insert_one(&account_data)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = inserted_id_to_string(&result.inserted_id);
        log::info!("계정 생성됨: {}", id);

        Ok(AccountModel::from_stored(id, account_data))
    }
}
