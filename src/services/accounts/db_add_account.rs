//! 계정 추가 유스케이스
//!
//! 비밀번호를 해싱한 뒤 리포지토리에 저장합니다. 재시도나 복구 없이
//! 두 단계 중 어느 하나라도 실패하면 그 에러를 그대로 반환합니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::core::protocols::{AddAccount, AddAccountRepository, Encrypter};
use crate::domain::entities::accounts::{AccountModel, AddAccountModel};
use crate::errors::AppResult;

pub struct DbAddAccount {
    encrypter: Arc<dyn Encrypter>,
    add_account_repository: Arc<dyn AddAccountRepository>,
}

impl DbAddAccount {
    pub fn new(encrypter: Arc<dyn Encrypter>, add_account_repository: Arc<dyn AddAccountRepository>) -> Self {
        Self {
            encrypter,
            add_account_repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    async fn add(&self, account: AddAccountModel) -> AppResult<AccountModel> {
        let start_time = std::time::Instant::now();

        let hashed_password = self.encrypter.encrypt(&account.password).await?;
        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        // 평문 비밀번호는 리포지토리에 전달되지 않음
        let account_data = AddAccountModel {
            password: hashed_password,
            ..account
        };

        let created = self.add_account_repository.add(account_data).await?;
        log::debug!("Total account creation took: {:?}", start_time.elapsed());

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use crate::errors::AppError;

    struct EncrypterStub {
        fail: bool,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Encrypter for EncrypterStub {
        async fn encrypt(&self, value: &str) -> AppResult<String> {
            self.calls.lock().unwrap().push(value.to_string());
            if self.fail {
                return Err(AppError::HashingError("cost out of range".to_string()));
            }
            Ok("hashed_password".to_string())
        }
    }

    struct AddAccountRepositoryStub {
        fail: bool,
        calls: Mutex<Vec<AddAccountModel>>,
    }

    #[async_trait]
    impl AddAccountRepository for AddAccountRepositoryStub {
        async fn add(&self, account_data: AddAccountModel) -> AppResult<AccountModel> {
            self.calls.lock().unwrap().push(account_data);
            if self.fail {
                return Err(AppError::DatabaseError("insert failed".to_string()));
            }
            Ok(make_fake_account())
        }
    }

    fn make_fake_account() -> AccountModel {
        AccountModel {
            id: "valid_id".to_string(),
            name: "valid_name".to_string(),
            email: "valid_email".to_string(),
            password: "hashed_password".to_string(),
        }
    }

    fn make_fake_account_data() -> AddAccountModel {
        AddAccountModel {
            name: "valid_name".to_string(),
            email: "valid_email".to_string(),
            password: "valid_password".to_string(),
        }
    }

    fn make_sut(encrypt_fails: bool, add_fails: bool) -> (DbAddAccount, Arc<EncrypterStub>, Arc<AddAccountRepositoryStub>) {
        let encrypter = Arc::new(EncrypterStub {
            fail: encrypt_fails,
            calls: Mutex::new(Vec::new()),
        });
        let repository = Arc::new(AddAccountRepositoryStub {
            fail: add_fails,
            calls: Mutex::new(Vec::new()),
        });
        let sut = DbAddAccount::new(encrypter.clone(), repository.clone());

        (sut, encrypter, repository)
    }

    #[actix_web::test]
    async fn test_calls_encrypter_with_password() {
        let (sut, encrypter, _) = make_sut(false, false);

        sut.add(make_fake_account_data()).await.unwrap();

        assert_eq!(*encrypter.calls.lock().unwrap(), vec!["valid_password".to_string()]);
    }

    #[actix_web::test]
    async fn test_encrypter_failure_aborts_before_persisting() {
        let (sut, _, repository) = make_sut(true, false);

        let result = sut.add(make_fake_account_data()).await;

        assert!(matches!(result, Err(AppError::HashingError(_))));
        assert!(repository.calls.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_repository_receives_hashed_password() {
        let (sut, _, repository) = make_sut(false, false);

        sut.add(make_fake_account_data()).await.unwrap();

        assert_eq!(
            *repository.calls.lock().unwrap(),
            vec![AddAccountModel {
                password: "hashed_password".to_string(),
                ..make_fake_account_data()
            }]
        );
    }

    #[actix_web::test]
    async fn test_repository_failure_propagates() {
        let (sut, _, _) = make_sut(false, true);

        let result = sut.add(make_fake_account_data()).await;

        assert_eq!(result, Err(AppError::DatabaseError("insert failed".to_string())));
    }

    #[actix_web::test]
    async fn test_returns_repository_account_unchanged() {
        let (sut, _, _) = make_sut(false, false);

        let account = sut.add(make_fake_account_data()).await.unwrap();

        assert_eq!(account, make_fake_account());
    }
}
