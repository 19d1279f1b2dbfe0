//! 컨트롤러 조립 (composition root)
//!
//! 협력 객체 구현체를 생성 시점에 선택해 `Arc<dyn Controller>`로 묶습니다.

use std::sync::Arc;
use crate::core::protocols::{AddAccountRepository, Encrypter, ErrorLogger};
use crate::db::Database;
use crate::handlers::protocols::Controller;
use crate::handlers::signup::SignUpController;
use crate::middlewares::LogControllerDecorator;
use crate::repositories::accounts::MongoAccountRepository;
use crate::repositories::logs::MongoLogRepository;
use crate::services::accounts::DbAddAccount;
use crate::services::crypto::BcryptAdapter;
use crate::utils::email_validator::EmailValidatorAdapter;

/// MongoDB 기반 가입 컨트롤러를 조립합니다.
pub fn make_signup_controller(db: Arc<Database>) -> Arc<dyn Controller> {
    let encrypter = BcryptAdapter::from_config();
    log::debug!("bcrypt cost: {}", encrypter.cost());

    make_signup_controller_with(
        Arc::new(encrypter),
        Arc::new(MongoAccountRepository::new(db.clone())),
        Arc::new(MongoLogRepository::new(db)),
    )
}

/// 주어진 해싱기, 리포지토리, 에러 로거로 가입 컨트롤러를 조립합니다.
///
/// `LogControllerDecorator(SignUpController(EmailValidatorAdapter, DbAddAccount(encrypter, repository)))`
pub fn make_signup_controller_with(
    encrypter: Arc<dyn Encrypter>,
    repository: Arc<dyn AddAccountRepository>,
    error_logger: Arc<dyn ErrorLogger>,
) -> Arc<dyn Controller> {
    let add_account = Arc::new(DbAddAccount::new(encrypter, repository));
    let signup_controller = Arc::new(SignUpController::new(
        Arc::new(EmailValidatorAdapter::new()),
        add_account,
    ));

    Arc::new(LogControllerDecorator::new(signup_controller, error_logger))
}
