//! 협력 객체 인터페이스
//!
//! 구현체는 생성 시점에 `Arc<dyn Trait>`로 주입되며, 런타임 타입 검사로
//! 선택되지 않습니다. 모든 비동기 인터페이스는 명시되지 않은 실패를
//! [`AppError`]로 반환할 수 있고, 이를 500 응답으로 바꾸는 것은
//! 컨트롤러만의 책임입니다.

use async_trait::async_trait;
use crate::domain::entities::accounts::{AccountModel, AddAccountModel};
use crate::errors::AppResult;

/// 이메일 형식 검증기
///
/// 순수 함수이며, 형식이 잘못된 문자열에 대해서도 실패하지 않습니다.
/// 검증기가 외부 서비스에 의존하는 구현을 위해 에러 반환을 허용합니다.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> AppResult<bool>;
}

/// 비밀번호 암호화 (해싱)
#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn encrypt(&self, value: &str) -> AppResult<String>;
}

/// 계정 영속화
///
/// 식별자를 부여한 [`AccountModel`]을 반환합니다.
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    async fn add(&self, account_data: AddAccountModel) -> AppResult<AccountModel>;
}

/// "계정 추가" 유스케이스
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> AppResult<AccountModel>;
}

/// 서버 에러 스택 기록기
///
/// 실패는 호출자에게 전파되지 않아야 하며, 데코레이터가 이를 격리합니다.
#[async_trait]
pub trait ErrorLogger: Send + Sync {
    async fn log(&self, stack: &str) -> AppResult<()>;
}
