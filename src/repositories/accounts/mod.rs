//! 계정 영속화 리포지토리
//!
//! [`MongoAccountRepository`](account_repo::MongoAccountRepository)가
//! `AddAccountRepository`를 구현합니다. 저장소가 부여한 `_id`는
//! 16진수 문자열로 변환되어 `AccountModel::id`가 됩니다.

pub mod account_repo;

pub use account_repo::MongoAccountRepository;
