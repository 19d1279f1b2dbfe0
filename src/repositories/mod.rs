//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 `main`에서 생성한 `Arc<Database>`를 주입받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::MongoAccountRepository;
//!
//! let account_repo = MongoAccountRepository::new(database.clone());
//! let account = account_repo.add(account_data).await?;
//! ```

pub mod accounts;
pub mod logs;
