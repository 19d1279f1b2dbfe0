//! 서버 에러 로거 구현체
//!
//! - [`MongoLogRepository`](log_repo::MongoLogRepository) - `errors` 컬렉션에 `{stack, date}` 저장
//! - [`ConsoleErrorLogger`](log_repo::ConsoleErrorLogger) - `log::error!`로 출력

pub mod log_repo;

pub use log_repo::{ConsoleErrorLogger, MongoLogRepository};
