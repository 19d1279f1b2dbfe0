//! 컨트롤러 데코레이터 모듈
//!
//! 같은 `Controller` 인터페이스를 구현하면서 횡단 관심사를 덧붙이는
//! 데코레이터들을 제공합니다. 상속이 아닌 합성으로 내부 컨트롤러를 보관합니다.
//!
//! ```rust,ignore
//! let controller: Arc<dyn Controller> = Arc::new(LogControllerDecorator::new(
//!     Arc::new(signup_controller),
//!     Arc::new(MongoLogRepository::new(database.clone())),
//! ));
//! ```

pub mod log_controller;

pub use log_controller::LogControllerDecorator;
