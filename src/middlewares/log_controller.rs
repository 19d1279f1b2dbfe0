//! 서버 에러 로깅 데코레이터
//!
//! 임의의 [`Controller`]를 감싸 같은 인터페이스를 노출합니다. 내부 컨트롤러가
//! 500 응답을 반환하면 `ServerError`의 스택을 [`ErrorLogger`]에 기록합니다.
//! 응답은 항상 내부 컨트롤러의 결과 그대로 반환됩니다.
//!
//! 로깅은 현재 tokio 런타임(actix 포함)에 별도 태스크로 실행되므로, 로거의
//! 실패나 지연은 응답에 영향을 주지 않습니다. 런타임이 없으면 인라인으로
//! 기록하며, 이 경우에도 로거의 실패는 응답에 전파되지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::core::protocols::ErrorLogger;
use crate::handlers::helpers::STATUS_SERVER_ERROR;
use crate::handlers::protocols::{Controller, HttpRequest, HttpResponse};

pub struct LogControllerDecorator {
    controller: Arc<dyn Controller>,
    error_logger: Arc<dyn ErrorLogger>,
}

impl LogControllerDecorator {
    pub fn new(controller: Arc<dyn Controller>, error_logger: Arc<dyn ErrorLogger>) -> Self {
        Self {
            controller,
            error_logger,
        }
    }
}

#[async_trait]
impl Controller for LogControllerDecorator {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let response = self.controller.handle(request).await;

        if response.status_code == STATUS_SERVER_ERROR {
            match response.body.as_error().and_then(|error| error.stack()) {
                Some(stack) => {
                    let task = log_stack(Arc::clone(&self.error_logger), stack.to_string());

                    match tokio::runtime::Handle::try_current().ok() {
                        Some(handle) => {
                            handle.spawn(task);
                        }
                        None => task.await,
                    }
                }
                None => log::warn!("스택 트레이스가 없는 500 응답"),
            }
        }

        response
    }
}

async fn log_stack(error_logger: Arc<dyn ErrorLogger>, stack: String) {
    if let Err(e) = error_logger.log(&stack).await {
        log::warn!("서버 에러 기록 실패: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use futures::channel::oneshot;
    use serde_json::json;
    use crate::errors::{AppError, AppResult, HttpError, ServerError};
    use crate::handlers::protocols::ResponseBody;

    struct ControllerStub {
        response: HttpResponse,
        calls: Mutex<Vec<HttpRequest>>,
    }

    #[async_trait]
    impl Controller for ControllerStub {
        async fn handle(&self, request: HttpRequest) -> HttpResponse {
            self.calls.lock().unwrap().push(request);
            self.response.clone()
        }
    }

    struct ErrorLoggerSpy {
        fail: bool,
        calls: Mutex<Vec<String>>,
        notify: Mutex<Option<oneshot::Sender<String>>>,
    }

    impl ErrorLoggerSpy {
        fn new(fail: bool) -> (Arc<Self>, oneshot::Receiver<String>) {
            let (tx, rx) = oneshot::channel();
            let spy = Arc::new(Self {
                fail,
                calls: Mutex::new(Vec::new()),
                notify: Mutex::new(Some(tx)),
            });
            (spy, rx)
        }
    }

    #[async_trait]
    impl ErrorLogger for ErrorLoggerSpy {
        async fn log(&self, stack: &str) -> AppResult<()> {
            self.calls.lock().unwrap().push(stack.to_string());
            if let Some(tx) = self.notify.lock().unwrap().take() {
                let _ = tx.send(stack.to_string());
            }
            if self.fail {
                return Err(AppError::DatabaseError("log insert failed".to_string()));
            }
            Ok(())
        }
    }

    fn ok_response() -> HttpResponse {
        HttpResponse {
            status_code: 200,
            body: ResponseBody::Json(json!({
                "email": "any_email@gmail.com",
                "name": "name",
                "password": "123234",
                "passwordConfirmation": "123234",
            })),
        }
    }

    fn server_error_response() -> HttpResponse {
        HttpResponse {
            status_code: 500,
            body: ResponseBody::Error(HttpError::Server(ServerError::with_stack("error_stack_trace"))),
        }
    }

    fn make_request() -> HttpRequest {
        HttpRequest::from_json(json!({
            "email": "any_email@gmail.com",
            "name": "name",
            "password": "123234",
            "passwordConfirmation": "123234",
        }))
    }

    fn make_sut(response: HttpResponse, logger_fails: bool) -> (LogControllerDecorator, Arc<ControllerStub>, Arc<ErrorLoggerSpy>, oneshot::Receiver<String>) {
        let controller = Arc::new(ControllerStub {
            response,
            calls: Mutex::new(Vec::new()),
        });
        let (logger, rx) = ErrorLoggerSpy::new(logger_fails);
        let sut = LogControllerDecorator::new(controller.clone(), logger.clone());

        (sut, controller, logger, rx)
    }

    #[actix_web::test]
    async fn test_forwards_request_to_controller() {
        let (sut, controller, _, _) = make_sut(ok_response(), false);

        sut.handle(make_request()).await;

        assert_eq!(*controller.calls.lock().unwrap(), vec![make_request()]);
    }

    #[actix_web::test]
    async fn test_returns_controller_response_unchanged() {
        let (sut, _, logger, _) = make_sut(ok_response(), false);

        let response = sut.handle(make_request()).await;

        assert_eq!(response, ok_response());
        assert!(logger.calls.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_logs_stack_on_server_error() {
        let (sut, _, _, rx) = make_sut(server_error_response(), false);

        let response = sut.handle(make_request()).await;

        assert_eq!(response, server_error_response());
        assert_eq!(rx.await.unwrap(), "error_stack_trace");
    }

    #[actix_web::test]
    async fn test_logger_failure_does_not_alter_response() {
        let (sut, _, logger, rx) = make_sut(server_error_response(), true);

        let response = sut.handle(make_request()).await;
        rx.await.unwrap();

        assert_eq!(response, server_error_response());
        assert_eq!(*logger.calls.lock().unwrap(), vec!["error_stack_trace".to_string()]);
    }

    #[actix_web::test]
    async fn test_client_errors_are_not_logged() {
        let bad_request = HttpResponse {
            status_code: 400,
            body: ResponseBody::Error(HttpError::missing_param("email")),
        };
        let (sut, _, logger, _) = make_sut(bad_request.clone(), false);

        let response = sut.handle(make_request()).await;

        assert_eq!(response, bad_request);
        assert!(logger.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_logs_stack_on_multi_thread_runtime() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .build()
            .unwrap();
        let (sut, _, _, rx) = make_sut(server_error_response(), false);
        let sut = Arc::new(sut);

        let response = runtime.block_on(async move {
            tokio::spawn(async move { sut.handle(make_request()).await })
                .await
                .unwrap()
        });

        assert_eq!(response, server_error_response());
        assert_eq!(runtime.block_on(rx).unwrap(), "error_stack_trace");
    }

    #[test]
    fn test_logs_inline_without_runtime() {
        let (sut, _, logger, _) = make_sut(server_error_response(), true);

        let response = futures::executor::block_on(sut.handle(make_request()));

        assert_eq!(response, server_error_response());
        assert_eq!(*logger.calls.lock().unwrap(), vec!["error_stack_trace".to_string()]);
    }
}
