//! # Handlers Module
//!
//! 전송 계층과 무관한 컨트롤러 계층입니다. actix-web과의 연결은
//! `routes` 모듈의 어댑터가 담당합니다.
//!
//! ## 모듈 구성
//!
//! - [`protocols`] - `HttpRequest`, `HttpResponse`, `Controller` 계약
//! - [`helpers`] - `ok`, `bad_request`, `server_error` 응답 생성 헬퍼
//! - [`signup`] - 가입 요청 검증 및 처리 (`SignUpController`)

pub mod helpers;
pub mod protocols;
pub mod signup;

pub use protocols::{Controller, HttpRequest, HttpResponse, ResponseBody};
pub use signup::SignUpController;
