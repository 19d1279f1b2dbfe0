//! 계정 관련 유스케이스

pub mod db_add_account;

pub use db_add_account::DbAddAccount;
