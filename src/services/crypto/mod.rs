//! 암호화 어댑터

pub mod bcrypt_adapter;

pub use bcrypt_adapter::BcryptAdapter;
