pub mod dec;
pub mod error;
pub mod log_config;
pub mod ser;
