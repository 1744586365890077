pub mod balance;
pub mod client;
pub mod error;
pub mod id;
pub mod log_config;
