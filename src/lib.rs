pub mod config;
pub mod error;
pub mod github;
pub mod logger;

mod http;
