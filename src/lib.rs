pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod query;
pub mod seed;
pub mod server;
pub mod service;
pub mod storage;
pub mod types;
