//! Application configuration for the API server

pub mod error_config;

pub use error_config::ErrorConfig;
