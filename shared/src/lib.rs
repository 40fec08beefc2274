//! Shared types and configuration for Faultline
//!
//! This crate provides common functionality used across all workspace members:
//! - Configuration types
//! - Default error texts and codes
//! - The failure response payload

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, HandlingConfig, LoggingConfig, ServerConfig};
pub use errors::{defaults, ConfigError, ConfigResult};
pub use types::{FailureResponse, RESULT_FAILED};
