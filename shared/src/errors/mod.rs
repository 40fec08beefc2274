//! Shared error types and default texts

use thiserror::Error;

/// Default texts and codes used when nothing more specific is configured
pub mod defaults {
    /// Name reported for a dynamic error that was never named
    pub const ERROR_NAME: &str = "Exception";

    /// Message of a freshly created builder session and of policies without a message
    pub const ERROR_MESSAGE: &str = "An error occurred";

    /// Message used when neither the error nor its policy provides one
    pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

    /// Status code of a fresh builder session and of unmanaged failures
    pub const STATUS_CODE: u16 = 500;
}

/// Configuration loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Status code out of range for {key}: {code}")]
    InvalidStatusCode { key: String, code: u16 },
}

impl ConfigError {
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
