//! Failure handling configuration

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::{defaults, ConfigError, ConfigResult};

/// Settings consulted when rendering an intercepted failure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HandlingConfig {
    /// Status used for failures with no policy and no dynamic session
    #[serde(default = "default_fallback_status")]
    pub fallback_status: u16,

    /// Message used when a mapped failure has neither its own nor a policy message
    #[serde(default = "default_unexpected_message")]
    pub unexpected_message: String,

    /// Log every intercepted failure
    #[serde(default = "default_log_failures")]
    pub log_failures: bool,
}

impl Default for HandlingConfig {
    fn default() -> Self {
        Self {
            fallback_status: default_fallback_status(),
            unexpected_message: default_unexpected_message(),
            log_failures: default_log_failures(),
        }
    }
}

impl HandlingConfig {
    /// Load from `FAULT_FALLBACK_STATUS`, `FAULT_UNEXPECTED_MESSAGE` and `FAULT_LOG_FAILURES`
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("FAULT_FALLBACK_STATUS") {
            let code = raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid_value("FAULT_FALLBACK_STATUS", raw.clone()))?;
            config.fallback_status = code;
        }

        if let Ok(message) = env::var("FAULT_UNEXPECTED_MESSAGE") {
            if !message.is_empty() {
                config.unexpected_message = message;
            }
        }

        if let Ok(raw) = env::var("FAULT_LOG_FAILURES") {
            config.log_failures = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(ConfigError::invalid_value("FAULT_LOG_FAILURES", raw)),
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject fallback statuses that cannot be written on the wire
    pub fn validate(&self) -> ConfigResult<()> {
        if !(100..=999).contains(&self.fallback_status) {
            return Err(ConfigError::InvalidStatusCode {
                key: "FAULT_FALLBACK_STATUS".to_string(),
                code: self.fallback_status,
            });
        }
        Ok(())
    }
}

fn default_fallback_status() -> u16 {
    defaults::STATUS_CODE
}

fn default_unexpected_message() -> String {
    defaults::UNEXPECTED_ERROR_MESSAGE.to_string()
}

fn default_log_failures() -> bool {
    true
}
