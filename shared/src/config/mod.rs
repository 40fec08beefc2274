//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `handling` - How intercepted failures are rendered
//! - `server` - HTTP server configuration

pub mod environment;
pub mod handling;
pub mod server;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigResult;

pub use environment::{Environment, LoggingConfig};
pub use handling::HandlingConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Failure handling configuration
    #[serde(default)]
    pub handling: HandlingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn try_from_env() -> ConfigResult<Self> {
        let environment = Environment::from_env();

        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            handling: HandlingConfig::from_env()?,
            logging: LoggingConfig::from_env(environment),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
