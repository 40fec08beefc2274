use std::sync::Arc;

use fl_core::{
    AppError, CatalogRegistrar, ErrorCatalog, ErrorRegistry, IntoStatusCode, RegistrationError,
};
use fl_shared::HandlingConfig;

use crate::middleware::error_handler::FaultHandler;

/// Startup configuration of error handling
///
/// Catalogs and response policies are collected here while the application
/// is configured, then frozen into a [`FaultHandler`] with
/// [`ErrorConfig::into_handler`]. Nothing can be registered afterwards.
#[derive(Debug, Default)]
pub struct ErrorConfig {
    registrar: CatalogRegistrar,
    registry: ErrorRegistry,
    handling: HandlingConfig,
}

impl ErrorConfig {
    pub fn new(handling: HandlingConfig) -> Self {
        Self {
            handling,
            ..Self::default()
        }
    }

    /// Register the catalog owned by marker `M` for name resolution
    pub fn register_catalog<M: ErrorCatalog>(&mut self) -> Result<&mut Self, RegistrationError> {
        self.registrar.register::<M>()?;
        Ok(self)
    }

    /// Map kind `E` to a status code and message behavior; first mapping wins
    pub fn handle<E: AppError>(
        &mut self,
        status_code: impl IntoStatusCode,
        message: Option<&str>,
        override_message: bool,
    ) -> &mut Self {
        self.registry.handle::<E>(status_code, message, override_message);
        self
    }

    pub fn registry(&self) -> &ErrorRegistry {
        &self.registry
    }

    pub fn handling(&self) -> &HandlingConfig {
        &self.handling
    }

    /// Freeze the configuration into the dispatch middleware
    pub fn into_handler(self) -> FaultHandler {
        log::info!(
            "Error handling configured with {} catalog(s) and {} policy(ies)",
            self.registrar.catalogs().len(),
            self.registry.len()
        );

        FaultHandler::new(
            Arc::new(self.registry),
            Arc::new(self.registrar.into_resolver()),
            self.handling,
        )
    }
}
