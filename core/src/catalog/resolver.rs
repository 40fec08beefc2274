use crate::builtin::{base_catalog, qualified_candidates};
use crate::fault::ErrorType;

use super::Catalog;

/// Where a name was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// A registered extension catalog
    Extension,
    /// The built-in base catalog
    Base,
}

/// A successfully resolved name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub error_type: ErrorType,
    pub source: ResolutionSource,
    /// Message to adopt when the session has no explicit message
    pub default_message: Option<String>,
}

/// Resolves error names across extension catalogs, then the base catalog
#[derive(Debug, Default)]
pub struct TypeResolver {
    catalogs: Vec<Catalog>,
}

impl TypeResolver {
    pub fn new(catalogs: Vec<Catalog>) -> Self {
        Self { catalogs }
    }

    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    /// Resolve `name` to an error kind.
    ///
    /// Extension catalogs are scanned in registration order and match on
    /// simple name or full path. Only then is the base catalog consulted,
    /// with `name` qualified into the base namespace. `None` means the
    /// caller falls back to a generic error.
    pub fn resolve(&self, name: &str) -> Option<Resolution> {
        if let Some(error_type) = self.catalogs.iter().find_map(|catalog| catalog.find(name)) {
            tracing::debug!(error_name = name, kind = error_type.path(), "Resolved error name in extension catalog");
            return Some(Resolution {
                error_type,
                source: ResolutionSource::Extension,
                default_message: Some(format!(
                    "Exception of type {} was thrown",
                    error_type.name()
                )),
            });
        }

        let base = base_catalog();
        let found = qualified_candidates(name)
            .iter()
            .find_map(|candidate| base.find_path(candidate));

        match found {
            Some(error_type) => {
                tracing::debug!(error_name = name, kind = error_type.path(), "Resolved error name in base catalog");
                Some(Resolution {
                    error_type,
                    source: ResolutionSource::Base,
                    default_message: None,
                })
            }
            None => {
                tracing::debug!(error_name = name, "Error name did not resolve");
                None
            }
        }
    }
}
