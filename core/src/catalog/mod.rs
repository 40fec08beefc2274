//! Catalogs of error kinds that can be resolved by name.
//!
//! A catalog is owned by a marker type implementing [`ErrorCatalog`]; the
//! marker lists its kinds explicitly when the catalog is registered at
//! startup. Registration order is the search order used by the resolver.

mod resolver;

pub use resolver::{Resolution, ResolutionSource, TypeResolver};

use std::any::{type_name, TypeId};

use crate::errors::RegistrationError;
use crate::fault::{AppError, ErrorType};

/// Implemented by a marker type that owns a set of error kinds
pub trait ErrorCatalog: 'static {
    /// Add this catalog's kinds
    fn register(catalog: &mut Catalog);
}

/// A named set of error kinds searchable by simple name or full path
#[derive(Debug, Clone)]
pub struct Catalog {
    id: TypeId,
    name: &'static str,
    entries: Vec<ErrorType>,
}

impl Catalog {
    /// Build the catalog owned by marker `M`
    pub fn of<M: ErrorCatalog>() -> Self {
        let mut catalog = Self {
            id: TypeId::of::<M>(),
            name: type_name::<M>(),
            entries: Vec::new(),
        };
        M::register(&mut catalog);
        catalog
    }

    /// Add kind `E`; adding the same kind twice keeps one entry
    pub fn add<E: AppError>(&mut self) -> &mut Self {
        let kind = ErrorType::of::<E>();
        if !self.entries.contains(&kind) {
            self.entries.push(kind);
        }
        self
    }

    /// Name of the owning marker type
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, kind: &ErrorType) -> bool {
        self.entries.contains(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &ErrorType> {
        self.entries.iter()
    }

    /// First kind whose simple name or full path equals `name`
    pub fn find(&self, name: &str) -> Option<ErrorType> {
        self.entries.iter().find(|kind| kind.matches(name)).copied()
    }

    /// First kind whose full path equals `path`
    pub fn find_path(&self, path: &str) -> Option<ErrorType> {
        self.entries.iter().find(|kind| kind.path() == path).copied()
    }

    fn same_owner(&self, other: &Catalog) -> bool {
        self.id == other.id
    }
}

/// Startup-time collection of extension catalogs
#[derive(Debug, Default)]
pub struct CatalogRegistrar {
    catalogs: Vec<Catalog>,
}

impl CatalogRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the catalog owned by marker `M`
    ///
    /// Fails when the catalog holds no kind. Registering the same marker
    /// again is a no-op.
    pub fn register<M: ErrorCatalog>(&mut self) -> Result<&mut Self, RegistrationError> {
        self.register_catalog(Catalog::of::<M>())
    }

    /// Register an already built catalog
    pub fn register_catalog(&mut self, catalog: Catalog) -> Result<&mut Self, RegistrationError> {
        if catalog.is_empty() {
            tracing::error!(catalog = catalog.name(), "Catalog contains no error kinds");
            return Err(RegistrationError::EmptyCatalog {
                catalog: catalog.name().to_string(),
            });
        }

        if self.catalogs.iter().any(|known| known.same_owner(&catalog)) {
            tracing::debug!(catalog = catalog.name(), "Catalog already registered");
            return Ok(self);
        }

        tracing::info!(
            catalog = catalog.name(),
            kinds = catalog.len(),
            "Registered error catalog"
        );
        self.catalogs.push(catalog);
        Ok(self)
    }

    /// Registered catalogs in registration order
    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    /// Freeze the registered catalogs into a resolver
    pub fn into_resolver(self) -> TypeResolver {
        TypeResolver::new(self.catalogs)
    }
}
