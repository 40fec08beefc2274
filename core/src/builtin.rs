//! Base catalog of built-in error kinds.
//!
//! The resolver falls back to this catalog when no registered catalog knows
//! a name. Lookups are qualified into this module's path, so a kind is
//! reachable both with and without its `Error` suffix.

use once_cell::sync::Lazy;

use crate::catalog::{Catalog, ErrorCatalog};

crate::message_error! {
    /// An argument supplied by the caller is not valid
    pub ArgumentError
}

crate::message_error! {
    /// The operation is not valid for the current state
    pub InvalidOperationError
}

crate::message_error! {
    /// The requested operation is not implemented
    pub NotImplementedError
}

crate::message_error! {
    /// The requested operation is not supported
    pub NotSupportedError
}

crate::message_error! {
    /// The caller is not allowed to perform the operation
    pub UnauthorizedAccessError
}

crate::message_error! {
    /// A lookup key does not exist
    pub KeyNotFoundError
}

crate::message_error! {
    /// The operation ran out of time
    pub TimeoutError
}

crate::message_error! {
    /// The operation was canceled
    pub OperationCanceledError
}

crate::message_error! {
    /// A value is not in the expected format
    pub FormatError
}

/// Namespace that short names are qualified into
pub const BASE_NAMESPACE: &str = module_path!();

/// Marker for the built-in kinds
pub struct BaseCatalog;

impl ErrorCatalog for BaseCatalog {
    fn register(catalog: &mut Catalog) {
        catalog
            .add::<ArgumentError>()
            .add::<InvalidOperationError>()
            .add::<NotImplementedError>()
            .add::<NotSupportedError>()
            .add::<UnauthorizedAccessError>()
            .add::<KeyNotFoundError>()
            .add::<TimeoutError>()
            .add::<OperationCanceledError>()
            .add::<FormatError>();
    }
}

static BASE: Lazy<Catalog> = Lazy::new(Catalog::of::<BaseCatalog>);

/// The shared base catalog
pub fn base_catalog() -> &'static Catalog {
    &BASE
}

/// The two qualified forms tried for `name` in the base catalog
pub(crate) fn qualified_candidates(name: &str) -> [String; 2] {
    [
        format!("{}::{}", BASE_NAMESPACE, name),
        format!("{}::{}Error", BASE_NAMESPACE, name),
    ]
}
