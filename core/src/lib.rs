//! # Faultline Core
//!
//! Error construction and resolution engine.
//! This crate holds the error model, the extension catalogs and the name
//! resolver, the response policy registry, the request-scoped error builder
//! and the decision that turns an escaped failure into a response body.

pub mod builtin;
pub mod catalog;
pub mod dispatch;
pub mod errors;
pub mod fault;
pub mod registry;
pub mod session;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CatalogRegistrar, ErrorCatalog, TypeResolver};
pub use dispatch::{dispatch, DispatchBranch, Failure, Rendered};
pub use errors::{BuilderError, BuilderResult, BuilderStep, RegistrationError};
pub use fault::{AppError, ErrorType, GenericError, IntoStatusCode, RaisedError};
pub use registry::{ErrorRegistry, ResponsePolicy};
pub use session::{BuiltError, ErrorBuilder, ErrorSession, SessionPhase, SessionSnapshot};
