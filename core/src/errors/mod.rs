//! Errors reported while configuring error handling.
//!
//! None of these reach the HTTP layer: builder misuse is returned to the
//! code driving the builder, and registration errors abort startup.

use thiserror::Error;

/// Builder operation that attaches an identity to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderStep {
    WithName,
    WithType,
}

impl std::fmt::Display for BuilderStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuilderStep::WithName => write!(f, "with_name()"),
            BuilderStep::WithType => write!(f, "with_type()"),
        }
    }
}

/// Misuse of the error builder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    #[error("Cannot use {attempted} after {previous}")]
    InvalidSequence {
        attempted: BuilderStep,
        previous: BuilderStep,
    },
}

/// Startup registration failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Catalog {catalog} must contain at least one error kind")]
    EmptyCatalog { catalog: String },
}

pub type BuilderResult<T> = Result<T, BuilderError>;
