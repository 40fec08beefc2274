//! Error kinds that can be raised through a request pipeline.
//!
//! Every raisable kind implements [`AppError`], which requires construction
//! from a single message string. The builder relies on that contract: an
//! error attached with `with_type` contributes its type and default message
//! only, and is rebuilt from the final message when the session is built.

#[macro_use]
mod macros;

use std::any::{type_name, TypeId};
use std::fmt;

use actix_web::http::StatusCode;
use actix_web::ResponseError;
use fl_shared::defaults;

/// An error kind usable with the builder, the registry and catalogs
pub trait AppError: std::error::Error + Send + Sync + 'static {
    /// Build an instance carrying exactly `message`
    fn from_message(message: String) -> Self
    where
        Self: Sized;
}

/// Runtime identity of an [`AppError`] kind plus its message constructor
#[derive(Clone, Copy)]
pub struct ErrorType {
    id: TypeId,
    name: &'static str,
    path: &'static str,
    construct: fn(String) -> RaisedError,
}

impl ErrorType {
    /// Identity of `E`
    pub fn of<E: AppError>() -> Self {
        let path = type_name::<E>();
        Self {
            id: TypeId::of::<E>(),
            name: simple_name(path),
            path,
            construct: construct::<E>,
        }
    }

    /// Simple name, e.g. `TestError`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fully qualified path, e.g. `my_app::errors::TestError`
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Whether `name` is this kind's simple name or full path (case-sensitive)
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.path == name
    }

    /// Whether this is the identity of `E`
    pub fn is<E: AppError>(&self) -> bool {
        self.id == TypeId::of::<E>()
    }

    /// Construct a fresh instance of this kind carrying `message`
    pub fn instantiate(&self, message: impl Into<String>) -> RaisedError {
        (self.construct)(message.into())
    }
}

impl PartialEq for ErrorType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorType {}

impl std::hash::Hash for ErrorType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorType").field(&self.path).finish()
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn construct<E: AppError>(message: String) -> RaisedError {
    RaisedError::new(E::from_message(message))
}

/// Last path segment of a type name, ignoring generic arguments
fn simple_name(path: &'static str) -> &'static str {
    let base = path.split('<').next().unwrap_or(path);
    base.rsplit("::").next().unwrap_or(base)
}

/// The concrete error actually raised through the pipeline
#[derive(Debug)]
pub struct RaisedError {
    error_type: ErrorType,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl RaisedError {
    pub fn new<E: AppError>(error: E) -> Self {
        Self {
            error_type: ErrorType::of::<E>(),
            inner: Box::new(error),
        }
    }

    /// Runtime kind of the raised error
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// The error's own message
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    pub fn is<E: AppError>(&self) -> bool {
        self.error_type.is::<E>()
    }

    pub fn downcast_ref<E: AppError>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }
}

impl fmt::Display for RaisedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for RaisedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

impl<E: AppError> From<E> for RaisedError {
    fn from(error: E) -> Self {
        RaisedError::new(error)
    }
}

// The dispatch middleware replaces this response; it only shows when the
// middleware is not installed.
impl ResponseError for RaisedError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

message_error! {
    /// The generic wrapped error produced when no concrete kind applies
    pub GenericError
}

/// Normalizes the accepted status code forms into an integer
pub trait IntoStatusCode {
    fn into_status_code(self) -> u16;
}

impl IntoStatusCode for u16 {
    fn into_status_code(self) -> u16 {
        self
    }
}

impl IntoStatusCode for i32 {
    fn into_status_code(self) -> u16 {
        u16::try_from(self).unwrap_or(defaults::STATUS_CODE)
    }
}

impl IntoStatusCode for StatusCode {
    fn into_status_code(self) -> u16 {
        self.as_u16()
    }
}
