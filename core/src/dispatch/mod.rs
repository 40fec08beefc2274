//! Decides how a failure that escaped a handler is rendered.
//!
//! Exactly one branch fires per failure:
//!
//! 1. **Mapped**: the failure's kind has a registered policy.
//! 2. **Dynamic**: no policy, but the request's builder session is dynamic.
//! 3. **Fallback**: anything else, rendered with the configured fallback status.
//!
//! The decision is a pure function of its inputs so the HTTP layer only has
//! to translate the result into a response.

#[cfg(test)]
mod tests;

use fl_shared::{FailureResponse, HandlingConfig};

use crate::fault::{ErrorType, RaisedError};
use crate::registry::ErrorRegistry;
use crate::session::SessionSnapshot;

/// A failure as seen by the dispatch layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Runtime kind, known only for failures raised as [`RaisedError`]
    pub error_type: Option<ErrorType>,
    pub message: String,
}

impl Failure {
    pub fn from_raised(error: &RaisedError) -> Self {
        Self {
            error_type: Some(error.error_type()),
            message: error.message(),
        }
    }

    /// A failure with no known kind, e.g. a framework error
    pub fn unmanaged(message: impl Into<String>) -> Self {
        Self {
            error_type: None,
            message: message.into(),
        }
    }
}

impl From<&RaisedError> for Failure {
    fn from(error: &RaisedError) -> Self {
        Failure::from_raised(error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchBranch {
    Mapped,
    Dynamic,
    Fallback,
}

impl DispatchBranch {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchBranch::Mapped => "mapped",
            DispatchBranch::Dynamic => "dynamic",
            DispatchBranch::Fallback => "fallback",
        }
    }
}

/// Outcome of [`dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub branch: DispatchBranch,
    pub status: u16,
    pub body: FailureResponse,
}

/// Choose the response for `failure`
pub fn dispatch(
    failure: &Failure,
    registry: &ErrorRegistry,
    session: &SessionSnapshot,
    handling: &HandlingConfig,
) -> Rendered {
    let policy = failure
        .error_type
        .as_ref()
        .and_then(|error_type| registry.lookup(error_type));

    let rendered = if let Some(policy) = policy {
        let message = if policy.override_message() {
            policy.message().to_string()
        } else if !failure.message.is_empty() {
            failure.message.clone()
        } else if !policy.message().is_empty() {
            policy.message().to_string()
        } else {
            handling.unexpected_message.clone()
        };

        let status = if session.status_code_used {
            session.status_code
        } else {
            policy.status_code()
        };

        Rendered {
            branch: DispatchBranch::Mapped,
            status,
            body: FailureResponse::new(message),
        }
    } else if session.is_dynamic {
        Rendered {
            branch: DispatchBranch::Dynamic,
            status: session.status_code,
            body: FailureResponse::dynamic(session.name.clone(), session.message.clone()),
        }
    } else {
        Rendered {
            branch: DispatchBranch::Fallback,
            status: handling.fallback_status,
            body: FailureResponse::new(failure.message.clone()),
        }
    };

    tracing::debug!(
        branch = rendered.branch.as_str(),
        status = rendered.status,
        kind = failure.error_type.map(|kind| kind.path()).unwrap_or("<unmanaged>"),
        "Dispatched failure"
    );

    rendered
}
