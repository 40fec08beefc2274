//! Request-scoped error builder session.
//!
//! One [`ErrorSession`] exists per request. Handler code drives it through
//! [`ErrorSession::create`] and the returned [`ErrorBuilder`]; the dispatch
//! layer reads the same session afterwards through [`ErrorSession::snapshot`]
//! to decide how an unmapped failure is rendered.
//!
//! The session is `!Send`. It lives in the request's extensions
//! and never crosses requests.

mod builder;

#[cfg(test)]
mod tests;

pub use builder::{BuiltError, ErrorBuilder};

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use fl_shared::defaults;

use crate::catalog::TypeResolver;
use crate::fault::ErrorType;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// `create()` was never called for this request
    #[default]
    Idle,
    Configuring,
    Built,
}

/// Which identity, if any, the session was given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Identity {
    Untouched,
    Named,
    Typed(ErrorType),
}

#[derive(Debug, Clone)]
pub(crate) struct SessionState {
    phase: SessionPhase,
    name: String,
    message: String,
    status_code: u16,
    identity: Identity,
    message_used: bool,
    status_code_used: bool,
    is_dynamic: bool,
}

impl SessionState {
    fn idle() -> Self {
        Self {
            phase: SessionPhase::Idle,
            name: defaults::ERROR_NAME.to_string(),
            message: defaults::ERROR_MESSAGE.to_string(),
            status_code: defaults::STATUS_CODE,
            identity: Identity::Untouched,
            message_used: false,
            status_code_used: false,
            is_dynamic: false,
        }
    }

    fn configuring() -> Self {
        Self {
            phase: SessionPhase::Configuring,
            is_dynamic: true,
            ..Self::idle()
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            name: self.name.clone(),
            message: self.message.clone(),
            status_code: self.status_code,
            name_used: self.identity == Identity::Named,
            type_used: matches!(self.identity, Identity::Typed(_)),
            message_used: self.message_used,
            status_code_used: self.status_code_used,
            is_dynamic: self.is_dynamic,
        }
    }
}

/// Frozen copy of a session's fields and flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub name: String,
    pub message: String,
    pub status_code: u16,
    pub name_used: bool,
    pub type_used: bool,
    pub message_used: bool,
    pub status_code_used: bool,
    pub is_dynamic: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        SessionState::idle().snapshot()
    }
}

/// Per-request builder session shared by handler code and the dispatch layer
#[derive(Clone)]
pub struct ErrorSession {
    state: Rc<RefCell<SessionState>>,
    resolver: Arc<TypeResolver>,
}

impl ErrorSession {
    pub fn new(resolver: Arc<TypeResolver>) -> Self {
        Self {
            state: Rc::new(RefCell::new(SessionState::idle())),
            resolver,
        }
    }

    /// Start a new build episode, discarding everything set before
    pub fn create(&self) -> ErrorBuilder {
        *self.state.borrow_mut() = SessionState::configuring();
        ErrorBuilder::new(self.clone())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.borrow().phase
    }

    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    pub(crate) fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }
}

impl fmt::Debug for ErrorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorSession")
            .field("state", &self.snapshot())
            .finish()
    }
}
