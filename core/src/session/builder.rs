use crate::errors::{BuilderError, BuilderResult, BuilderStep};
use crate::fault::{AppError, ErrorType, GenericError, IntoStatusCode, RaisedError};

use super::{ErrorSession, Identity, SessionPhase};

/// Configures the current build episode of an [`ErrorSession`]
///
/// `with_name` and `with_type` are mutually exclusive within one episode.
/// The error attached with `with_type` only contributes its kind and its
/// message; `build` constructs a fresh instance of that kind from the final
/// message.
#[must_use = "the builder does nothing until it is built and thrown"]
#[derive(Debug)]
pub struct ErrorBuilder {
    session: ErrorSession,
}

impl ErrorBuilder {
    pub(super) fn new(session: ErrorSession) -> Self {
        Self { session }
    }

    /// Name the error; resolved against the catalogs when built
    pub fn with_name(self, name: impl Into<String>) -> BuilderResult<Self> {
        self.session.update(|state| {
            if let Identity::Typed(_) = state.identity {
                return Err(BuilderError::InvalidSequence {
                    attempted: BuilderStep::WithName,
                    previous: BuilderStep::WithType,
                });
            }
            state.name = name.into();
            state.identity = Identity::Named;
            Ok(())
        })?;
        Ok(self)
    }

    /// Set the message; takes precedence over any message carried by `with_type`
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.session.update(|state| {
            state.message = message.into();
            state.message_used = true;
        });
        self
    }

    /// Set the status code; takes precedence over any registered policy
    pub fn with_status_code(self, status_code: impl IntoStatusCode) -> Self {
        let status_code = status_code.into_status_code();
        self.session.update(|state| {
            state.status_code = status_code;
            state.status_code_used = true;
        });
        self
    }

    /// Attach an error kind by example
    pub fn with_type<E: AppError>(self, error: E) -> BuilderResult<Self> {
        let own_message = error.to_string();
        self.session.update(|state| {
            if state.identity == Identity::Named {
                return Err(BuilderError::InvalidSequence {
                    attempted: BuilderStep::WithType,
                    previous: BuilderStep::WithName,
                });
            }
            if !own_message.is_empty() && !state.message_used {
                state.message = own_message;
            }
            state.identity = Identity::Typed(ErrorType::of::<E>());
            Ok(())
        })?;
        Ok(self)
    }

    /// Freeze the session into the error to raise
    pub fn build(self) -> BuiltError {
        let resolver = self.session.resolver();
        let error = self.session.update(|state| {
            let error = match state.identity {
                Identity::Typed(kind) => kind.instantiate(state.message.clone()),
                Identity::Named => match resolver.resolve(&state.name) {
                    Some(resolution) => {
                        if let Some(default_message) = resolution.default_message {
                            if !state.message_used {
                                state.message = default_message;
                            }
                        }
                        state.is_dynamic = false;
                        resolution.error_type.instantiate(state.message.clone())
                    }
                    None => {
                        RaisedError::new(GenericError::new(format!("{}: {}", state.name, state.message)))
                    }
                },
                Identity::Untouched => RaisedError::new(GenericError::new(state.message.clone())),
            };
            state.phase = SessionPhase::Built;

            tracing::debug!(
                kind = error.error_type().path(),
                dynamic = state.is_dynamic,
                status = state.status_code,
                "Built error"
            );
            error
        });

        BuiltError { error }
    }
}

/// A built error, ready to be raised with `?`
#[must_use = "a built error does nothing until it is thrown"]
#[derive(Debug)]
pub struct BuiltError {
    error: RaisedError,
}

impl BuiltError {
    /// Raise the error
    pub fn throw<T>(self) -> Result<T, RaisedError> {
        Err(self.error)
    }

    /// Raise the error only when `predicate` holds
    pub fn throw_if(self, predicate: bool) -> Result<(), RaisedError> {
        if predicate {
            Err(self.error)
        } else {
            Ok(())
        }
    }

    pub fn error(&self) -> &RaisedError {
        &self.error
    }

    pub fn into_error(self) -> RaisedError {
        self.error
    }
}
