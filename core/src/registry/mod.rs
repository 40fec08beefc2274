//! Mapping from error kind to response policy.
//!
//! Policies are appended during startup and looked up at dispatch time.
//! Lookup is an exact kind match and the earliest registered policy wins,
//! so registering a kind twice leaves the second policy shadowed.

use fl_shared::defaults;

use crate::fault::{AppError, ErrorType, IntoStatusCode};

/// How a mapped error kind is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePolicy {
    error_type: ErrorType,
    status_code: u16,
    message: String,
    override_message: bool,
}

impl ResponsePolicy {
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the policy message replaces the error's own message
    pub fn override_message(&self) -> bool {
        self.override_message
    }
}

/// Ordered policy table
#[derive(Debug, Clone, Default)]
pub struct ErrorRegistry {
    policies: Vec<ResponsePolicy>,
}

impl ErrorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map kind `E` to a status and message behavior
    pub fn handle<E: AppError>(
        &mut self,
        status_code: impl IntoStatusCode,
        message: Option<&str>,
        override_message: bool,
    ) -> &mut Self {
        self.add_mapping(
            ErrorType::of::<E>(),
            status_code,
            message.map(str::to_string),
            override_message,
        )
    }

    /// Append a policy for an already known kind
    pub fn add_mapping(
        &mut self,
        error_type: ErrorType,
        status_code: impl IntoStatusCode,
        message: Option<String>,
        override_message: bool,
    ) -> &mut Self {
        let policy = ResponsePolicy {
            error_type,
            status_code: status_code.into_status_code(),
            message: message.unwrap_or_else(|| defaults::ERROR_MESSAGE.to_string()),
            override_message,
        };

        if self.lookup(&error_type).is_some() {
            tracing::warn!(
                kind = error_type.path(),
                "Error kind already mapped; the earlier policy takes precedence"
            );
        }
        tracing::debug!(
            kind = error_type.path(),
            status = policy.status_code,
            override_message,
            "Added response policy"
        );

        self.policies.push(policy);
        self
    }

    /// First policy registered for exactly `error_type`
    pub fn lookup(&self, error_type: &ErrorType) -> Option<&ResponsePolicy> {
        self.policies.iter().find(|policy| &policy.error_type == error_type)
    }

    pub fn policies(&self) -> &[ResponsePolicy] {
        &self.policies
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    crate::message_error!(pub BadRequestError);
    crate::message_error!(pub NullError);

    mod other {
        crate::message_error!(pub BadRequestError);
    }

    #[test]
    fn test_handle_defaults_message() {
        let mut registry = ErrorRegistry::new();
        registry.handle::<NullError>(404, None, false);

        let policy = registry.lookup(&ErrorType::of::<NullError>()).unwrap();
        assert_eq!(policy.status_code(), 404);
        assert_eq!(policy.message(), "An error occurred");
        assert!(!policy.override_message());
    }

    #[test]
    fn test_first_registration_wins() {
        let mut registry = ErrorRegistry::new();
        registry
            .handle::<BadRequestError>(400, Some("first"), true)
            .handle::<BadRequestError>(422, Some("second"), false);

        assert_eq!(registry.len(), 2);
        for _ in 0..3 {
            let policy = registry.lookup(&ErrorType::of::<BadRequestError>()).unwrap();
            assert_eq!(policy.status_code(), 400);
            assert_eq!(policy.message(), "first");
        }
    }

    #[test]
    fn test_lookup_is_exact_type_match() {
        let mut registry = ErrorRegistry::new();
        registry.handle::<BadRequestError>(StatusCode::BAD_REQUEST, Some("mapped"), false);

        assert!(registry.lookup(&ErrorType::of::<other::BadRequestError>()).is_none());
        assert!(registry.lookup(&ErrorType::of::<NullError>()).is_none());
        assert_eq!(
            registry
                .lookup(&ErrorType::of::<BadRequestError>())
                .map(ResponsePolicy::status_code),
            Some(400)
        );
    }
}
