//! Dispatch decisions driven by real builder sessions

use std::sync::Arc;

use fl_shared::{FailureResponse, HandlingConfig};

use crate::catalog::TypeResolver;
use crate::dispatch::{dispatch, DispatchBranch, Failure};
use crate::fault::RaisedError;
use crate::registry::ErrorRegistry;
use crate::session::{ErrorSession, SessionSnapshot};

crate::message_error!(pub BadRequestError);
crate::message_error!(pub NullError);
crate::message_error!(pub PlainError);

fn registry() -> ErrorRegistry {
    let mut registry = ErrorRegistry::new();
    registry
        .handle::<BadRequestError>(400, Some("GLOBAL_MESSAGE"), true)
        .handle::<NullError>(404, Some("NULL_EXCEPTION"), false);
    registry
}

fn session() -> ErrorSession {
    ErrorSession::new(Arc::new(TypeResolver::default()))
}

fn render(error: &RaisedError, registry: &ErrorRegistry, session: &ErrorSession) -> crate::dispatch::Rendered {
    dispatch(
        &Failure::from_raised(error),
        registry,
        &session.snapshot(),
        &HandlingConfig::default(),
    )
}

#[test]
fn test_default_build_renders_dynamic_shape() {
    let session = session();
    let error = session.create().build().into_error();

    let rendered = render(&error, &ErrorRegistry::new(), &session);

    assert_eq!(rendered.branch, DispatchBranch::Dynamic);
    assert_eq!(rendered.status, 500);
    assert_eq!(rendered.body, FailureResponse::dynamic("Exception", "An error occurred"));
}

#[test]
fn test_override_uses_policy_message() {
    let session = session();
    let error = RaisedError::new(BadRequestError::new("specific msg"));

    let rendered = render(&error, &registry(), &session);

    assert_eq!(rendered.branch, DispatchBranch::Mapped);
    assert_eq!(rendered.status, 400);
    assert_eq!(rendered.body, FailureResponse::new("GLOBAL_MESSAGE"));
}

#[test]
fn test_without_override_keeps_own_message() {
    let session = session();
    let error = RaisedError::new(NullError::new("user 7 missing"));

    let rendered = render(&error, &registry(), &session);

    assert_eq!(rendered.status, 404);
    assert_eq!(rendered.body.error, "user 7 missing");
}

#[test]
fn test_without_override_empty_message_uses_policy_message() {
    let session = session();
    let error = RaisedError::new(NullError::default());

    let rendered = render(&error, &registry(), &session);

    assert_eq!(rendered.body.error, "NULL_EXCEPTION");
}

#[test]
fn test_empty_policy_message_falls_back_to_unexpected_message() {
    let mut registry = ErrorRegistry::new();
    registry.handle::<PlainError>(409, Some(""), false);
    let session = session();
    let error = RaisedError::new(PlainError::default());

    let rendered = render(&error, &registry, &session);

    assert_eq!(rendered.status, 409);
    assert_eq!(rendered.body.error, "An unexpected error occurred.");
}

#[test]
fn test_session_status_beats_policy_status() {
    let mut registry = ErrorRegistry::new();
    registry.handle::<BadRequestError>(400, Some("GLOBAL_MESSAGE"), false);
    let session = session();
    let error = session
        .create()
        .with_type(BadRequestError::new("specific msg"))
        .unwrap()
        .with_status_code(401)
        .build()
        .into_error();

    let rendered = render(&error, &registry, &session);

    assert_eq!(rendered.branch, DispatchBranch::Mapped);
    assert_eq!(rendered.status, 401);
    assert_eq!(rendered.body, FailureResponse::new("specific msg"));
}

#[test]
fn test_dynamic_uses_session_fields() {
    let session = session();
    let error = session
        .create()
        .with_name("NoSuchType")
        .unwrap()
        .with_message("Sorry")
        .with_status_code(418)
        .build()
        .into_error();
    assert_eq!(error.message(), "NoSuchType: Sorry");

    let rendered = render(&error, &ErrorRegistry::new(), &session);

    assert_eq!(rendered.branch, DispatchBranch::Dynamic);
    assert_eq!(rendered.status, 418);
    assert_eq!(rendered.body, FailureResponse::dynamic("NoSuchType", "Sorry"));
}

#[test]
fn test_unmanaged_failure_falls_back() {
    let rendered = dispatch(
        &Failure::unmanaged("boom"),
        &registry(),
        &SessionSnapshot::default(),
        &HandlingConfig::default(),
    );

    assert_eq!(rendered.branch, DispatchBranch::Fallback);
    assert_eq!(rendered.status, 500);
    assert_eq!(rendered.body, FailureResponse::new("boom"));
}

#[test]
fn test_plain_raised_error_without_session_falls_back() {
    let session = session();
    let error = RaisedError::new(PlainError::new("disk full"));

    let rendered = render(&error, &registry(), &session);

    assert_eq!(rendered.branch, DispatchBranch::Fallback);
    assert_eq!(rendered.body, FailureResponse::new("disk full"));
}

#[test]
fn test_fallback_status_is_configurable() {
    let handling = HandlingConfig {
        fallback_status: 503,
        ..HandlingConfig::default()
    };

    let rendered = dispatch(
        &Failure::unmanaged("down"),
        &ErrorRegistry::new(),
        &SessionSnapshot::default(),
        &handling,
    );

    assert_eq!(rendered.status, 503);
}
