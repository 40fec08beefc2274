//! Demonstration routes
//!
//! Every endpoint raises an error through a different builder feature:
//! - Default values, lookup by name, attaching a kind
//! - Message and status code precedence, conditional raising
//! - Kinds covered by a response policy

pub mod errors;
pub mod handlers;

use actix_web::web;
use fl_core::RegistrationError;
use fl_shared::HandlingConfig;

use crate::config::ErrorConfig;

pub use errors::{BadRequestError, DemoCatalog, NullError, TestError};

/// Error handling used by the demo server
///
/// Registers [`DemoCatalog`] for lookups by name and maps the two policy kinds.
pub fn demo_error_config(handling: HandlingConfig) -> Result<ErrorConfig, RegistrationError> {
    let mut config = ErrorConfig::new(handling);
    config.register_catalog::<DemoCatalog>()?;
    config
        .handle::<BadRequestError>(400, Some("GLOBAL_MESSAGE"), true)
        .handle::<NullError>(404, Some("NULL_EXCEPTION"), false);
    Ok(config)
}

/// Mount the demo routes under `/api/test`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/test")
            .route("/default", web::post().to(handlers::default_case))
            .route("/by-name", web::post().to(handlers::by_name))
            .route("/by-type", web::post().to(handlers::by_type))
            .route("/message", web::post().to(handlers::message))
            .route("/status-code", web::post().to(handlers::status_code))
            .route("/throw-if", web::post().to(handlers::throw_if))
            .route("/mapped", web::post().to(handlers::mapped))
            .route("/null", web::post().to(handlers::null)),
    );
}
