//! Application factory
//!
//! Builds the actix-web application around an already configured
//! [`FaultHandler`]. The handler is created once at startup and cloned into
//! every worker.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::FaultHandler;
use crate::routes::demo;

/// Create and configure the application
pub fn create_app(
    fault_handler: FaultHandler,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        // Failures are rendered before the logger sees the response
        .wrap(fault_handler)
        .wrap(Logger::default())

        // Health check endpoint
        .route("/health", web::get().to(health_check))

        // Demo routes
        .configure(demo::configure)

        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "faultline-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
