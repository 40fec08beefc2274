//! Integration tests for the dispatch middleware

use actix_web::{
    dev::Service,
    error::{ErrorBadRequest, ErrorForbidden},
    http::StatusCode,
    test, web, App, HttpRequest, HttpResponse,
};
use serde_json::{json, Value};

use fl_api::config::ErrorConfig;
use fl_api::extractors::Faults;
use fl_api::middleware::{ErrorHandlingExt, FaultHandler, REQUEST_ID_HEADER};
use fl_core::RaisedError;
use fl_shared::HandlingConfig;

fl_core::message_error!(pub BadRequestError);
fl_core::message_error!(pub PlainError);

fn handler() -> FaultHandler {
    let mut config = ErrorConfig::new(HandlingConfig::default());
    config.handle::<BadRequestError>(400, Some("GLOBAL_MESSAGE"), false);
    config.into_handler()
}

async fn typed_with_status(faults: Faults) -> actix_web::Result<HttpResponse> {
    let builder = faults
        .create()
        .with_type(BadRequestError::new("specific msg"))
        .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(builder.with_status_code(401).build().throw()?)
}

async fn unknown_name(faults: Faults) -> actix_web::Result<HttpResponse> {
    let builder = faults
        .create()
        .with_name("NoSuchType")
        .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(builder.with_status_code(418).build().throw()?)
}

async fn plain() -> Result<HttpResponse, RaisedError> {
    Err(PlainError::new("disk full").into())
}

async fn framework_error() -> actix_web::Result<HttpResponse> {
    Err(ErrorBadRequest("bad input"))
}

async fn configured_then_framework_error(faults: Faults) -> actix_web::Result<HttpResponse> {
    let _builder = faults.create().with_message("half built").with_status_code(409);
    Err(ErrorBadRequest("bad input"))
}

async fn ok() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

async fn request_id(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().body(req.get_request_id().unwrap_or_default())
}

async fn call(uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .wrap(handler())
            .route("/typed", web::post().to(typed_with_status))
            .route("/unknown", web::post().to(unknown_name))
            .route("/plain", web::post().to(plain))
            .route("/framework", web::post().to(framework_error))
            .route("/configured", web::post().to(configured_then_framework_error)),
    )
    .await;

    let req = test::TestRequest::post().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn test_session_status_beats_policy_status() {
    let (status, body) = call("/typed").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"Result": "Failed", "Error": "specific msg"}));
}

#[actix_web::test]
async fn test_unknown_name_renders_dynamic() {
    let (status, body) = call("/unknown").await;

    assert_eq!(status, StatusCode::IM_A_TEAPOT);
    assert_eq!(
        body,
        json!({"Result": "Failed", "Error": "NoSuchType", "Message": "An error occurred"})
    );
}

#[actix_web::test]
async fn test_unmapped_error_falls_back() {
    let (status, body) = call("/plain").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"Result": "Failed", "Error": "disk full"}));
}

#[actix_web::test]
async fn test_framework_error_falls_back() {
    let (status, body) = call("/framework").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"Result": "Failed", "Error": "bad input"}));
}

#[actix_web::test]
async fn test_framework_error_after_builder_use_is_dynamic() {
    let (status, body) = call("/configured").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({"Result": "Failed", "Error": "Exception", "Message": "half built"})
    );
}

#[actix_web::test]
async fn test_sessions_do_not_leak_between_requests() {
    let app = test::init_service(
        App::new()
            .wrap(handler())
            .route("/unknown", web::post().to(unknown_name))
            .route("/plain", web::post().to(plain)),
    )
    .await;

    let first = test::call_service(&app, test::TestRequest::post().uri("/unknown").to_request()).await;
    assert_eq!(first.status(), StatusCode::IM_A_TEAPOT);

    let second = test::call_service(&app, test::TestRequest::post().uri("/plain").to_request()).await;
    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(second).await;
    assert_eq!(body, json!({"Result": "Failed", "Error": "disk full"}));
}

#[actix_web::test]
async fn test_middleware_error_is_intercepted() {
    let app = test::init_service(
        App::new()
            .wrap_fn(|req, srv| {
                let fut = if req.path() == "/blocked" {
                    None
                } else {
                    Some(srv.call(req))
                };
                async move {
                    match fut {
                        Some(fut) => fut.await,
                        None => Err(ErrorForbidden("blocked by gate")),
                    }
                }
            })
            .wrap(handler())
            .route("/blocked", web::post().to(ok)),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::post().uri("/blocked").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"Result": "Failed", "Error": "blocked by gate"}));
}

#[actix_web::test]
async fn test_success_passes_through() {
    let app = test::init_service(
        App::new()
            .wrap(handler())
            .route("/ok", web::get().to(ok)),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/ok").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "ok"}));
}

#[actix_web::test]
async fn test_request_id_is_forwarded() {
    let app = test::init_service(
        App::new()
            .wrap(handler())
            .route("/id", web::get().to(request_id)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/id")
        .insert_header((REQUEST_ID_HEADER, "req-42"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "req-42");

    let req = test::TestRequest::get().uri("/id").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert!(!body.is_empty());
}

#[actix_web::test]
async fn test_fallback_status_from_config() {
    let handling = HandlingConfig {
        fallback_status: 503,
        ..HandlingConfig::default()
    };
    let app = test::init_service(
        App::new()
            .wrap(ErrorConfig::new(handling).into_handler())
            .route("/plain", web::post().to(plain)),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::post().uri("/plain").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
