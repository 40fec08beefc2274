use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use uuid::Uuid;

use fl_core::{dispatch, DispatchBranch, ErrorRegistry, ErrorSession, Rendered, TypeResolver};
use fl_shared::HandlingConfig;

use crate::handlers::error_handler::{failure_of, render_failure};

pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Request id stored in the request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Middleware turning every failure that escapes a handler into one JSON response
///
/// Each request gets a fresh [`ErrorSession`] in its extensions. Handlers
/// drive it through the [`Faults`](crate::extractors::Faults) extractor and
/// the dispatch step reads it back once the downstream service has failed.
#[derive(Clone)]
pub struct FaultHandler {
    registry: Arc<ErrorRegistry>,
    resolver: Arc<TypeResolver>,
    handling: Arc<HandlingConfig>,
}

impl FaultHandler {
    pub fn new(
        registry: Arc<ErrorRegistry>,
        resolver: Arc<TypeResolver>,
        handling: HandlingConfig,
    ) -> Self {
        Self {
            registry,
            resolver,
            handling: Arc::new(handling),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for FaultHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = FaultHandlerService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(FaultHandlerService {
            service: Rc::new(service),
            registry: Arc::clone(&self.registry),
            resolver: Arc::clone(&self.resolver),
            handling: Arc::clone(&self.handling),
        }))
    }
}

pub struct FaultHandlerService<S> {
    service: Rc<S>,
    registry: Arc<ErrorRegistry>,
    resolver: Arc<TypeResolver>,
    handling: Arc<HandlingConfig>,
}

impl<S, B> Service<ServiceRequest> for FaultHandlerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let registry = Arc::clone(&self.registry);
        let handling = Arc::clone(&self.handling);

        // Generate or extract request ID
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let session = ErrorSession::new(Arc::clone(&self.resolver));
        req.extensions_mut().insert(RequestId(request_id.clone()));
        req.extensions_mut().insert(session.clone());

        let http_req = req.request().clone();

        Box::pin(async move {
            let (http_req, failure) = match service.call(req).await {
                Ok(res) => {
                    let failure = res.response().error().map(failure_of);
                    match failure {
                        None => return Ok(res.map_into_left_body()),
                        Some(failure) => (res.request().clone(), failure),
                    }
                }
                Err(err) => (http_req, failure_of(&err)),
            };

            let rendered = dispatch(&failure, &registry, &session.snapshot(), &handling);
            if handling.log_failures {
                log_failure(&request_id, &http_req, &rendered);
            }

            let response = render_failure(&rendered);
            Ok(ServiceResponse::new(http_req, response).map_into_right_body())
        })
    }
}

fn log_failure(request_id: &str, req: &HttpRequest, rendered: &Rendered) {
    match rendered.branch {
        DispatchBranch::Fallback => log::error!(
            "[{}] {} {} failed with unhandled error ({}): {}",
            request_id,
            req.method(),
            req.path(),
            rendered.status,
            rendered.body.error
        ),
        branch => log::warn!(
            "[{}] {} {} failed with {} error ({}): {}",
            request_id,
            req.method(),
            req.path(),
            branch.as_str(),
            rendered.status,
            rendered.body.message.as_deref().unwrap_or(&rendered.body.error)
        ),
    }
}

/// Extension trait to reach the per-request error handling state
pub trait ErrorHandlingExt {
    fn get_request_id(&self) -> Option<String>;
    fn error_session(&self) -> Option<ErrorSession>;
}

impl ErrorHandlingExt for ServiceRequest {
    fn get_request_id(&self) -> Option<String> {
        self.extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
    }

    fn error_session(&self) -> Option<ErrorSession> {
        self.extensions().get::<ErrorSession>().cloned()
    }
}

impl ErrorHandlingExt for HttpRequest {
    fn get_request_id(&self) -> Option<String> {
        self.extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
    }

    fn error_session(&self) -> Option<ErrorSession> {
        self.extensions().get::<ErrorSession>().cloned()
    }
}
