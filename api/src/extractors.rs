//! Request extractors

use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::{dev::Payload, error::ErrorInternalServerError, Error, FromRequest, HttpMessage, HttpRequest};
use fl_core::ErrorSession;

/// The request's error builder session
///
/// ```ignore
/// async fn handler(faults: Faults) -> actix_web::Result<HttpResponse> {
///     Ok(faults.create().with_status_code(409).build().throw()?)
/// }
/// ```
///
/// Requires [`FaultHandler`](crate::middleware::FaultHandler) to wrap the route.
#[derive(Debug, Clone)]
pub struct Faults(ErrorSession);

impl Faults {
    pub fn into_inner(self) -> ErrorSession {
        self.0
    }
}

impl Deref for Faults {
    type Target = ErrorSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for Faults {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<ErrorSession>()
            .cloned()
            .map(Faults)
            .ok_or_else(|| ErrorInternalServerError("Error handling middleware is not installed"));

        ready(result)
    }
}
