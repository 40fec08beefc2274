use actix_web::HttpResponse;

use fl_core::{Failure, RaisedError, Rendered};

use crate::dto::{status_from_code, ErrorResponseExt};

/// View an escaped framework error as a dispatch failure
///
/// Errors raised through the builder or with `?` from an error kind keep
/// their kind; anything else is unmanaged.
pub fn failure_of(error: &actix_web::Error) -> Failure {
    match error.as_error::<RaisedError>() {
        Some(raised) => Failure::from_raised(raised),
        None => Failure::unmanaged(error.to_string()),
    }
}

/// Write the dispatch decision as the HTTP response
pub fn render_failure(rendered: &Rendered) -> HttpResponse {
    rendered.body.to_response(status_from_code(rendered.status))
}
