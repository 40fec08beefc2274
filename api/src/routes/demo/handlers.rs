use actix_web::{error::ErrorInternalServerError, http::StatusCode, HttpResponse, Result};
use fl_core::RaisedError;
use serde::Serialize;

use crate::extractors::Faults;

use super::errors::{BadRequestError, NullError, TestError};

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    age: u32,
}

/// Handler for POST /api/test/default
///
/// Raises a generic error carrying only default values.
///
/// ```json
/// 500 {"Result":"Failed","Error":"Exception","Message":"An error occurred"}
/// ```
pub async fn default_case(faults: Faults) -> Result<HttpResponse> {
    Ok(faults.create().build().throw()?)
}

/// Handler for POST /api/test/by-name
///
/// Looks up `TestError` in the registered catalogs. Unknown names would fall
/// back to a generic error.
pub async fn by_name(faults: Faults) -> Result<HttpResponse> {
    let builder = faults
        .create()
        .with_name("TestError")
        .map_err(ErrorInternalServerError)?;

    Ok(builder.build().throw()?)
}

/// Handler for POST /api/test/by-type
///
/// Attaches the kind directly; no catalog registration needed.
pub async fn by_type(faults: Faults) -> Result<HttpResponse> {
    let builder = faults
        .create()
        .with_type(TestError::default())
        .map_err(ErrorInternalServerError)?;

    Ok(builder.build().throw()?)
}

/// Handler for POST /api/test/message
///
/// `with_message` wins over the message carried by the attached error.
pub async fn message(faults: Faults) -> Result<HttpResponse> {
    let builder = faults
        .create()
        .with_type(TestError::new("FromConstructor"))
        .map_err(ErrorInternalServerError)?;

    Ok(builder.with_message("From Method").build().throw()?)
}

/// Handler for POST /api/test/status-code
///
/// An explicit status code wins over any policy status.
pub async fn status_code(faults: Faults) -> Result<HttpResponse> {
    let builder = faults
        .create()
        .with_type(TestError::new("Statuscode"))
        .map_err(ErrorInternalServerError)?;

    Ok(builder
        .with_status_code(StatusCode::UNAUTHORIZED)
        .build()
        .throw()?)
}

/// Handler for POST /api/test/throw-if
///
/// Raises only when the condition on the sample user holds.
pub async fn throw_if(faults: Faults) -> Result<HttpResponse> {
    let user = User {
        id: 1,
        name: "userName".to_string(),
        age: 22,
    };

    faults
        .create()
        .with_type(TestError::default())
        .map_err(ErrorInternalServerError)?
        .with_message("Exception with ThrowIf method")
        .build()
        .throw_if(user.age > 18 || user.id == 1)?;

    Ok(HttpResponse::Ok().json(user))
}

/// Handler for POST /api/test/mapped
///
/// Raises a mapped kind directly; the policy overrides its message.
///
/// ```json
/// 400 {"Result":"Failed","Error":"GLOBAL_MESSAGE"}
/// ```
pub async fn mapped() -> Result<HttpResponse> {
    Err(RaisedError::from(BadRequestError::new("specific msg")).into())
}

/// Handler for POST /api/test/null
///
/// Raises a mapped kind without a message; the policy message is used.
pub async fn null() -> Result<HttpResponse> {
    Err(RaisedError::from(NullError::default()).into())
}
