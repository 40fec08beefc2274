use actix_web::http::StatusCode;
pub use fl_shared::types::response::FailureResponse;

// Extension trait for FailureResponse to add actix-web specific methods
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse;
}

impl ErrorResponseExt for FailureResponse {
    fn to_response(&self, status: StatusCode) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(status).json(self)
    }
}

/// Status for a raw code; codes outside the valid range become 500
pub fn status_from_code(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_code() {
        assert_eq!(status_from_code(401), StatusCode::UNAUTHORIZED);
        assert_eq!(status_from_code(42), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_to_response_sets_status_and_json() {
        let response = FailureResponse::new("boom").to_response(StatusCode::CONFLICT);
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
