pub mod error;

pub use error::{status_from_code, ErrorResponseExt, FailureResponse};
