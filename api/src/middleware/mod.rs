pub mod error_handler;

pub use error_handler::{ErrorHandlingExt, FaultHandler, RequestId, REQUEST_ID_HEADER};
