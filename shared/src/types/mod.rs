//! Common type definitions shared across modules

pub mod response;

pub use response::{FailureResponse, RESULT_FAILED};
