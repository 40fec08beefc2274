//! Failure response payload written for every intercepted error

use serde::{Deserialize, Serialize};

/// Value of the `Result` field on every failure payload
pub const RESULT_FAILED: &str = "Failed";

/// JSON body rendered for a failed request
///
/// Two shapes exist on the wire:
/// - `{"Result":"Failed","Error":"<message>"}` for mapped and unmanaged failures
/// - `{"Result":"Failed","Error":"<name>","Message":"<message>"}` for dynamic failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    /// Always `"Failed"`
    #[serde(rename = "Result")]
    pub result: String,

    /// Error message, or the error name for dynamic failures
    #[serde(rename = "Error")]
    pub error: String,

    /// Error message for dynamic failures
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl FailureResponse {
    /// Create the two-field shape
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            result: RESULT_FAILED.to_string(),
            error: error.into(),
            message: None,
        }
    }

    /// Create the three-field shape used for dynamic failures
    pub fn dynamic(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            result: RESULT_FAILED.to_string(),
            error: name.into(),
            message: Some(message.into()),
        }
    }

    /// Whether this payload carries the dynamic `Message` field
    pub fn is_dynamic(&self) -> bool {
        self.message.is_some()
    }
}
