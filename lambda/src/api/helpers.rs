//! Response builders shared by the movie handlers.
//!
//! Every response is an API Gateway proxy object with a JSON body and an
//! explicit `Content-Type` header, including error responses.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, warn};

use crate::errors::MovieError;

pub const MISSING_PARAMETER_MESSAGE: &str = "Missing parameter";
pub const INVALID_PARAMETER_MESSAGE: &str = "Invalid parameter";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a response with the given status code and `body` serialized as JSON.
#[must_use]
pub fn json_response<T: Serialize + ?Sized>(status_code: u16, body: &T) -> Value {
    match serde_json::to_string(body) {
        Ok(body) => json!({
            "statusCode": status_code,
            "headers": { "Content-Type": "application/json" },
            "body": body
        }),
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            json!({
                "statusCode": 500,
                "headers": { "Content-Type": "application/json" },
                "body": json!({ "message": INTERNAL_ERROR_MESSAGE }).to_string()
            })
        }
    }
}

/// Returns a 200 OK response with a JSON body.
#[must_use]
pub fn ok_json<T: Serialize + ?Sized>(body: &T) -> Value {
    json_response(200, body)
}

/// Returns a response whose body is `{"message": ...}`.
#[must_use]
pub fn message_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "message": message }))
}

/// Returns a response whose body is `{"error": ...}`.
#[must_use]
pub fn error_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// 400 response for a parameter error, or `None` for any other error.
#[must_use]
pub fn parameter_error_response(err: &MovieError) -> Option<Value> {
    match err {
        MovieError::MissingParameter(_) => Some(message_response(400, MISSING_PARAMETER_MESSAGE)),
        MovieError::InvalidParameter(_) => Some(message_response(400, INVALID_PARAMETER_MESSAGE)),
        _ => None,
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Logs a handler failure with its full detail; caller mistakes log at warn.
pub fn log_failure(context: &str, err: &MovieError) {
    if err.is_client_error() {
        warn!(status = err.status_code(), "{}: {}", context, err);
    } else {
        error!(status = err.status_code(), "{}: {}", context, err);
    }
}
