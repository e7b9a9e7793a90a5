//! Bookshelf Helpers
//!
//! Identifier generation and the JSON envelopes shared by all book endpoints.

use serde_json::{json, Value};
use uuid::Uuid;

/// Generates a fresh book identifier (32 lowercase hex characters).
pub fn new_book_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Builds a success envelope.
///
/// # Arguments
///
/// * `message` – Optional human-readable confirmation.
/// * `data` – Optional payload placed under `data`.
pub fn success_body(message: Option<&str>, data: Option<Value>) -> Value {
    let mut body = json!({ "status": "success" });

    if let Some(message) = message {
        body["message"] = json!(message);
    }
    if let Some(data) = data {
        body["data"] = data;
    }

    body
}

/// Builds a failure envelope carrying `message`.
pub fn fail_body(message: impl Into<String>) -> Value {
    json!({
        "status": "fail",
        "message": message.into(),
    })
}
