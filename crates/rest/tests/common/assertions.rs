//! HTTP response assertions.

use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::{Value, json};

/// Asserts a single-message error body with the given status.
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"code": status.as_u16(), "error": message}),
        "Unexpected error body"
    );
}

/// Asserts a 422 validation body whose message list contains `message`.
pub fn assert_validation_error(response: &TestResponse, message: &str) {
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], 422);
    let messages = body["error"]["message"]
        .as_array()
        .expect("Expected a message list");
    assert!(
        messages.iter().any(|m| m == message),
        "Expected {:?} in {:?}",
        message,
        messages
    );
}

/// Asserts a 200 item body.
pub fn assert_item(response: &TestResponse, id: i64, name: &str) {
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({"id": id, "name": name}));
}

/// Returns the names of a list response, in order.
pub fn names(response: &TestResponse) -> Vec<String> {
    response.assert_status_ok();
    let body: Value = response.json();
    body.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|item| item["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
