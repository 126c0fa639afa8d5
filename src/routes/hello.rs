use axum::http::header;
use axum::response::IntoResponse;

/// Fixed response body served on `/`.
///
/// Existing consumers compare these bytes exactly, including the space after
/// the colon, so the body is written as-is rather than serialized.
pub const HELLO_BODY: &str = r#"{"message": "Hello from Go"}"#;

/// Root endpoint handler.
///
/// Ignores everything about the request (method, headers, query, body) and
/// always answers with the same JSON document.
///
/// # Route
/// - **Method**: any
/// - **Path**: `/`
/// - **Response**: `200 OK`, `Content-Type: application/json`
///
/// # Examples
/// ```bash
/// curl http://localhost/
/// # Response: {"message": "Hello from Go"}
/// ```
pub async fn hello() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], HELLO_BODY)
}
