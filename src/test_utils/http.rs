use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::{Value, json};

/// Assert that `response` is the JSON error envelope for `status` with `message`.
#[track_caller]
pub(crate) fn assert_error_body(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    assert_eq!(
        response.json::<Value>(),
        json!({"success": false, "error": status.as_u16(), "message": message})
    );
}
