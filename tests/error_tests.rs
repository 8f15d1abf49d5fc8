use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use home_controller::core::error::AppError;

#[tokio::test]
async fn configuration_error_renders_as_json() {
    let response = AppError::configuration("invalid port".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "configuration error: invalid port");
}
