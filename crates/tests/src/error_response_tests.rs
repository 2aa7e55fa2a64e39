use axum::http::StatusCode;
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;
use server::error_convert::AppErrorExt;
use shared_types::{AppError, AppErrorKind};

#[tokio::test]
async fn not_found_renders_404_json() {
    let response = AppError::not_found("Profile not found").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: AppError = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.kind, AppErrorKind::NotFound);
    assert_eq!(body.message, "Profile not found");
}

#[tokio::test]
async fn unavailable_renders_503() {
    let response = AppError::unavailable("records offline").into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn server_fn_error_carries_the_app_error() {
    let err = AppError::unauthorized("Authentication required").into_server_fn_error();
    let recovered = AppError::from_server_error(&err.to_string()).unwrap();
    assert_eq!(recovered.kind, AppErrorKind::Unauthorized);
    assert_eq!(recovered.message, "Authentication required");
}
