use crate::common::*;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn health_reports_ok_without_database() {
    server::health::record_start_time();
    let app = test_app();

    let (status, cookies, body) = send(&app, anonymous("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(cookies.is_empty());
    assert_eq!(body["status"], "ok");
    assert!(body["version"].as_str().is_some_and(|v| !v.is_empty()));
    assert!(body["uptime_seconds"].is_u64());
}
