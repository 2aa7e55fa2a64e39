use crate::common::*;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::Role;

#[tokio::test]
async fn cookie_token_reaches_handler_as_claims() {
    let _guard = lock_env().await;
    let app = test_app();
    let token = token_for("u-faculty-1", Role::Faculty);

    let (status, cookies, body) = send(&app, with_cookie("/whoami", &token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"], "u-faculty-1");
    assert_eq!(body["role"], "faculty");
    assert!(cookies.is_empty());
}

#[tokio::test]
async fn bearer_token_is_accepted() {
    let _guard = lock_env().await;
    let app = test_app();
    let token = token_for("u-warden-9", Role::Warden);

    let (status, _, body) = send(&app, with_bearer("/whoami", &token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "warden");
}

#[tokio::test]
async fn anonymous_request_passes_through() {
    let _guard = lock_env().await;
    let app = test_app();

    let (status, _, _) = send(&app, anonymous("/whoami")).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn tampered_token_is_ignored_not_rejected() {
    let _guard = lock_env().await;
    let app = test_app();
    let mut token = token_for("u-student-3", Role::Student);
    token.push('x');

    let (status, _, _) = send(&app, with_cookie("/whoami", &token)).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn scheduled_clear_expires_session_cookie() {
    let _guard = lock_env().await;
    let app = test_app();
    let token = token_for("u-parent-4", Role::Parent);

    let (status, cookies, _) = send(&app, with_cookie("/end-session", &token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("acharya_session=;"));
    assert!(cookies[0].contains("Max-Age=0"));
}

#[tokio::test]
async fn ending_a_session_twice_is_harmless() {
    let _guard = lock_env().await;
    let app = test_app();

    let (first, _, _) = send(&app, anonymous("/end-session")).await;
    let (second, cookies, _) = send(&app, anonymous("/end-session")).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(cookies.len(), 1);
}
