use crate::common::*;
use axum::http::{header, HeaderMap, HeaderValue};
use pretty_assertions::assert_eq;
use server::auth::{jwt, resolve_session};
use shared_types::{Role, SessionSource};

fn cookie_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_str(&format!("acharya_session={token}")).unwrap(),
    );
    headers
}

#[tokio::test]
async fn no_token_means_no_session() {
    let _guard = lock_env().await;
    assert_eq!(resolve_session(None, &HeaderMap::new()), None);
}

#[tokio::test]
async fn valid_cookie_resolves_issued_session() {
    let _guard = lock_env().await;
    let token = token_for("u-admin-1", Role::Admin);

    let session = resolve_session(None, &cookie_headers(&token)).unwrap();

    assert_eq!(session.id, "u-admin-1");
    assert_eq!(session.email, "u-admin-1@acharya.gov.in");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.source, SessionSource::Issued);
}

#[tokio::test]
async fn claims_win_over_headers() {
    let _guard = lock_env().await;
    let header_token = token_for("from-header", Role::Student);
    let claims = jwt::validate_access_token(&token_for("from-claims", Role::Parent)).unwrap();

    let session = resolve_session(Some(&claims), &cookie_headers(&header_token)).unwrap();

    assert_eq!(session.id, "from-claims");
    assert_eq!(session.role, Role::Parent);
}

#[tokio::test]
async fn garbage_token_means_no_session() {
    let _guard = lock_env().await;
    assert_eq!(resolve_session(None, &cookie_headers("not-a-jwt")), None);
}

#[tokio::test]
async fn unknown_role_claim_defaults_to_student() {
    let _guard = lock_env().await;
    let mut claims = jwt::validate_access_token(&token_for("u-x", Role::Faculty)).unwrap();
    claims.role = "principal".into();

    let session = resolve_session(Some(&claims), &HeaderMap::new()).unwrap();

    assert_eq!(session.role, Role::Student);
}
