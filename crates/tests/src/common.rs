use axum::{
    body::Body,
    extract::Extension,
    http::{header, Request, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use server::auth::cookies::{CookieSlot, PendingCookieAction};
use server::auth::jwt::{self, Claims};
use shared_types::Role;
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Serializes tests that touch process-wide environment variables.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

pub const TEST_SECRET: &str = "acharya-integration-test-secret";

/// Acquire the env lock and install the signing secret.
/// Hold the returned guard for the duration of the test.
pub async fn lock_env() -> tokio::sync::MutexGuard<'static, ()> {
    let guard = TEST_MUTEX.lock().await;
    std::env::set_var("JWT_SECRET", TEST_SECRET);
    guard
}

/// Sign an hour-long access token with [`TEST_SECRET`], shaped like the
/// tokens the identity service issues.
pub fn token_for(user_id: &str, role: Role) -> String {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        email: format!("{user_id}@acharya.gov.in"),
        role: role.as_str().to_string(),
        iat: now.timestamp(),
        exp: (now + chrono::Duration::hours(1)).timestamp(),
        jti: None,
        typ: jwt::TOKEN_TYPE_ACCESS.to_string(),
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

/// Echo whatever the session middleware put in the request extensions.
async fn whoami(claims: Option<Extension<Claims>>) -> impl IntoResponse {
    match claims {
        Some(Extension(claims)) => Json(serde_json::json!({
            "user": claims.sub,
            "role": claims.role,
        }))
        .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Stand-in for a server function that ends the session.
async fn end_session(Extension(slot): Extension<CookieSlot>) -> StatusCode {
    slot.schedule(PendingCookieAction::Clear);
    StatusCode::OK
}

/// Router wired the way the portal server wires its session layer.
pub fn test_app() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route("/end-session", get(end_session))
        .route("/health", get(server::health::health_check))
        .layer(middleware::from_fn(
            server::auth::middleware::session_middleware,
        ))
}

pub fn request(uri: &str) -> axum::http::request::Builder {
    Request::builder().method("GET").uri(uri)
}

pub fn with_cookie(uri: &str, token: &str) -> Request<Body> {
    request(uri)
        .header(header::COOKIE, format!("acharya_session={token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn with_bearer(uri: &str, token: &str) -> Request<Body> {
    request(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn anonymous(uri: &str) -> Request<Body> {
    request(uri).body(Body::empty()).unwrap()
}

/// Send a request, returning status, Set-Cookie headers and the JSON body.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<String>, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let set_cookies = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, set_cookies, body)
}
