use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot};
use super::jwt::validate_access_token;

/// Permissive session middleware.
///
/// On each request:
/// 1. Validates the access token from the session cookie (or Bearer header)
///    and inserts the `Claims` into request extensions when valid
/// 2. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 3. After the handler runs, applies any pending cookie action
///
/// Does NOT reject unauthenticated requests; server functions decide.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    if let Some(token) = cookies::extract_access_token(req.headers()) {
        match validate_access_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(e) => tracing::debug!(error = %e, "ignoring invalid session token"),
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some(action) = cookie_slot.take() {
        cookies::apply_cookie_action(response.headers_mut(), action);
    }

    response
}
