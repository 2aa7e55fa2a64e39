pub mod cookies;
pub mod jwt;
pub mod middleware;

use axum::http::HeaderMap;
use shared_types::SessionIdentity;

/// Resolve the caller's session from already-validated claims or, failing
/// that, from the access token carried by `headers`.
///
/// Missing, malformed and expired tokens all resolve to `None`; the caller
/// decides whether that means "redirect" or "reject".
pub fn resolve_session(claims: Option<&jwt::Claims>, headers: &HeaderMap) -> Option<SessionIdentity> {
    if let Some(claims) = claims {
        return Some(claims.session());
    }

    let token = cookies::extract_access_token(headers)?;
    match jwt::validate_access_token(&token) {
        Ok(claims) => Some(claims.session()),
        Err(e) => {
            tracing::debug!(error = %e, "access token rejected");
            None
        }
    }
}
