use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

pub const SESSION_COOKIE: &str = "acharya_session";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN").ok().filter(|d| !d.is_empty())
}

/// An emptied session cookie that the browser drops at once. Tokens are
/// issued by the identity service; the portal only ever expires them.
fn expired_session_cookie() -> Cookie<'static> {
    let mut builder = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        builder = builder.domain(domain);
    }

    builder.build()
}

/// Build a Set-Cookie header that expires the session cookie.
pub fn build_clear_cookie() -> HeaderValue {
    HeaderValue::from_str(&expired_session_cookie().to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("acharya_session=; Path=/; Max-Age=0"))
}

/// Extract the access token from the session cookie (preferred) or a
/// Bearer header (fallback for non-browser clients).
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, SESSION_COOKIE) {
        if !token.is_empty() {
            return Some(token);
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse(piece.trim().to_string()) {
                    if c.name() == name {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Cookie change requested by a server function, applied by the session
/// middleware once the handler has produced its response.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Clear,
}

/// Per-request slot shared between the middleware and server functions.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn schedule(&self, action: PendingCookieAction) {
        match self.0.lock() {
            Ok(mut slot) => *slot = Some(action),
            Err(poisoned) => *poisoned.into_inner() = Some(action),
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        match self.0.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

/// Apply `action` to an outgoing response's headers.
pub fn apply_cookie_action(headers: &mut HeaderMap, action: PendingCookieAction) {
    match action {
        PendingCookieAction::Clear => {
            headers.append(header::SET_COOKIE, build_clear_cookie());
        }
    }
}

/// Schedule the session cookie to be cleared on the current response.
/// Called from server functions; a no-op outside a request.
pub fn schedule_clear_cookie() {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.schedule(PendingCookieAction::Clear);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn token_read_from_session_cookie() {
        let headers = headers_with_cookie("theme=dusk; acharya_session=abc.def.ghi");
        assert_eq!(extract_access_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn token_read_from_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
        assert_eq!(extract_access_token(&headers).as_deref(), Some("tok"));
    }

    #[test]
    fn cookie_takes_priority_over_bearer() {
        let mut headers = headers_with_cookie("acharya_session=from-cookie");
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        assert_eq!(extract_access_token(&headers).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn empty_cookie_and_missing_header_yield_none() {
        assert_eq!(extract_access_token(&headers_with_cookie("acharya_session=")), None);
        assert_eq!(extract_access_token(&HeaderMap::new()), None);
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let value = build_clear_cookie();
        let text = value.to_str().unwrap();
        assert!(text.starts_with("acharya_session=;"));
        assert!(text.contains("Max-Age=0"));
        assert!(text.contains("HttpOnly"));
    }

    #[test]
    fn slot_hands_action_over_once() {
        let slot = CookieSlot::default();
        slot.schedule(PendingCookieAction::Clear);
        assert_eq!(slot.take(), Some(PendingCookieAction::Clear));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn apply_clear_appends_set_cookie() {
        let mut headers = HeaderMap::new();
        apply_cookie_action(&mut headers, PendingCookieAction::Clear);
        assert_eq!(headers.get_all(header::SET_COOKIE).iter().count(), 1);
    }
}
