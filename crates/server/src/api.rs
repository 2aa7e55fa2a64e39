use dioxus::prelude::*;
use shared_types::{FeatureFlags, Profile, SessionIdentity};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt};

/// Resolve the caller's session from the current request.
/// Prefers middleware-injected Claims, falls back to parsing headers.
#[cfg(feature = "server")]
fn current_session() -> Option<SessionIdentity> {
    use crate::auth::{jwt, resolve_session};

    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();
    let claims = parts.extensions.get::<jwt::Claims>().cloned();
    let headers = parts.headers.clone();
    resolve_session(claims.as_ref(), &headers)
}

/// Get the current feature flags. No auth required; flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// The signed-in user, or `None` when the request carries no valid token.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_session() -> Result<Option<SessionIdentity>, ServerFnError> {
    let session = current_session();
    match &session {
        Some(s) => tracing::debug!(user = %s.id, role = s.role.as_str(), "session resolved"),
        None => tracing::debug!("no active session"),
    }
    Ok(session)
}

/// End the issued session by expiring the session cookie. Idempotent.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    if let Some(session) = current_session() {
        tracing::info!(user = %session.id, "signing out");
    }
    crate::auth::cookies::schedule_clear_cookie();
    Ok(())
}

/// Fetch the display profile for `user_id`.
///
/// Callers may read their own profile; admins may read any. Answers
/// `NotFound` when no row exists or the records store is switched off.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_profile(user_id: String) -> Result<Profile, ServerFnError> {
    use shared_types::{AppError, Role};

    let session = current_session()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    if session.id != user_id && session.role != Role::Admin {
        return Err(AppError::forbidden("Cannot read another user's profile").into_server_fn_error());
    }

    if !crate::config::feature_flags().records_db {
        return Err(AppError::not_found("Profile records are not enabled").into_server_fn_error());
    }

    let db = get_db().await.map_err(|e| e.into_server_fn_error())?;

    let profile = sqlx::query_as::<_, Profile>(
        "SELECT full_name, role, department, student_id FROM profiles WHERE user_id = $1",
    )
    .bind(&user_id)
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    profile.ok_or_else(|| AppError::not_found("Profile not found").into_server_fn_error())
}
