use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// What went wrong, coarse enough to pick an HTTP status and a fallback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    DatabaseError,
    StorageError,
    Unauthorized,
    Forbidden,
    ServiceUnavailable,
    InternalError,
}

impl AppErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppErrorKind::NotFound => "NotFound",
            AppErrorKind::BadRequest => "BadRequest",
            AppErrorKind::ValidationError => "ValidationError",
            AppErrorKind::DatabaseError => "DatabaseError",
            AppErrorKind::StorageError => "StorageError",
            AppErrorKind::Unauthorized => "Unauthorized",
            AppErrorKind::Forbidden => "Forbidden",
            AppErrorKind::ServiceUnavailable => "ServiceUnavailable",
            AppErrorKind::InternalError => "InternalError",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            AppErrorKind::NotFound => 404,
            AppErrorKind::BadRequest => 400,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::Unauthorized => 401,
            AppErrorKind::Forbidden => 403,
            AppErrorKind::ServiceUnavailable => 503,
            AppErrorKind::DatabaseError | AppErrorKind::StorageError | AppErrorKind::InternalError => {
                500
            }
        }
    }

    /// Failures a dashboard rides out by falling back to role labels.
    /// Everything else is a fault in the request or the portal itself.
    pub fn is_degradable(&self) -> bool {
        matches!(
            self,
            AppErrorKind::NotFound | AppErrorKind::DatabaseError | AppErrorKind::ServiceUnavailable
        )
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error shared by the server functions and the portal client. Travels as
/// JSON inside a `ServerFnError`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    /// A form was rejected; `field_errors` maps field name to message.
    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            field_errors,
            ..Self::new(AppErrorKind::ValidationError, message)
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::DatabaseError, message)
    }

    /// The demo identity record could not be read or written.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::StorageError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    /// A collaborator is switched off by configuration or unreachable.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ServiceUnavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    pub fn status_code_u16(&self) -> u16 {
        self.kind.status_code()
    }

    /// Recover an `AppError` from the text of a `ServerFnError`.
    ///
    /// The server function layer wraps the JSON payload in prose, e.g.
    /// `error running server function: {"kind":"NotFound",...} (details: None)`,
    /// so the outermost braces are cut out before parsing.
    pub fn from_server_error(text: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(text) {
            return Some(err);
        }
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        (end > start)
            .then(|| serde_json::from_str(&text[start..=end]).ok())
            .flatten()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code_u16())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_payload_is_recovered() {
        let wrapped = r#"error running server function: {"kind":"NotFound","message":"Profile not found"} (details: None)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Profile not found");

        let bare = r#"{"kind":"Unauthorized","message":"Invalid token"}"#;
        assert_eq!(AppError::from_server_error(bare).unwrap().kind, AppErrorKind::Unauthorized);
    }

    #[test]
    fn text_without_a_payload_is_rejected() {
        for text in ["", "not json at all", "} backwards {", "{\"kind\":\"Nope\"}"] {
            assert!(AppError::from_server_error(text).is_none(), "{text}");
        }
    }

    #[test]
    fn validation_keeps_field_errors() {
        let fields = HashMap::from([("reason".to_string(), "required".to_string())]);
        let err = AppError::validation("Leave request incomplete", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors["reason"], "required");
        assert!(AppError::storage("quota exceeded").field_errors.is_empty());
    }

    #[test]
    fn statuses() {
        let cases = [
            (AppError::not_found(""), 404),
            (AppError::bad_request(""), 400),
            (AppError::validation("", HashMap::new()), 422),
            (AppError::database(""), 500),
            (AppError::storage(""), 500),
            (AppError::unauthorized(""), 401),
            (AppError::forbidden(""), 403),
            (AppError::unavailable(""), 503),
            (AppError::internal(""), 500),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code_u16(), status, "{}", err.kind);
        }
    }

    #[test]
    fn only_collaborator_failures_degrade() {
        assert!(AppErrorKind::NotFound.is_degradable());
        assert!(AppErrorKind::ServiceUnavailable.is_degradable());
        assert!(!AppErrorKind::Unauthorized.is_degradable());
        assert!(!AppErrorKind::StorageError.is_degradable());
    }

    #[test]
    fn display_names_the_kind() {
        let err = AppError::unauthorized("session expired");
        assert_eq!(err.to_string(), "Unauthorized: session expired");
    }
}
