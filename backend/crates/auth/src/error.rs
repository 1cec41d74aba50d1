//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! None of these come from gating a request: an unauthenticated request to a
//! protected path is a redirect outcome, not an error. They cover invalid
//! route configuration, session storage faults and rendering-layer faults.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Route is not an absolute path
    #[error("Route must start with '/': {0:?}")]
    InvalidRoute(String),

    /// Anonymous-only routes must also be public
    #[error("Anonymous-only route is not public: {0}")]
    AnonymousOnlyNotPublic(String),

    /// Redirecting to a protected login page would loop
    #[error("Login path must be a public route: {0}")]
    LoginPathProtected(String),

    /// Redirecting an authenticated user to an anonymous-only page would loop
    #[error("Landing path must not be anonymous-only: {0}")]
    LandingPathAnonymousOnly(String),

    #[error("Credential cookie name must not be empty")]
    EmptyCookieName,

    /// Persistent session storage failed
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    /// Stored session could not be encoded or decoded
    #[error("Session encoding error: {0}")]
    SessionEncoding(#[from] serde_json::Error),

    /// A page was rendered without passing through the layout guard
    #[error("Layout data missing from request")]
    LayoutDataMissing,
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidRoute(_)
            | AuthError::AnonymousOnlyNotPublic(_)
            | AuthError::LoginPathProtected(_)
            | AuthError::LandingPathAnonymousOnly(_)
            | AuthError::EmptyCookieName => ErrorKind::UnprocessableEntity,
            AuthError::Storage(_) => ErrorKind::ServiceUnavailable,
            AuthError::SessionEncoding(_) | AuthError::LayoutDataMissing => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        // 5xx details stay in the logs
        if kind.is_server_error() {
            AppError::new(kind, kind.as_str())
        } else {
            AppError::new(kind, self.to_string())
                .with_action("Fix the gate configuration and restart")
        }
    }

    fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Session storage error");
            }
            AuthError::LayoutDataMissing => {
                tracing::error!("Page rendered outside the layout guard");
            }
            _ => {
                tracing::warn!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_client_visible() {
        let err = AuthError::AnonymousOnlyNotPublic("/signup".to_string());
        let app = err.to_app_error();
        assert_eq!(app.kind(), ErrorKind::UnprocessableEntity);
        assert!(app.message().contains("/signup"));
        assert_eq!(app.action(), Some("Fix the gate configuration and restart"));
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = AuthError::from(StorageError::InvalidKey("secret/detail".to_string()));
        let app = err.to_app_error();
        assert_eq!(app.status_code(), 503);
        assert!(!app.message().contains("secret/detail"));
        assert!(app.action().is_none());
    }

    #[test]
    fn test_storage_error_maps_to_unavailable() {
        let err = AuthError::from(StorageError::Poisoned);
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
    }
}
