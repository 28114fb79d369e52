//! Unified error handling for the question board server.
//!
//! Provides a unified `AppError` type; route handlers return
//! `Result<T, AppError>` and the `IntoResponse` impl maps each variant to
//! a status code without leaking internal detail to clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use question_board_core::{StoreError, SubmitError};

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading or writing the persistent store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Rendering a page template failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Client sent an invalid submission.
    #[error("Validation error: {0}")]
    Validation(#[from] SubmitError),

    /// Session operation failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Caller is not authenticated.
    #[error("Unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Server-side failures get logged; client mistakes do not.
        if matches!(self, Self::Store(_) | Self::Template(_) | Self::Session(_)) {
            tracing::error!(error = %self, "Request error");
        }

        match self {
            Self::Store(_) | Self::Template(_) | Self::Session(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            // API contract: failed submissions answer 400 {"success": false}.
            Self::Validation(_) => {
                (StatusCode::BAD_REQUEST, Json(json!({"success": false}))).into_response()
            }
            Self::Unauthorized => {
                (StatusCode::UNAUTHORIZED, Json(json!({"success": false}))).into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Validation(SubmitError::Empty);
        assert_eq!(err.to_string(), "Validation error: answer text is empty");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::Validation(SubmitError::Empty)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(get_status(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            get_status(AppError::Store(StoreError::Io(std::io::Error::other(
                "disk gone"
            )))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
