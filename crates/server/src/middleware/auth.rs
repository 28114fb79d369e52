//! Authentication middleware and extractors for the admin panel.
//!
//! There is no per-user identity: admin auth is a single shared password
//! checked at login, after which a flag in the session marks the client
//! as authenticated.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

/// Session keys used by the admin panel.
pub mod session_keys {
    /// Boolean flag set after a successful password login.
    pub const ADMIN_LOGGED_IN: &str = "admin.logged_in";
}

/// Extractor that requires admin authentication.
///
/// If the client is not logged in, returns a redirect to the login page
/// for HTML requests, or 401 Unauthorized for API requests.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_auth: RequireAdmin) -> impl IntoResponse {
///     "admins only"
/// }
/// ```
pub struct RequireAdmin;

/// Error returned when admin authentication is required but missing.
pub enum AdminAuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/admin").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminAuthRejection::Unauthorized)?;

        let logged_in = session
            .get::<bool>(session_keys::ADMIN_LOGGED_IN)
            .await
            .ok()
            .flatten()
            .unwrap_or(false);

        // Nested routers strip the matched prefix from `parts.uri`; the
        // API-vs-page decision needs the path as the client sent it.
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map_or(parts.uri.path(), |uri| uri.path());

        if logged_in {
            Ok(Self)
        } else if path.starts_with("/api/") {
            Err(AdminAuthRejection::Unauthorized)
        } else {
            Err(AdminAuthRejection::RedirectToLogin)
        }
    }
}

/// Mark the session as authenticated after a successful login.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_admin_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::ADMIN_LOGGED_IN, true).await
}

/// Clear the authenticated flag from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_admin_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<bool>(session_keys::ADMIN_LOGGED_IN).await?;
    Ok(())
}

/// Whether the session currently carries the authenticated flag.
pub async fn is_admin_session(session: &Session) -> bool {
    session
        .get::<bool>(session_keys::ADMIN_LOGGED_IN)
        .await
        .ok()
        .flatten()
        .unwrap_or(false)
}
