//! Admin page route handlers.
//!
//! The login page is public; an already-authenticated session is bounced
//! straight to the dashboard. The dashboard itself requires the session
//! flag and redirects back to `/admin` without it.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::middleware::RequireAdmin;
use crate::middleware::auth::is_admin_session;

/// Admin login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin_login.html")]
pub struct AdminLoginTemplate;

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin_dashboard.html")]
pub struct AdminDashboardTemplate;

/// Render the login page, or redirect to the dashboard when authed.
///
/// GET /admin
pub async fn login_page(session: Session) -> Response {
    if is_admin_session(&session).await {
        return Redirect::to("/admin/dashboard").into_response();
    }
    AdminLoginTemplate.into_response()
}

/// Render the admin dashboard.
///
/// GET /admin/dashboard
pub async fn dashboard(_auth: RequireAdmin) -> AdminDashboardTemplate {
    AdminDashboardTemplate
}
