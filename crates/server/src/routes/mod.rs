//! HTTP route handlers for the question board.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Public board display
//! GET  /student           - Student submission form
//! GET  /health            - Liveness check
//!
//! # Public API (polled by the board and student views)
//! POST /api/submit        - Submit an answer
//! GET  /api/answers       - Answers + question + remaining time + theme
//!
//! # Admin pages
//! GET  /admin             - Login page (redirects to dashboard when authed)
//! GET  /admin/dashboard   - Dashboard (requires session)
//!
//! # Admin API (requires session except login)
//! POST /api/admin/login   - Password login
//! POST /api/admin/logout  - Clear session
//! GET  /api/admin/data    - Full aggregate
//! POST /api/admin/update  - Selective merge update
//! ```

pub mod admin;
pub mod api;
pub mod board;
pub mod student;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::middleware;
use crate::state::AppState;

/// Create the page routes router.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(board::board))
        .route("/student", get(student::student))
        .route("/admin", get(admin::login_page))
        .route("/admin/dashboard", get(admin::dashboard))
}

/// Create the API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/submit", post(api::public::submit))
        .route("/answers", get(api::public::answers))
        .route("/admin/login", post(api::admin::login))
        .route("/admin/logout", post(api::admin::logout))
        .route("/admin/data", get(api::admin::data))
        .route("/admin/update", post(api::admin::update))
}

/// Assemble the full application router with middleware.
///
/// Used by `main` and by the integration tests, which drive the router
/// in-process without a TCP listener.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(page_routes())
        .nest("/api", api_routes())
        .layer(middleware::create_session_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
