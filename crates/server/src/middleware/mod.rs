//! HTTP middleware stack for the question board.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Session layer (tower-sessions with in-memory store)
//!
//! Auth is enforced per-route via the [`auth::RequireAdmin`] extractor
//! rather than a router-wide guard: only the admin dashboard and the
//! `/api/admin/*` endpoints are protected.

pub mod auth;
pub mod session;

pub use auth::{RequireAdmin, clear_admin_session, set_admin_session};
pub use session::create_session_layer;
