//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. The store lives for
//! the process lifetime only, so a restart invalidates every admin
//! session - the same effect as the original deployment regenerating its
//! cookie-signing secret on every start.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Session cookie name for the admin panel.
pub const SESSION_COOKIE_NAME: &str = "qb_admin_session";

/// Session expiry time in seconds (24 hours).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with an in-memory store.
///
/// The board runs on classroom LANs over plain HTTP, so the cookie is not
/// marked Secure; it is HttpOnly and SameSite=Strict.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(false)
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
