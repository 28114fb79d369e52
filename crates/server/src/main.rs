//! Question Board - classroom question/answer board.
//!
//! This binary serves three surfaces from one port:
//!
//! - `/` - the public board display
//! - `/student` - the anonymous answer submission form
//! - `/admin` - the password-protected admin panel
//!
//! # Architecture
//!
//! - Axum web framework with Askama server-side templates
//! - Single JSON-backed aggregate guarded by a mutex, rewritten to disk
//!   on every mutation
//! - tower-sessions with an in-memory store for admin auth (sessions do
//!   not survive a restart, by design)

#![cfg_attr(not(test), forbid(unsafe_code))]

use question_board_server::config::ServerConfig;
use question_board_server::routes;
use question_board_server::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "question_board_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Build application state, loading the persisted aggregate (or the
    // default one on first run)
    let state = AppState::new(config.clone()).expect("Failed to load board data");
    tracing::info!(data_file = %config.data_file.display(), "Board data loaded");

    let app = routes::build_router(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("question board listening on {}", addr);
    tracing::info!("[BOARD VIEW]   http://{addr}/");
    tracing::info!("[STUDENT VIEW] http://{addr}/student");
    tracing::info!("[ADMIN PANEL]  http://{addr}/admin");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
