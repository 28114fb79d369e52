//! Admin JSON API: login, logout, full-state read, selective update.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;
use tracing::instrument;

use question_board_core::UpdatePatch;

use crate::error::Result;
use crate::middleware::{RequireAdmin, clear_admin_session, set_admin_session};
use crate::state::AppState;

/// Body of `POST /api/admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

/// Password login.
///
/// POST /api/admin/login
///
/// Plaintext comparison against the stored password; a match sets the
/// session flag, a mismatch answers 401 without touching the session.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Response> {
    let password_matches = {
        let board = state.board().await;
        request.password == board.password
    };

    if password_matches {
        set_admin_session(&session).await?;
        Ok(Json(json!({"success": true})).into_response())
    } else {
        Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Incorrect password"})),
        )
            .into_response())
    }
}

/// Clear the authenticated session.
///
/// POST /api/admin/logout
#[instrument(skip_all)]
pub async fn logout(_auth: RequireAdmin, session: Session) -> Result<Json<Value>> {
    clear_admin_session(&session).await?;
    Ok(Json(json!({"success": true})))
}

/// Return the entire aggregate verbatim to the authenticated admin.
///
/// GET /api/admin/data
///
/// The response includes the plaintext password field; the admin panel
/// uses it to prefill the settings form.
#[instrument(skip_all)]
pub async fn data(_auth: RequireAdmin, State(state): State<AppState>) -> Result<Json<Value>> {
    let board = state.board().await;
    Ok(Json(serde_json::to_value(&*board).map_err(
        question_board_core::StoreError::from,
    )?))
}

/// Selective merge update: only keys present in the body are applied.
///
/// POST /api/admin/update
///
/// Returns the full updated aggregate alongside the success flag.
#[instrument(skip_all)]
pub async fn update(
    _auth: RequireAdmin,
    State(state): State<AppState>,
    Json(patch): Json<UpdatePatch>,
) -> Result<Json<Value>> {
    let now = Utc::now().timestamp();
    let mut board = state.board().await;

    board.apply_update(patch, now);
    state.commit(&board)?;

    let data = serde_json::to_value(&*board).map_err(question_board_core::StoreError::from)?;
    Ok(Json(json!({"success": true, "data": data})))
}
