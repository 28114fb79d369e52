//! Public JSON API: answer submission and the polling endpoint.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::instrument;

use question_board_core::Answer;

use crate::error::Result;
use crate::state::AppState;

/// Body of `POST /api/submit`.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Raw answer text; trimmed and validated by the board.
    #[serde(default)]
    pub answer: String,
}

/// Response of `GET /api/answers`.
#[derive(Debug, Serialize)]
pub struct AnswersResponse {
    pub answers: Vec<Answer>,
    pub question: String,
    /// Whole seconds until rotation; absent when no expiration is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_time: Option<i64>,
    pub theme: String,
}

/// Accept a student answer.
///
/// POST /api/submit
///
/// Empty or whitespace-only text answers 400 `{"success": false}`.
#[instrument(skip(state, request))]
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<Value>> {
    let mut board = state.board().await;
    board.submit(&request.answer)?;
    state.commit(&board)?;

    Ok(Json(json!({"success": true})))
}

/// The polling endpoint the board and student views refresh from.
///
/// GET /api/answers
///
/// Checks expiration first: a passed deadline rotates the question before
/// the response is built (lazy expiration - no background timer exists).
#[instrument(skip(state))]
pub async fn answers(State(state): State<AppState>) -> Result<Json<AnswersResponse>> {
    let now = Utc::now().timestamp();
    let mut board = state.board().await;

    if board.check_expiration(now) {
        state.commit(&board)?;
    }

    Ok(Json(AnswersResponse {
        answers: board.answers.clone(),
        question: board.current_question.clone(),
        remaining_time: board.remaining_time(now),
        theme: board.settings.theme.clone(),
    }))
}
