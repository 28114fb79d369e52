//! Public board page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Board page template.
///
/// The page renders the question once server-side and then keeps itself
/// fresh by polling `GET /api/answers`.
#[derive(Template, WebTemplate)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    /// Question currently on display.
    pub question: String,
    /// Display theme from settings.
    pub theme: String,
}

/// Display the public board.
#[instrument(skip(state))]
pub async fn board(State(state): State<AppState>) -> Result<BoardTemplate> {
    let board = state.board().await;

    Ok(BoardTemplate {
        question: board.current_question.clone(),
        theme: board.settings.theme.clone(),
    })
}
