use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::leaderboard::{LeaderboardEntry, SubmitScoreRequest, validate_submit_score};
use crate::services::leaderboard::LeaderboardService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/leaderboard",
    tag = "Leaderboard",
    operation_id = "submitScore",
    summary = "Submit a score and get the leaderboard",
    description = "Records the player's score, replacing any earlier one, and returns every leaderboard row.",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Full leaderboard", body = Vec<LeaderboardEntry>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(username = %payload.username, score = payload.score))]
pub async fn submit_score(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SubmitScoreRequest>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    validate_submit_score(&payload)?;

    let board = LeaderboardService::new(&state.db);
    board.upsert_score(payload.username.trim(), payload.score).await?;

    let rows = board.list().await?;
    Ok(Json(rows.into_iter().map(LeaderboardEntry::from).collect()))
}
