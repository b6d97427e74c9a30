use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::quiz::{QuestionResponse, VideoResponse, group_answers};
use crate::services::catalog::CatalogService;
use crate::state::AppState;

pub const WELCOME_TEXT: &str = "Welcome to COVID 19 Quiz API";

#[utoipa::path(
    get,
    path = "/welcome",
    tag = "Quiz",
    operation_id = "welcome",
    summary = "Greeting",
    responses(
        (status = 200, description = "Static greeting", body = String, content_type = "text/plain"),
    ),
)]
#[instrument]
pub async fn welcome() -> &'static str {
    WELCOME_TEXT
}

#[utoipa::path(
    get,
    path = "/questions",
    tag = "Quiz",
    operation_id = "listQuestions",
    summary = "List questions with their answers",
    responses(
        (status = 200, description = "All questions, each with its answer options", body = Vec<QuestionResponse>),
        (status = 500, description = "Internal error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionResponse>>, AppError> {
    let rows = CatalogService::new(&state.db).questions_with_answers().await?;
    Ok(Json(group_answers(rows)))
}

#[utoipa::path(
    get,
    path = "/videos",
    tag = "Quiz",
    operation_id = "listVideos",
    summary = "List informational videos",
    responses(
        (status = 200, description = "All videos", body = Vec<VideoResponse>),
        (status = 500, description = "Internal error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_videos(
    State(state): State<AppState>,
) -> Result<Json<Vec<VideoResponse>>, AppError> {
    let videos = CatalogService::new(&state.db).list_videos().await?;
    Ok(Json(videos.into_iter().map(VideoResponse::from).collect()))
}
