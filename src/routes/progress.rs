use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::progress_dto::{LearningPath, ProgressSummary},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/progress/summary",
    responses(
        (status = 200, description = "Lesson and quiz counts", body = ProgressSummary)
    )
)]
#[axum::debug_handler]
pub async fn get_progress_summary(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.progress_service.summary()))
}

#[utoipa::path(
    get,
    path = "/learning-path",
    responses(
        (status = 200, description = "Recommended lesson order", body = LearningPath)
    )
)]
#[axum::debug_handler]
pub async fn get_learning_path(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.progress_service.learning_path()))
}
