use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::lesson_dto::{LessonSearchQuery, LessonSearchResult},
    error::Result,
    models::lesson::{Difficulty, Lesson},
    AppState,
};

#[utoipa::path(
    get,
    path = "/lessons",
    responses(
        (status = 200, description = "All lessons", body = Vec<Lesson>)
    )
)]
#[axum::debug_handler]
pub async fn list_lessons(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.lesson_service.list(None)))
}

#[utoipa::path(
    get,
    path = "/lessons/{lesson_id}",
    params(
        ("lesson_id" = i32, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Lesson found", body = Lesson),
        (status = 404, description = "Lesson not found")
    )
)]
#[axum::debug_handler]
pub async fn get_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let lesson = state.lesson_service.get_by_id(lesson_id)?;
    Ok(Json(lesson))
}

#[utoipa::path(
    get,
    path = "/lessons/difficulty/{difficulty}",
    params(
        ("difficulty" = Difficulty, Path, description = "beginner, intermediate or advanced")
    ),
    responses(
        (status = 200, description = "Lessons at this difficulty", body = Vec<Lesson>),
        (status = 400, description = "Unknown difficulty")
    )
)]
#[axum::debug_handler]
pub async fn list_lessons_by_difficulty(
    State(state): State<AppState>,
    Path(difficulty): Path<Difficulty>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.lesson_service.list(Some(difficulty))))
}

#[utoipa::path(
    get,
    path = "/lessons/search",
    params(LessonSearchQuery),
    responses(
        (status = 200, description = "Lessons mentioning the keyword", body = Vec<LessonSearchResult>),
        (status = 400, description = "Missing or invalid keyword")
    )
)]
#[axum::debug_handler]
pub async fn search_lessons(
    State(state): State<AppState>,
    Query(query): Query<LessonSearchQuery>,
) -> Result<impl IntoResponse> {
    query.validate()?;
    let results = state.lesson_service.search(&query.keyword);
    tracing::debug!(keyword = %query.keyword, hits = results.len(), "lesson search");
    Ok(Json(results))
}
