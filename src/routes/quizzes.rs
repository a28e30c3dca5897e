use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::quiz_dto::{QuizResult, QuizSubmission},
    error::Result,
    models::quiz::Quiz,
    AppState,
};

#[utoipa::path(
    get,
    path = "/quizzes",
    responses(
        (status = 200, description = "All quizzes", body = Vec<Quiz>)
    )
)]
#[axum::debug_handler]
pub async fn list_quizzes(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.quiz_service.list()))
}

#[utoipa::path(
    get,
    path = "/quizzes/{quiz_id}",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Quiz found", body = Quiz),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let quiz = state.quiz_service.get_by_id(quiz_id)?;
    Ok(Json(quiz))
}

#[utoipa::path(
    get,
    path = "/quizzes/lesson/{lesson_id}",
    params(
        ("lesson_id" = i32, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Quizzes attached to the lesson", body = Vec<Quiz>)
    )
)]
#[axum::debug_handler]
pub async fn list_quizzes_for_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<i32>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.quiz_service.list_for_lesson(lesson_id)))
}

#[utoipa::path(
    post,
    path = "/quizzes/{quiz_id}/submit",
    params(
        ("quiz_id" = i32, Path, description = "Quiz ID")
    ),
    request_body = QuizSubmission,
    responses(
        (status = 200, description = "Graded result", body = QuizResult),
        (status = 400, description = "Invalid submission"),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn submit_quiz(
    State(state): State<AppState>,
    Path(quiz_id): Path<i32>,
    Json(submission): Json<QuizSubmission>,
) -> Result<impl IntoResponse> {
    submission.validate()?;
    let result = state.quiz_service.submit(quiz_id, &submission)?;
    Ok(Json(result))
}
