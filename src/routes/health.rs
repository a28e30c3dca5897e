use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
    });
    (StatusCode::OK, Json(body))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API name, version and endpoint map")
    )
)]
#[axum::debug_handler]
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to OOP Learning API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "lessons": "/lessons",
            "lesson_by_id": "/lessons/{lesson_id}",
            "lessons_by_difficulty": "/lessons/difficulty/{difficulty}",
            "lesson_search": "/lessons/search?keyword={keyword}",
            "quizzes": "/quizzes",
            "quiz": "/quizzes/{quiz_id}",
            "quizzes_for_lesson": "/quizzes/lesson/{lesson_id}",
            "submit_quiz": "/quizzes/{quiz_id}/submit",
            "progress_summary": "/progress/summary",
            "learning_path": "/learning-path",
            "openapi": "/api-docs/openapi.json"
        }
    }))
}
