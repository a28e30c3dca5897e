pub mod docs;
pub mod health;
pub mod lessons;
pub mod progress;
pub mod quizzes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::cors::cors_layer;
use crate::AppState;

/// The complete application: routes, state and the shared layers.
pub fn app(state: AppState, config: &Config) -> Router {
    router()
        .with_state(state)
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
}

/// Every public route, without state or layers.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/lessons", get(lessons::list_lessons))
        .route("/lessons/search", get(lessons::search_lessons))
        .route(
            "/lessons/difficulty/:difficulty",
            get(lessons::list_lessons_by_difficulty),
        )
        .route("/lessons/:lesson_id", get(lessons::get_lesson))
        .route("/quizzes", get(quizzes::list_quizzes))
        .route(
            "/quizzes/lesson/:lesson_id",
            get(quizzes::list_quizzes_for_lesson),
        )
        .route("/quizzes/:quiz_id", get(quizzes::get_quiz))
        .route("/quizzes/:quiz_id/submit", post(quizzes::submit_quiz))
        .route("/progress/summary", get(progress::get_progress_summary))
        .route("/learning-path", get(progress::get_learning_path))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
}
