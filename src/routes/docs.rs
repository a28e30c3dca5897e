use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::lesson_dto::LessonSearchResult;
use crate::dto::progress_dto::{LearningPath, LearningPathStep, LessonsByDifficulty, ProgressSummary};
use crate::dto::quiz_dto::{QuizResult, QuizSubmission};
use crate::models::answer::QuizAnswer;
use crate::models::lesson::{Difficulty, Lesson};
use crate::models::quiz::{Quiz, QuizQuestion};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "OOP Learning API",
        description = "An educational API to learn Object-Oriented Programming concepts"
    ),
    paths(
        crate::routes::health::root,
        crate::routes::health::health,
        crate::routes::lessons::list_lessons,
        crate::routes::lessons::get_lesson,
        crate::routes::lessons::list_lessons_by_difficulty,
        crate::routes::lessons::search_lessons,
        crate::routes::quizzes::list_quizzes,
        crate::routes::quizzes::get_quiz,
        crate::routes::quizzes::list_quizzes_for_lesson,
        crate::routes::quizzes::submit_quiz,
        crate::routes::progress::get_progress_summary,
        crate::routes::progress::get_learning_path,
    ),
    components(schemas(
        Difficulty,
        Lesson,
        LessonSearchResult,
        Quiz,
        QuizQuestion,
        QuizAnswer,
        QuizSubmission,
        QuizResult,
        ProgressSummary,
        LessonsByDifficulty,
        LearningPath,
        LearningPathStep,
    ))
)]
pub struct ApiDoc;

#[axum::debug_handler]
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
