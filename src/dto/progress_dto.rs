use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::lesson::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LessonsByDifficulty {
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProgressSummary {
    pub total_lessons: usize,
    pub lessons_by_difficulty: LessonsByDifficulty,
    pub total_quizzes: usize,
    pub total_quiz_questions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LearningPathStep {
    pub step: u32,
    pub lesson_id: i32,
    pub title: String,
    pub difficulty: Difficulty,
    pub time_estimate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LearningPath {
    pub title: String,
    pub description: String,
    pub path: Vec<LearningPathStep>,
}
