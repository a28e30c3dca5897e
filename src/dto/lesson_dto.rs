use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::lesson::{Difficulty, Lesson};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LessonSearchQuery {
    /// Case-insensitive term matched against lesson titles and content.
    #[validate(length(max = 200))]
    pub keyword: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LessonSearchResult {
    pub id: i32,
    pub title: String,
    pub difficulty: Difficulty,
    pub matching_concepts: Vec<String>,
}

impl LessonSearchResult {
    pub fn from_lesson(lesson: &Lesson, keyword_lower: &str) -> Self {
        Self {
            id: lesson.id,
            title: lesson.title.clone(),
            difficulty: lesson.difficulty,
            matching_concepts: lesson
                .key_concepts
                .iter()
                .filter(|c| c.to_lowercase().contains(keyword_lower))
                .cloned()
                .collect(),
        }
    }
}
