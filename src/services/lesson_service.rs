use std::sync::Arc;

use crate::dto::lesson_dto::LessonSearchResult;
use crate::error::{Error, Result};
use crate::models::lesson::{Difficulty, Lesson};
use crate::store::ContentStore;

#[derive(Clone)]
pub struct LessonService {
    store: Arc<ContentStore>,
}

impl LessonService {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub fn get_by_id(&self, id: i32) -> Result<Lesson> {
        self.store.find_lesson(id).cloned().ok_or_else(|| {
            tracing::debug!(lesson_id = id, "lesson not found");
            Error::NotFound("Lesson not found".to_string())
        })
    }

    pub fn list(&self, difficulty: Option<Difficulty>) -> Vec<Lesson> {
        self.store
            .lessons()
            .iter()
            .filter(|l| difficulty.map_or(true, |d| l.difficulty == d))
            .cloned()
            .collect()
    }

    /// Lessons whose title or content contains `keyword`, ignoring case.
    /// Key concepts never decide inclusion; they only fill `matching_concepts`.
    pub fn search(&self, keyword: &str) -> Vec<LessonSearchResult> {
        let keyword_lower = keyword.to_lowercase();
        self.store
            .lessons()
            .iter()
            .filter(|l| {
                l.title.to_lowercase().contains(&keyword_lower)
                    || l.content.to_lowercase().contains(&keyword_lower)
            })
            .map(|l| LessonSearchResult::from_lesson(l, &keyword_lower))
            .collect()
    }
}
