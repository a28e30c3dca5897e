pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use std::sync::Arc;

use crate::services::{
    grading_service::DuplicateAnswerPolicy, lesson_service::LessonService,
    progress_service::ProgressService, quiz_service::QuizService,
};
use crate::store::ContentStore;

#[derive(Clone)]
pub struct AppState {
    pub lesson_service: LessonService,
    pub quiz_service: QuizService,
    pub progress_service: ProgressService,
}

impl AppState {
    pub fn new(store: ContentStore) -> Self {
        let config = crate::config::get_config();
        Self::with_policy(store, config.duplicate_answer_policy)
    }

    pub fn with_policy(store: ContentStore, duplicate_policy: DuplicateAnswerPolicy) -> Self {
        let store = Arc::new(store);

        let lesson_service = LessonService::new(store.clone());
        let quiz_service = QuizService::new(store.clone(), duplicate_policy);
        let progress_service = ProgressService::new(store.clone());

        Self {
            lesson_service,
            quiz_service,
            progress_service,
        }
    }
}
