pub mod grading_service;
pub mod lesson_service;
pub mod progress_service;
pub mod quiz_service;
