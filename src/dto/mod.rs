pub mod lesson_dto;
pub mod progress_dto;
pub mod quiz_dto;
