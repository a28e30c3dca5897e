use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::answer::QuizAnswer;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuizSubmission {
    #[validate(length(max = 256))]
    pub answers: Vec<QuizAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub passed: bool,
    pub feedback: Vec<String>,
}
