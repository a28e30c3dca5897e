use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One submitted (question id, chosen option index) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuizAnswer {
    pub question_id: i32,
    pub answer: i32,
}
