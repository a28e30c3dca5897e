use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestion {
    pub id: i32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Quiz {
    pub id: i32,
    /// Informational link to the lesson this quiz covers.
    pub lesson_id: i32,
    pub title: String,
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn question(&self, question_id: i32) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}
