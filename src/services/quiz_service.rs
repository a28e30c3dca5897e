use std::sync::Arc;

use crate::dto::quiz_dto::{QuizResult, QuizSubmission};
use crate::error::{Error, Result};
use crate::models::quiz::Quiz;
use crate::services::grading_service::{DuplicateAnswerPolicy, GradingService};
use crate::store::ContentStore;

#[derive(Clone)]
pub struct QuizService {
    store: Arc<ContentStore>,
    duplicate_policy: DuplicateAnswerPolicy,
}

impl QuizService {
    pub fn new(store: Arc<ContentStore>, duplicate_policy: DuplicateAnswerPolicy) -> Self {
        Self {
            store,
            duplicate_policy,
        }
    }

    pub fn list(&self) -> Vec<Quiz> {
        self.store.quizzes().to_vec()
    }

    pub fn get_by_id(&self, id: i32) -> Result<Quiz> {
        self.find(id).cloned()
    }

    pub fn list_for_lesson(&self, lesson_id: i32) -> Vec<Quiz> {
        self.store
            .quizzes()
            .iter()
            .filter(|q| q.lesson_id == lesson_id)
            .cloned()
            .collect()
    }

    pub fn submit(&self, quiz_id: i32, submission: &QuizSubmission) -> Result<QuizResult> {
        let quiz = self.find(quiz_id)?;
        let result = GradingService::grade(quiz, &submission.answers, self.duplicate_policy);
        tracing::info!(
            quiz_id,
            submitted = submission.answers.len(),
            score = result.score,
            total = result.total,
            passed = result.passed,
            "quiz graded"
        );
        Ok(result)
    }

    fn find(&self, id: i32) -> Result<&Quiz> {
        self.store.find_quiz(id).ok_or_else(|| {
            tracing::debug!(quiz_id = id, "quiz not found");
            Error::NotFound("Quiz not found".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::answer::QuizAnswer;

    fn service(policy: DuplicateAnswerPolicy) -> QuizService {
        QuizService::new(Arc::new(ContentStore::seeded().unwrap()), policy)
    }

    fn submission(pairs: &[(i32, i32)]) -> QuizSubmission {
        QuizSubmission {
            answers: pairs
                .iter()
                .map(|&(question_id, answer)| QuizAnswer {
                    question_id,
                    answer,
                })
                .collect(),
        }
    }

    #[test]
    fn unknown_quiz_is_not_found() {
        let svc = service(DuplicateAnswerPolicy::CountEach);
        assert!(matches!(svc.get_by_id(7), Err(Error::NotFound(_))));
        assert!(matches!(
            svc.submit(7, &submission(&[(1, 1)])),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn lists_quizzes_for_lesson() {
        let svc = service(DuplicateAnswerPolicy::CountEach);
        assert_eq!(svc.list().len(), 2);
        let for_lesson: Vec<i32> = svc.list_for_lesson(2).iter().map(|q| q.id).collect();
        assert_eq!(for_lesson, vec![2]);
        assert!(svc.list_for_lesson(5).is_empty());
    }

    #[test]
    fn submit_grades_against_seeded_key() {
        let svc = service(DuplicateAnswerPolicy::CountEach);
        let result = svc.submit(1, &submission(&[(1, 1), (2, 0), (3, 2)])).unwrap();
        assert_eq!((result.score, result.total), (2, 3));
        assert_eq!(result.percentage, 66.67);
        assert!(!result.passed);
    }

    #[test]
    fn submit_honours_configured_duplicate_policy() {
        let dupes = submission(&[(1, 1), (1, 1)]);
        let literal = service(DuplicateAnswerPolicy::CountEach).submit(1, &dupes).unwrap();
        assert_eq!(literal.score, 2);
        let strict = service(DuplicateAnswerPolicy::FirstOnly).submit(1, &dupes).unwrap();
        assert_eq!(strict.score, 1);
        assert_eq!(strict.total, 3);
    }
}
