use std::collections::HashSet;
use std::str::FromStr;

use crate::dto::quiz_dto::QuizResult;
use crate::models::answer::QuizAnswer;
use crate::models::quiz::Quiz;
use crate::utils::math::round_to;

/// Inclusive pass mark, in percent.
pub const PASSING_PERCENTAGE: f64 = 70.0;

/// How repeated answers for the same question id are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateAnswerPolicy {
    /// Every occurrence is graded and can add to the score.
    #[default]
    CountEach,
    /// Only the first answer per question id is graded.
    FirstOnly,
}

impl FromStr for DuplicateAnswerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count_each" => Ok(DuplicateAnswerPolicy::CountEach),
            "first_only" => Ok(DuplicateAnswerPolicy::FirstOnly),
            other => Err(format!("unknown duplicate answer policy '{}'", other)),
        }
    }
}

pub struct GradingService;

impl GradingService {
    /// Grades `answers` against the quiz's answer key in submission order.
    ///
    /// Answers naming a question id the quiz does not define are skipped and
    /// produce no feedback. `total` is always the quiz's question count.
    pub fn grade(quiz: &Quiz, answers: &[QuizAnswer], policy: DuplicateAnswerPolicy) -> QuizResult {
        let mut score: usize = 0;
        let mut feedback: Vec<String> = Vec::new();
        let mut seen: HashSet<i32> = HashSet::new();

        for answer in answers {
            let Some(question) = quiz.question(answer.question_id) else {
                continue;
            };

            if policy == DuplicateAnswerPolicy::FirstOnly && !seen.insert(answer.question_id) {
                continue;
            }

            if answer.answer == question.correct_answer {
                score += 1;
                feedback.push(format!(
                    "Q{}: ✓ Correct! {}",
                    answer.question_id, question.explanation
                ));
            } else {
                feedback.push(format!(
                    "Q{}: ✗ Incorrect. {}",
                    answer.question_id, question.explanation
                ));
            }
        }

        let total = quiz.questions.len();
        let percentage = if total > 0 {
            round_to(score as f64 / total as f64 * 100.0, 2)
        } else {
            0.0
        };
        // Decided on the reported (rounded) percentage so the verdict never
        // contradicts the number returned alongside it.
        let passed = percentage >= PASSING_PERCENTAGE;

        QuizResult {
            score,
            total,
            percentage,
            passed,
            feedback,
        }
    }
}
