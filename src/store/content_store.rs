use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::lesson::Lesson;
use crate::models::quiz::Quiz;

/// Read-only lessons and quizzes, validated once and never mutated.
#[derive(Debug, Clone)]
pub struct ContentStore {
    lessons: Vec<Lesson>,
    quizzes: Vec<Quiz>,
}

impl ContentStore {
    pub fn new(lessons: Vec<Lesson>, quizzes: Vec<Quiz>) -> Result<Self> {
        let mut lesson_ids = HashSet::new();
        for lesson in &lessons {
            if !lesson_ids.insert(lesson.id) {
                return Err(Error::Content(format!("duplicate lesson id {}", lesson.id)));
            }
        }

        let mut quiz_ids = HashSet::new();
        for quiz in &quizzes {
            if !quiz_ids.insert(quiz.id) {
                return Err(Error::Content(format!("duplicate quiz id {}", quiz.id)));
            }
            let mut question_ids = HashSet::new();
            for q in &quiz.questions {
                if !question_ids.insert(q.id) {
                    return Err(Error::Content(format!(
                        "quiz {} has duplicate question id {}",
                        quiz.id, q.id
                    )));
                }
                let valid = usize::try_from(q.correct_answer)
                    .map(|idx| idx < q.options.len())
                    .unwrap_or(false);
                if !valid {
                    return Err(Error::Content(format!(
                        "quiz {} question {} has correct answer {} outside its {} options",
                        quiz.id,
                        q.id,
                        q.correct_answer,
                        q.options.len()
                    )));
                }
            }
        }

        Ok(Self { lessons, quizzes })
    }

    /// The built-in OOP course.
    pub fn seeded() -> Result<Self> {
        Self::new(super::seed::lessons(), super::seed::quizzes())
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn find_lesson(&self, id: i32) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    pub fn find_quiz(&self, id: i32) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }
}
