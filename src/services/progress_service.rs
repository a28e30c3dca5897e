use std::sync::Arc;

use crate::dto::progress_dto::{LearningPath, LearningPathStep, LessonsByDifficulty, ProgressSummary};
use crate::models::lesson::Difficulty;
use crate::store::ContentStore;

/// (lesson id, title, difficulty, minutes) in recommended order.
const LEARNING_PATH: [(i32, &str, Difficulty, u32); 5] = [
    (1, "Introduction to Classes and Objects", Difficulty::Beginner, 30),
    (2, "Inheritance", Difficulty::Intermediate, 40),
    (3, "Encapsulation", Difficulty::Intermediate, 40),
    (4, "Polymorphism", Difficulty::Advanced, 45),
    (5, "Abstraction", Difficulty::Advanced, 45),
];

#[derive(Clone)]
pub struct ProgressService {
    store: Arc<ContentStore>,
}

impl ProgressService {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub fn summary(&self) -> ProgressSummary {
        let lessons = self.store.lessons();
        let count = |d: Difficulty| lessons.iter().filter(|l| l.difficulty == d).count();

        ProgressSummary {
            total_lessons: lessons.len(),
            lessons_by_difficulty: LessonsByDifficulty {
                beginner: count(Difficulty::Beginner),
                intermediate: count(Difficulty::Intermediate),
                advanced: count(Difficulty::Advanced),
            },
            total_quizzes: self.store.quizzes().len(),
            total_quiz_questions: self.store.quizzes().iter().map(|q| q.questions.len()).sum(),
        }
    }

    pub fn learning_path(&self) -> LearningPath {
        LearningPath {
            title: "Complete OOP Learning Path".to_string(),
            description: "A recommended progression to learn OOP concepts".to_string(),
            path: LEARNING_PATH
                .iter()
                .zip(1u32..)
                .map(|(&(lesson_id, title, difficulty, minutes), step)| LearningPathStep {
                    step,
                    lesson_id,
                    title: title.to_string(),
                    difficulty,
                    time_estimate: format!("{} minutes", minutes),
                })
                .collect(),
        }
    }
}
