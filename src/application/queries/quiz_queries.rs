//! Quiz Queries

use crate::domain::{QuestionId, QuizScope};

/// Next question of a quiz round
#[derive(Debug, Clone)]
pub struct NextQuizQuestion {
    pub scope: QuizScope,
    pub previous_questions: Vec<QuestionId>,
}
