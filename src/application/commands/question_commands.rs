//! Question Commands

use crate::domain::QuestionId;

/// Create a question
///
/// Fields are optional so that a missing one is reported by the handler
/// instead of failing at deserialization.
#[derive(Debug, Clone, Default)]
pub struct CreateQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// Delete a question
#[derive(Debug, Clone)]
pub struct DeleteQuestion {
    pub question_id: QuestionId,
}
