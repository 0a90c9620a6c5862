//! Quiz Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::QuestionRepositoryPort;
use crate::application::queries::NextQuizQuestion;
use crate::domain::{pick_question, Question};

/// NextQuizQuestion Handler
pub struct NextQuizQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl NextQuizQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    /// `Ok(None)` means every question in scope has been played.
    pub async fn handle(&self, query: NextQuizQuestion) -> Result<Option<Question>, ApplicationError> {
        let candidates = self
            .question_repo
            .find_candidates(query.scope, &query.previous_questions)
            .await?;
        let remaining = candidates.len();
        let picked = pick_question(candidates, &mut rand::thread_rng());

        tracing::debug!(
            scope = ?query.scope,
            previous = query.previous_questions.len(),
            remaining,
            picked = ?picked.as_ref().map(|q| q.id),
            "Quiz question selected"
        );

        Ok(picked)
    }
}
