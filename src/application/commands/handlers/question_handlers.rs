//! Question Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateQuestion, DeleteQuestion};
use crate::application::error::ApplicationError;
use crate::application::ports::QuestionRepositoryPort;
use crate::domain::{CategoryId, NewQuestion, QuestionId};

// ============================================================================
// CreateQuestion
// ============================================================================

/// CreateQuestion Handler
pub struct CreateQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl CreateQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(&self, command: CreateQuestion) -> Result<QuestionId, ApplicationError> {
        let new_question = NewQuestion {
            question: command
                .question
                .ok_or_else(|| ApplicationError::validation("question is required"))?,
            answer: command
                .answer
                .ok_or_else(|| ApplicationError::validation("answer is required"))?,
            category: command
                .category
                .map(CategoryId::new)
                .ok_or_else(|| ApplicationError::validation("category is required"))?,
            difficulty: command
                .difficulty
                .ok_or_else(|| ApplicationError::validation("difficulty is required"))?,
        };

        let id = self.question_repo.insert(&new_question).await?;

        tracing::info!(
            question_id = %id,
            category = %new_question.category,
            "Question created"
        );

        Ok(id)
    }
}

// ============================================================================
// DeleteQuestion
// ============================================================================

/// DeleteQuestion Handler
pub struct DeleteQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl DeleteQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(&self, command: DeleteQuestion) -> Result<QuestionId, ApplicationError> {
        let question_id = command.question_id;

        self.question_repo
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Question", question_id.value()))?;

        // a concurrent delete can still win between the lookup and here
        if !self.question_repo.delete(question_id).await? {
            return Err(ApplicationError::not_found("Question", question_id.value()));
        }

        tracing::info!(question_id = %question_id, "Question deleted");

        Ok(question_id)
    }
}
