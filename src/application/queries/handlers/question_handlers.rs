//! Question Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CategoryRepositoryPort, QuestionRepositoryPort};
use crate::application::queries::{ListQuestions, SearchQuestions};
use crate::domain::{paginate, Category, Question};

// ============================================================================
// Response DTOs
// ============================================================================

/// Page of all questions
#[derive(Debug, Clone)]
pub struct QuestionsPage {
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
    /// Number of stored questions before pagination
    pub total_questions: usize,
}

/// Search result, never paginated
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListQuestions Handler
pub struct ListQuestionsHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl ListQuestionsHandler {
    pub fn new(
        category_repo: Arc<dyn CategoryRepositoryPort>,
        question_repo: Arc<dyn QuestionRepositoryPort>,
    ) -> Self {
        Self {
            category_repo,
            question_repo,
        }
    }

    pub async fn handle(&self, query: ListQuestions) -> Result<QuestionsPage, ApplicationError> {
        let questions = self.question_repo.find_all().await?;
        let categories = self.category_repo.find_all().await?;
        let page = paginate(questions, query.page);

        tracing::debug!(
            page = query.page.number(),
            returned = page.items.len(),
            total = page.total,
            "Listed questions"
        );

        Ok(QuestionsPage {
            categories,
            questions: page.items,
            total_questions: page.total,
        })
    }
}

/// SearchQuestions Handler
pub struct SearchQuestionsHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl SearchQuestionsHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(&self, query: SearchQuestions) -> Result<SearchResult, ApplicationError> {
        let term = query.term.unwrap_or_default();
        let questions = self.question_repo.search(&term).await?;

        tracing::debug!(term = %term, matches = questions.len(), "Searched questions");

        Ok(SearchResult {
            total_questions: questions.len(),
            questions,
        })
    }
}
