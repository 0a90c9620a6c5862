//! Category Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CategoryRepositoryPort, QuestionRepositoryPort};
use crate::application::queries::{ListCategories, ListCategoryQuestions};
use crate::domain::{paginate, Category, CategoryId, Question};

// ============================================================================
// Response DTOs
// ============================================================================

/// Page of questions restricted to one category
#[derive(Debug, Clone)]
pub struct CategoryQuestionsPage {
    pub categories: Vec<Category>,
    pub current_category: CategoryId,
    pub questions: Vec<Question>,
    /// Size of the filtered set before pagination
    pub total_questions: usize,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListCategories Handler
pub struct ListCategoriesHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListCategoriesHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(&self, _query: ListCategories) -> Result<Vec<Category>, ApplicationError> {
        Ok(self.category_repo.find_all().await?)
    }
}

/// ListCategoryQuestions Handler
pub struct ListCategoryQuestionsHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl ListCategoryQuestionsHandler {
    pub fn new(
        category_repo: Arc<dyn CategoryRepositoryPort>,
        question_repo: Arc<dyn QuestionRepositoryPort>,
    ) -> Self {
        Self {
            category_repo,
            question_repo,
        }
    }

    pub async fn handle(
        &self,
        query: ListCategoryQuestions,
    ) -> Result<CategoryQuestionsPage, ApplicationError> {
        let questions = self
            .question_repo
            .find_by_category(query.category_id)
            .await?;
        // the sidebar always shows every category
        let categories = self.category_repo.find_all().await?;
        let page = paginate(questions, query.page);

        tracing::debug!(
            category_id = %query.category_id,
            page = query.page.number(),
            total = page.total,
            "Listed category questions"
        );

        Ok(CategoryQuestionsPage {
            categories,
            current_category: query.category_id,
            questions: page.items,
            total_questions: page.total,
        })
    }
}
