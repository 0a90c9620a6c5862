//! Application State
//!
//! Holds every command and query handler, built once from the two repository ports.

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateQuestionHandler, DeleteQuestionHandler,
    // Query handlers
    ListCategoriesHandler, ListCategoryQuestionsHandler, ListQuestionsHandler,
    NextQuizQuestionHandler, SearchQuestionsHandler,
    // Ports
    CategoryRepositoryPort, QuestionRepositoryPort,
};
use crate::infrastructure::persistence::Repositories;

pub struct AppState {
    // ========== Command Handlers ==========
    pub create_question_handler: CreateQuestionHandler,
    pub delete_question_handler: DeleteQuestionHandler,

    // ========== Query Handlers ==========
    pub list_categories_handler: ListCategoriesHandler,
    pub list_category_questions_handler: ListCategoryQuestionsHandler,
    pub list_questions_handler: ListQuestionsHandler,
    pub search_questions_handler: SearchQuestionsHandler,
    pub next_quiz_question_handler: NextQuizQuestionHandler,
}

impl AppState {
    pub fn new(
        category_repo: Arc<dyn CategoryRepositoryPort>,
        question_repo: Arc<dyn QuestionRepositoryPort>,
    ) -> Self {
        Self {
            create_question_handler: CreateQuestionHandler::new(question_repo.clone()),
            delete_question_handler: DeleteQuestionHandler::new(question_repo.clone()),

            list_categories_handler: ListCategoriesHandler::new(category_repo.clone()),
            list_category_questions_handler: ListCategoryQuestionsHandler::new(
                category_repo.clone(),
                question_repo.clone(),
            ),
            list_questions_handler: ListQuestionsHandler::new(
                category_repo.clone(),
                question_repo.clone(),
            ),
            search_questions_handler: SearchQuestionsHandler::new(question_repo.clone()),
            next_quiz_question_handler: NextQuizQuestionHandler::new(question_repo),
        }
    }

    pub fn from_repositories(repos: &Repositories) -> Self {
        Self::new(repos.categories.clone(), repos.questions.clone())
    }
}
