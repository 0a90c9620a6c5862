//! Application Layer - use case orchestration
//!
//! - ports: Data Store interfaces
//! - commands: write operations and their handlers
//! - queries: read operations and their handlers
//! - error: application error type

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{CreateQuestionHandler, DeleteQuestionHandler},
    CreateQuestion, DeleteQuestion,
};

pub use error::ApplicationError;

pub use ports::{CategoryRepositoryPort, QuestionRepositoryPort, RepositoryError};

pub use queries::{
    handlers::{
        CategoryQuestionsPage, ListCategoriesHandler, ListCategoryQuestionsHandler,
        ListQuestionsHandler, NextQuizQuestionHandler, QuestionsPage, SearchQuestionsHandler,
        SearchResult,
    },
    ListCategories, ListCategoryQuestions, ListQuestions, NextQuizQuestion, SearchQuestions,
};
