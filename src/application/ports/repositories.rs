//! Repository Ports
//!
//! Data Store collaborators. Implementations live in the infrastructure layer
//! (SQLite, in-memory).

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId, QuizScope};

/// Repository error
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

// ============================================================================
// Category Repository
// ============================================================================

/// Category Repository Port
#[async_trait]
pub trait CategoryRepositoryPort: Send + Sync {
    /// All categories ordered by id
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    async fn count(&self) -> Result<usize, RepositoryError>;

    /// Setup-time insert, not reachable over HTTP
    async fn insert(&self, kind: &str) -> Result<CategoryId, RepositoryError>;
}

// ============================================================================
// Question Repository
// ============================================================================

/// Question Repository Port
///
/// Every listing comes back in insertion (id) order.
#[async_trait]
pub trait QuestionRepositoryPort: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError>;

    async fn find_by_category(&self, category: CategoryId) -> Result<Vec<Question>, RepositoryError>;

    /// Case-insensitive substring match on the question text
    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError>;

    /// Quiz candidate pool: questions in `scope` whose id is not in `excluded`
    async fn find_candidates(
        &self,
        scope: QuizScope,
        excluded: &[QuestionId],
    ) -> Result<Vec<Question>, RepositoryError>;

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError>;

    async fn insert(&self, question: &NewQuestion) -> Result<QuestionId, RepositoryError>;

    /// Returns whether a question was removed
    async fn delete(&self, id: QuestionId) -> Result<bool, RepositoryError>;
}
