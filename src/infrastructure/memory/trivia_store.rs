//! In-Memory Trivia Store
//!
//! Volatile Data Store for tests and for running without a database file.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::application::ports::{CategoryRepositoryPort, QuestionRepositoryPort, RepositoryError};
use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId, QuizScope};

/// In-memory categories and questions
///
/// Ids come from monotonic counters, so sorting by id gives insertion order.
pub struct InMemoryTriviaStore {
    categories: DashMap<CategoryId, Category>,
    questions: DashMap<QuestionId, Question>,
    next_category_id: AtomicI64,
    next_question_id: AtomicI64,
}

impl InMemoryTriviaStore {
    pub fn new() -> Self {
        Self {
            categories: DashMap::new(),
            questions: DashMap::new(),
            next_category_id: AtomicI64::new(1),
            next_question_id: AtomicI64::new(1),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Synchronous category insert, handy for seeding fixtures
    pub fn add_category(&self, kind: &str) -> CategoryId {
        let id = CategoryId::new(self.next_category_id.fetch_add(1, Ordering::SeqCst));
        self.categories.insert(
            id,
            Category {
                id,
                kind: kind.to_string(),
            },
        );
        id
    }

    fn collect_questions<F>(&self, predicate: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        let mut questions: Vec<Question> = self
            .questions
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        questions.sort_by_key(|q| q.id);
        questions
    }
}

impl Default for InMemoryTriviaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepositoryPort for InMemoryTriviaStore {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut categories: Vec<Category> =
            self.categories.iter().map(|e| e.value().clone()).collect();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.categories.len())
    }

    async fn insert(&self, kind: &str) -> Result<CategoryId, RepositoryError> {
        Ok(self.add_category(kind))
    }
}

#[async_trait]
impl QuestionRepositoryPort for InMemoryTriviaStore {
    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.collect_questions(|_| true))
    }

    async fn find_by_category(&self, category: CategoryId) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.collect_questions(|q| q.category == category))
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.collect_questions(|q| q.matches(term)))
    }

    async fn find_candidates(
        &self,
        scope: QuizScope,
        excluded: &[QuestionId],
    ) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.collect_questions(|q| scope.includes(q) && !excluded.contains(&q.id)))
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        Ok(self.questions.get(&id).map(|q| q.clone()))
    }

    async fn insert(&self, question: &NewQuestion) -> Result<QuestionId, RepositoryError> {
        let id = QuestionId::new(self.next_question_id.fetch_add(1, Ordering::SeqCst));
        self.questions.insert(id, question.clone().into_question(id));
        tracing::debug!(question_id = %id, "Question stored in memory");
        Ok(id)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, RepositoryError> {
        Ok(self.questions.remove(&id).is_some())
    }
}
