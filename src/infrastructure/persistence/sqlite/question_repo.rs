//! SQLite Question Repository

use async_trait::async_trait;
use sqlx::FromRow;
use std::collections::HashSet;

use super::database::map_sqlx_error;
use super::DbPool;
use crate::application::ports::{QuestionRepositoryPort, RepositoryError};
use crate::domain::{CategoryId, NewQuestion, Question, QuestionId, QuizScope};

const SELECT_QUESTIONS: &str =
    "SELECT id, question, answer, category, difficulty FROM questions";

/// SQLite Question Repository
pub struct SqliteQuestionRepository {
    pool: DbPool,
}

impl SqliteQuestionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i64,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: QuestionId::new(row.id),
            question: row.question,
            answer: row.answer,
            category: CategoryId::new(row.category),
            difficulty: row.difficulty,
        }
    }
}

/// Escape LIKE wildcards so the term is matched literally
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl QuestionRepositoryPort for SqliteQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!("{} ORDER BY id", SELECT_QUESTIONS))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_by_category(&self, category: CategoryId) -> Result<Vec<Question>, RepositoryError> {
        let rows: Vec<QuestionRow> =
            sqlx::query_as(&format!("{} WHERE category = ? ORDER BY id", SELECT_QUESTIONS))
                .bind(category.value())
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError> {
        // LIKE folds ASCII case only
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            "{} WHERE question LIKE ? ESCAPE '\\' ORDER BY id",
            SELECT_QUESTIONS
        ))
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_candidates(
        &self,
        scope: QuizScope,
        excluded: &[QuestionId],
    ) -> Result<Vec<Question>, RepositoryError> {
        let mut candidates = match scope {
            QuizScope::AllCategories => self.find_all().await?,
            QuizScope::Category(category) => self.find_by_category(category).await?,
        };

        // filtered here rather than in SQL: a played list can exceed SQLite's bind limit
        let excluded: HashSet<QuestionId> = excluded.iter().copied().collect();
        candidates.retain(|q| !excluded.contains(&q.id));

        Ok(candidates)
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        let row: Option<QuestionRow> =
            sqlx::query_as(&format!("{} WHERE id = ?", SELECT_QUESTIONS))
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(Question::from))
    }

    async fn insert(&self, question: &NewQuestion) -> Result<QuestionId, RepositoryError> {
        let id = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category.value())
        .bind(question.difficulty)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .last_insert_rowid();

        Ok(QuestionId::new(id))
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
