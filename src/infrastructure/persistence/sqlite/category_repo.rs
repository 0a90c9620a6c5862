//! SQLite Category Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::database::map_sqlx_error;
use super::DbPool;
use crate::application::ports::{CategoryRepositoryPort, RepositoryError};
use crate::domain::{Category, CategoryId};

/// SQLite Category Repository
pub struct SqliteCategoryRepository {
    pool: DbPool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CategoryRow {
    id: i64,
    kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: CategoryId::new(row.id),
            kind: row.kind,
        }
    }
}

#[async_trait]
impl CategoryRepositoryPort for SqliteCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT id, type AS kind FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count as usize)
    }

    async fn insert(&self, kind: &str) -> Result<CategoryId, RepositoryError> {
        let id = sqlx::query("INSERT INTO categories (type) VALUES (?)")
            .bind(kind)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .last_insert_rowid();

        Ok(CategoryId::new(id))
    }
}
