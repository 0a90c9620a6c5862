//! Data Store selection
//!
//! Opens the backend named in the configuration and hands out the ports.

use std::sync::Arc;

use crate::application::ports::{CategoryRepositoryPort, QuestionRepositoryPort};
use crate::config::{DatabaseConfig, StoreBackend};
use crate::infrastructure::memory::InMemoryTriviaStore;

use super::seed::seed_default_categories;
use super::sqlite::{
    create_pool, run_migrations, DatabaseConfig as SqliteConfig, SqliteCategoryRepository,
    SqliteQuestionRepository,
};

/// Both repositories of one Data Store
#[derive(Clone)]
pub struct Repositories {
    pub categories: Arc<dyn CategoryRepositoryPort>,
    pub questions: Arc<dyn QuestionRepositoryPort>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        let store = InMemoryTriviaStore::new().arc();
        Self {
            categories: store.clone(),
            questions: store,
        }
    }

    /// Open the configured backend, migrate it and seed categories if asked to.
    pub async fn open(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let repos = match config.backend {
            StoreBackend::Memory => {
                tracing::info!("Using in-memory store");
                Self::in_memory()
            }
            StoreBackend::Sqlite => {
                if let Some(parent) = std::path::Path::new(&config.path).parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }
                let pool = create_pool(&SqliteConfig {
                    database_url: config.database_url(),
                    max_connections: config.max_connections,
                })
                .await?;
                run_migrations(&pool).await?;
                Self {
                    categories: Arc::new(SqliteCategoryRepository::new(pool.clone())),
                    questions: Arc::new(SqliteQuestionRepository::new(pool)),
                }
            }
        };

        if config.seed_categories {
            seed_default_categories(repos.categories.as_ref()).await?;
        }

        Ok(repos)
    }
}
