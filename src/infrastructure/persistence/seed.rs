//! Reference data for a fresh store

use crate::application::ports::{CategoryRepositoryPort, RepositoryError};

/// Categories the trivia client ships with, in id order
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Insert `DEFAULT_CATEGORIES` when the store has no categories yet.
///
/// Returns how many categories were inserted.
pub async fn seed_default_categories(
    repo: &dyn CategoryRepositoryPort,
) -> Result<usize, RepositoryError> {
    if repo.count().await? > 0 {
        tracing::debug!("Categories already present, skipping seed");
        return Ok(0);
    }

    for kind in DEFAULT_CATEGORIES {
        repo.insert(kind).await?;
    }

    tracing::info!(count = DEFAULT_CATEGORIES.len(), "Seeded default categories");
    Ok(DEFAULT_CATEGORIES.len())
}
