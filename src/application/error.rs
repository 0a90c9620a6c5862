//! Application errors
//!
//! Shared error type for every command and query handler

use thiserror::Error;

use crate::application::ports::RepositoryError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Resource does not exist
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: i64 },

    /// Input rejected by the handler or by a store constraint
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Store could not serve the request
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ApplicationError {
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => Self::NotFound {
                resource: entity,
                id,
            },
            RepositoryError::ConstraintViolation(msg) => Self::ValidationFailed(msg),
            RepositoryError::Unavailable(msg) => Self::StoreUnavailable(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_errors_keep_their_kind() {
        let err: ApplicationError = RepositoryError::NotFound {
            entity: "Question",
            id: 9,
        }
        .into();
        assert!(matches!(err, ApplicationError::NotFound { id: 9, .. }));

        let err: ApplicationError =
            RepositoryError::ConstraintViolation("NOT NULL".to_string()).into();
        assert!(matches!(err, ApplicationError::ValidationFailed(_)));

        let err: ApplicationError = RepositoryError::Unavailable("closed".to_string()).into();
        assert!(matches!(err, ApplicationError::StoreUnavailable(_)));
    }
}
