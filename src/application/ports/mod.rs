//! Application Ports
//!
//! Abstractions the application layer needs from infrastructure

mod repositories;

pub use repositories::{CategoryRepositoryPort, QuestionRepositoryPort, RepositoryError};
