//! Trivia API - HTTP backend for a trivia game
//!
//! Layered as DDD + CQRS + Hexagonal Architecture:
//!
//! Domain (domain/):
//! - trivia: Category and Question entities, id value objects
//! - pagination: fixed 10-per-page window
//! - quiz: quiz scope and random question pick
//!
//! Application (application/):
//! - Ports: CategoryRepositoryPort, QuestionRepositoryPort
//! - Commands: create / delete question
//! - Queries: listings, search, next quiz question
//!
//! Infrastructure (infrastructure/):
//! - HTTP: axum JSON API with CORS
//! - Memory: DashMap-backed Data Store
//! - Persistence: SQLite Data Store, category seeding

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
