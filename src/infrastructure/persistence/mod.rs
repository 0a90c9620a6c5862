//! Persistence Layer
//!
//! SQLite and in-memory Data Store wiring

mod seed;
mod store;
pub mod sqlite;

pub use seed::{seed_default_categories, DEFAULT_CATEGORIES};
pub use store::Repositories;
