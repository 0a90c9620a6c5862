//! SQLite Persistence

mod category_repo;
mod database;
mod question_repo;

pub use category_repo::*;
pub use database::*;
pub use question_repo::*;
