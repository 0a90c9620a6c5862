//! Application Layer - Queries (read side)

mod category_queries;
mod question_queries;
mod quiz_queries;

pub mod handlers;

pub use category_queries::*;
pub use question_queries::*;
pub use quiz_queries::*;
