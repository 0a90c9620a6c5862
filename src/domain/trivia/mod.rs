//! Trivia Context
//!
//! Categories and the questions filed under them.

mod entities;
mod value_objects;

pub use entities::{Category, NewQuestion, Question};
pub use value_objects::{CategoryId, QuestionId};
