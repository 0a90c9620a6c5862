//! Domain Layer
//!
//! Trivia entities plus the pure parts of request handling:
//! pagination windows and quiz selection.

pub mod pagination;
pub mod quiz;
pub mod trivia;

pub use pagination::{paginate, PageError, PageRequest, Paginated, QUESTIONS_PER_PAGE};
pub use quiz::{pick_question, QuizScope};
pub use trivia::{Category, CategoryId, NewQuestion, Question, QuestionId};
