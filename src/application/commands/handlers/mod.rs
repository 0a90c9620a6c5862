//! Command Handlers

mod question_handlers;

pub use question_handlers::*;
