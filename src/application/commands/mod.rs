//! Application Layer - Commands (write side)

mod question_commands;

pub mod handlers;

pub use question_commands::*;
