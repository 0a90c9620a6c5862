//! Memory Layer - in-memory Data Store

mod trivia_store;

pub use trivia_store::InMemoryTriviaStore;
