//! Infrastructure Layer
//!
//! Concrete Data Store backends and the HTTP surface

pub mod http;
pub mod memory;
pub mod persistence;

pub use memory::InMemoryTriviaStore;
pub use persistence::Repositories;
