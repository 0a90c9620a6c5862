//! HTTP Layer - JSON REST API
//!
//! Success bodies carry `success: true`, failures use the envelope from `error`.

mod deserializers;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{build_router, HttpServer};
pub use state::AppState;
