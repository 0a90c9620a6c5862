//! System Handlers
//!
//! Health check and the catch-all for unknown routes

use axum::{http::Uri, Json};

use crate::infrastructure::http::dto::{ApiResponse, PingResponse};
use crate::infrastructure::http::error::ApiError;

/// Health check
pub async fn ping() -> Json<ApiResponse<PingResponse>> {
    Json(ApiResponse::success(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

/// Unknown routes answer with the 404 envelope
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
