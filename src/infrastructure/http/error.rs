//! HTTP Error Handling
//!
//! Every failure leaves the API as `{"success": false, "error": <status>, "message": <text>}`
//! with the matching HTTP status.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;
use crate::domain::PageError;

/// Error envelope body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}

/// Envelope messages, one per status the API emits
pub mod message {
    pub const BAD_REQUEST: &str = "Bad Request";
    pub const NOT_FOUND: &str = "Resource not found";
    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
    pub const UNPROCESSABLE: &str = "Not processable";
    pub const INTERNAL_ERROR: &str = "Internal Server Error";
}

/// API error
///
/// The detail string is logged, never sent to the client.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed(String),
    Unprocessable(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = match &self {
            ApiError::BadRequest(detail) => {
                tracing::warn!(status = status.as_u16(), error = %detail, "Bad request");
                ErrorResponse::new(status, message::BAD_REQUEST)
            }
            ApiError::NotFound(detail) => {
                tracing::warn!(status = status.as_u16(), error = %detail, "Resource not found");
                ErrorResponse::new(status, message::NOT_FOUND)
            }
            ApiError::MethodNotAllowed(detail) => {
                tracing::warn!(status = status.as_u16(), error = %detail, "Method not allowed");
                ErrorResponse::new(status, message::METHOD_NOT_ALLOWED)
            }
            ApiError::Unprocessable(detail) => {
                tracing::warn!(status = status.as_u16(), error = %detail, "Request not processable");
                ErrorResponse::new(status, message::UNPROCESSABLE)
            }
            ApiError::Internal(detail) => {
                tracing::error!(status = status.as_u16(), error = %detail, "Internal server error");
                ErrorResponse::new(status, message::INTERNAL_ERROR)
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            // the web client expects a missing question on delete to come back as 422
            ApplicationError::NotFound { .. } => ApiError::Unprocessable(e.to_string()),
            ApplicationError::ValidationFailed(msg) => ApiError::Unprocessable(msg),
            ApplicationError::StoreUnavailable(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<PageError> for ApiError {
    fn from(e: PageError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Unprocessable(e.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

// a path segment that is not an id cannot name any resource
impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        ApiError::NotFound(e.body_text())
    }
}
