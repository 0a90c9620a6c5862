//! HTTP Middleware
//!
//! - per-request access log with status and latency
//! - envelope for axum's bare 405 responses

use std::time::Instant;

use axum::{
    extract::Request,
    http::{header::ALLOW, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::error::ApiError;

/// Logs every request once the response is ready.
///
/// 5xx is logged at error level, 4xx at warn, everything else at debug. The
/// failure detail itself is logged by `ApiError::into_response`.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms,
            "HTTP client error"
        );
    } else {
        tracing::debug!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            latency_ms,
            "HTTP request"
        );
    }

    response
}

/// Rewrites the empty 405 axum emits for a known path into the error envelope.
///
/// The `Allow` header is carried over.
pub async fn method_not_allowed_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(ALLOW).cloned();
    let mut enveloped =
        ApiError::MethodNotAllowed(format!("{} not supported on {}", method, path)).into_response();
    if let Some(allow) = allow {
        enveloped.headers_mut().insert(ALLOW, allow);
    }
    enveloped
}
