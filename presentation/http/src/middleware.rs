//! Middleware for the HTTP gateway

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Duration;
use tracing::warn;

/// Bound request handling time.
///
/// Requests that outlive the configured timeout are cut off with 408; the
/// limit comes from gateway configuration, not per-route logic.
pub async fn request_timeout(
    request: Request,
    next: Next,
    timeout: Duration,
) -> Result<Response, StatusCode> {
    match tokio::time::timeout(timeout, next.run(request)).await {
        Ok(response) => Ok(response),
        Err(_) => {
            warn!("Request timed out after {:?}", timeout);
            Err(StatusCode::REQUEST_TIMEOUT)
        }
    }
}
