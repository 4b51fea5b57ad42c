//! Health check handler

use axum::response::Json;
use voicegate_core::HealthStatus;

/// Liveness endpoint.
///
/// Pure constant response with no inputs, no side effects, and no failure
/// mode; the body is computed fresh on every call.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_returns_ok() {
        let Json(status) = health().await;
        assert_eq!(status, HealthStatus::ok());
    }

    #[tokio::test]
    async fn test_health_accumulates_no_state() {
        for _ in 0..3 {
            let Json(status) = health().await;
            assert_eq!(status.status, "ok");
        }
    }
}
