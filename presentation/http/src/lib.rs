//! HTTP presentation adapter for Voicegate
//!
//! Exposes the gateway's route groups over HTTP. The routing table is
//! assembled once during startup through [`RouteTable`] and handed to the
//! serving loop; it is immutable for the lifetime of the process.

use async_trait::async_trait;
use axum::extract::Request;
use axum::middleware::{from_fn, Next};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use voicegate_core::errors::CoreResult;
use voicegate_core::{PresentationAdapter, PresentationError, SpeechToText};

mod error;
mod handlers;
mod middleware;
mod models;
mod routes;

pub use error::ApiError;
pub use models::*;
pub use routes::RouteTable;

/// HTTP gateway server configuration
#[derive(Debug, Clone)]
pub struct HttpGatewayConfig {
    /// Server bind address
    pub bind_address: SocketAddr,
    /// Enable CORS
    pub enable_cors: bool,
    /// Mount the optional authentication route group
    pub enable_auth_routes: bool,
    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl Default for HttpGatewayConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".parse().unwrap(),
            enable_cors: true,
            enable_auth_routes: false,
            request_timeout: 30,
        }
    }
}

/// HTTP presentation adapter serving the voice assistant API
pub struct HttpGateway {
    config: HttpGatewayConfig,
}

impl HttpGateway {
    /// Create a new HTTP gateway
    pub fn new(config: HttpGatewayConfig) -> Self {
        Self { config }
    }

    /// Build the axum router with all route groups mounted.
    ///
    /// Fails with a configuration error when two groups claim the same
    /// prefix, so composition mistakes surface at startup rather than at
    /// request time.
    pub fn build_router(&self, engine: Arc<dyn SpeechToText>) -> CoreResult<Router> {
        let state = AppState {
            engine,
            config: self.config.clone(),
        };

        let mut table = RouteTable::new();
        table.register("/stt", handlers::stt::router())?;
        table.register("/llm", handlers::llm::router())?;
        table.register("/execute", handlers::execute::router())?;
        table.register("/tts", handlers::tts::router())?;
        if self.config.enable_auth_routes {
            table.register("/auth", handlers::auth::router())?;
        }

        let timeout = Duration::from_secs(self.config.request_timeout);
        let mut router = table
            .into_router()
            .route("/health", get(handlers::health::health))
            .layer(from_fn(move |request: Request, next: Next| {
                middleware::request_timeout(request, next, timeout)
            }))
            .with_state(state);

        if self.config.enable_cors {
            router = router.layer(CorsLayer::permissive());
        }

        Ok(router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http())))
    }
}

#[async_trait]
impl PresentationAdapter for HttpGateway {
    async fn start(&self, engine: Arc<dyn SpeechToText>) -> Result<(), PresentationError> {
        info!(
            "Starting HTTP gateway on {} with engine '{}'",
            self.config.bind_address,
            engine.name()
        );

        let router = self
            .build_router(engine)
            .map_err(|e| PresentationError::StartupFailed(e.to_string()))?;

        let listener = tokio::net::TcpListener::bind(&self.config.bind_address)
            .await
            .map_err(|e| {
                PresentationError::StartupFailed(format!(
                    "Failed to bind to {}: {}",
                    self.config.bind_address, e
                ))
            })?;

        info!("HTTP gateway listening on {}", self.config.bind_address);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| PresentationError::StartupFailed(format!("Server error: {}", e)))?;

        Ok(())
    }

    async fn stop(&self) -> Result<(), PresentationError> {
        info!("Stopping HTTP gateway");
        Ok(())
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn SpeechToText>,
    pub config: HttpGatewayConfig,
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voicegate_core::PlaceholderTranscriber;

    #[test]
    fn test_config_default() {
        let config = HttpGatewayConfig::default();
        assert_eq!(config.bind_address.port(), 8000);
        assert!(config.enable_cors);
        assert!(!config.enable_auth_routes);
        assert_eq!(config.request_timeout, 30);
    }

    #[test]
    fn test_build_router_succeeds_with_defaults() {
        let gateway = HttpGateway::new(HttpGatewayConfig::default());
        let engine: Arc<dyn SpeechToText> = Arc::new(PlaceholderTranscriber::new());
        assert!(gateway.build_router(engine).is_ok());
    }

    #[test]
    fn test_build_router_succeeds_with_auth_routes() {
        let config = HttpGatewayConfig {
            enable_auth_routes: true,
            ..Default::default()
        };
        let gateway = HttpGateway::new(config);
        let engine: Arc<dyn SpeechToText> = Arc::new(PlaceholderTranscriber::new());
        assert!(gateway.build_router(engine).is_ok());
    }
}
