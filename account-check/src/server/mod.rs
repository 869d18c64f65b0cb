//! HTTP API exposing the classifier
//!
//! Routes:
//! - `GET /` interactive page
//! - `GET /api/check/:username` single verdict
//! - `POST /api/check-multiple` sequential batch over `{"usernames": [...]}`
//! - `GET /api/status` liveness

pub mod handlers;
pub mod models;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::traits::{DelayPolicy, ProfileLookup};

pub use handlers::{check_multiple, check_single, index, status, AppState};
pub use models::{ApiError, CheckMultipleRequest, CheckMultipleResponse, StatusResponse};

/// Build the API router around shared state
pub fn router<C, D>(state: AppState<C, D>) -> Router
where
    C: ProfileLookup + 'static,
    D: DelayPolicy + Clone + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/api/status", get(status))
        .route("/api/check/:username", get(check_single::<C, D>))
        .route("/api/check-multiple", post(check_multiple::<C, D>))
        .with_state(Arc::new(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// API server bound to the configured address
pub struct ApiServer<C, D> {
    config: ServerConfig,
    state: AppState<C, D>,
}

impl<C, D> ApiServer<C, D>
where
    C: ProfileLookup + 'static,
    D: DelayPolicy + Clone + 'static,
{
    pub fn new(config: ServerConfig, state: AppState<C, D>) -> Self {
        Self { config, state }
    }

    /// Serve until `shutdown` is cancelled
    pub async fn start(self, shutdown: CancellationToken) -> Result<()> {
        let address = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(address.as_str()).await?;
        info!("Account Live Checker API listening on {}", listener.local_addr()?);

        axum::serve(listener, router(self.state))
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        info!("API server stopped");
        Ok(())
    }
}
