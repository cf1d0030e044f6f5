//! API Server - HTTP server for the classification API

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::error::Result;
use crate::filter::SpamFilter;

/// API server wrapping the spam filter.
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    pub fn new(filter: SpamFilter, addr: String) -> Self {
        Self {
            state: Arc::new(AppState { filter }),
            addr,
        }
    }

    /// Build the router with all routes.
    pub fn router(&self) -> Router {
        // Permissive CORS: the browser-extension client calls from
        // extension origins.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/health", get(handlers::health))
            .route("/predict", post(handlers::predict))
            .layer(cors)
            .with_state(Arc::clone(&self.state))
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("API server listening on {}", self.addr);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
