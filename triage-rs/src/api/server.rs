//! API Server - HTTP server for the triage interface

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{handlers, web};
use crate::api::handlers::AppState;
use crate::config::Config;
use crate::rules::RuleSet;

/// HTTP server wrapping the classification core.
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new server over an already-validated rule set.
    pub fn new(rules: RuleSet, config: Config, addr: String) -> Self {
        let state = Arc::new(AppState { rules, config });
        Self { state, addr }
    }

    /// Build the router with all routes.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(web::index))
            .route("/health", get(handlers::health))
            .route("/classify", post(handlers::classify))
            .route("/process", post(handlers::process))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the server.
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting triage server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
