//! HTTP surface of the search gateway.
//!
//! - `GET /`        — welcome text
//! - `POST /search` — filtered semantic search, JSON array of `{id, document, metadata}`

pub mod core;
pub mod error_handler;
mod routes;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use vector_search::QdrantSearch;

use crate::{
    core::{app_config::AppConfig, app_state::AppState},
    error_handler::AppError,
    routes::{home_route::home, search::search_route::search_route},
};

/// Builds the application router over the given state.
///
/// Cross-origin requests are allowed from any origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/search", post(search_route))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Loads configuration, connects the vector store client and serves until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let search = QdrantSearch::new(&config.search)?;

    info!(
        collection = %config.search.qdrant.collection,
        "vector search backend initialised"
    );

    let address = config.address.clone();
    let app = router(AppState::new(config, Arc::new(search)));

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(AppError::Bind)?;
    info!(%address, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
