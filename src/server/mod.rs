pub mod handlers;
pub mod types;

use crate::{
    cache::ResultCache,
    config::Config,
    generator::ContinuationEngine,
    models::{ModelContext, ModelLoader, ModelRegistry},
    Result,
};
use axum::{
    routing::{get, post},
    Router,
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the application router. Shared with the integration tests so they
/// exercise the same routes the binary serves.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/models", get(handlers::list_models))
        .route("/generate", post(handlers::generate))
        .route("/results/:job_id", get(handlers::get_result))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Environment variable overrides config, as with logging
    let checkpoint_dir =
        std::env::var("CHECKPOINT_DIR").unwrap_or_else(|_| config.models.checkpoint_dir.clone());

    let loader = ModelLoader::new(ModelRegistry::default(), ModelContext::new(checkpoint_dir));

    let state = AppState {
        loader: Arc::new(loader),
        generator: Arc::new(ContinuationEngine::new()),
        cache: Arc::new(ResultCache::new()),
    };

    let app = app(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
