mod handlers;
mod state;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use state::AppState;

pub fn build_router() -> Router {
    build_router_with(AppState::default())
}

pub fn build_router_with(state: AppState) -> Router {
    Router::new()
        .route("/api/cities", get(handlers::cities))
        .route("/api/cities/list", get(handlers::city_summaries))
        .route("/api/communes", get(handlers::communes))
        .route("/api/quartiers", get(handlers::quartiers))
        .route("/api/selection", post(handlers::selection))
        .route("/api/check", get(handlers::check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

pub async fn start(host: &str, port: u16) -> Result<()> {
    let app = build_router();
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind to {}", addr))?;

    info!("ivoire-geo server listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
