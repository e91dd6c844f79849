// File: monitor/src/web/server.rs
use crate::web::{handlers, AppState};
use anyhow::Result;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub async fn start_web_server(state: AppState) -> Result<()> {
    let app = create_router(state.clone());
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Health server running on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/height", get(handlers::get_height_status))
        .route("/status", get(handlers::get_status_report))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
