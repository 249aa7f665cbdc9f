//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::HeaderMap,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::{AppConfig, DistributionReport};
use crate::services::{AnalysisService, ChartRenderer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analysis: Arc<AnalysisService>,
    pub chart: Arc<ChartRenderer>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));
    create_app_state_with_config(config)
}

/// Create application state from an already loaded configuration.
pub fn create_app_state_with_config(config: Arc<AppConfig>) -> anyhow::Result<AppState> {
    let analysis = Arc::new(AnalysisService::new(config.clone()));
    let chart = Arc::new(
        ChartRenderer::new(config.chart.clone())
            .map_err(|e| anyhow::anyhow!("Failed to create chart renderer: {e}"))?,
    );

    Ok(AppState {
        config,
        analysis,
        chart,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_upload_bytes;

    Router::new()
        .route("/api/analyze", post(handle_analyze))
        .route("/api/chart", post(handle_chart))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DistributionReport>, ApiError> {
    api::handle_analyze(State(state.analysis), headers, body).await
}

async fn handle_chart(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    api::handle_chart(State(state.analysis), State(state.chart), headers, body).await
}
