// Route table for the configurator API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_dashboards, get_models, get_options, get_solutions, health_check, post_quote,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    let configurator = Router::new()
        .route("/options", get(get_options))
        .route("/models", get(get_models))
        .route("/dashboards", get(get_dashboards))
        .route("/solutions", get(get_solutions))
        .route("/quote", post(post_quote));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/configurator", configurator)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
