// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::application::catalog_source::CatalogSource;
use crate::application::configurator_service::ConfiguratorService;
use crate::infrastructure::airtable_source::AirtableSource;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::demo_catalog::DemoCatalog;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config().context("Failed to load configuration")?;

    // Create catalog sources (infrastructure layer)
    let source: Arc<dyn CatalogSource> = Arc::new(
        AirtableSource::new(&config.airtable).context("Airtable source is not configured")?,
    );
    let fallback: Option<Arc<dyn CatalogSource>> = if config.enable_fallback_data {
        tracing::info!("Fallback demo catalog enabled");
        Some(Arc::new(DemoCatalog::new()))
    } else {
        None
    };

    // Create services (application layer)
    let configurator_service = ConfiguratorService::new(source, fallback);
    let state = Arc::new(AppState { configurator_service });

    // Build router (presentation layer)
    let origin: HeaderValue = config
        .server
        .frontend_origin
        .parse()
        .context("Invalid frontend origin")?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);
    let router = build_router(state).layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.address, config.server.port)
        .parse()
        .context("Invalid listen address")?;
    tracing::info!("Starting dashkit-configurator on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
