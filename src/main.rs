// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::chart_builder::ChartConfigurationBuilder;
use crate::application::data_fetcher::DataFetcher;
use crate::application::graph_view::GraphView;
use crate::application::range_selector::RangeSelector;
use crate::application::temperature_page::TemperaturePage;
use crate::application::viewport_monitor::ViewportMonitor;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::http_source::HttpTemperatureSource;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::router;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let settings = load_settings()?;

    // Data source (infrastructure layer)
    let source = Arc::new(HttpTemperatureSource::new(
        settings.source.endpoint_url.clone(),
    ));

    // View pipeline (application layer)
    let view = GraphView::new(
        DataFetcher::new(source),
        ChartConfigurationBuilder::new(settings.theme.clone()),
        settings.layout.settle_delay(),
    );
    let page = TemperaturePage::new(RangeSelector::today(), view);
    let viewport = ViewportMonitor::new();
    let listeners = page.activate(&viewport);

    let state = Arc::new(AppState { page, viewport });

    // Start server (presentation layer)
    let listener = tokio::net::TcpListener::bind(settings.server.bind.as_str()).await?;
    tracing::info!(
        "Serving temperature graph on {} (source {})",
        listener.local_addr()?,
        settings.source.endpoint_url
    );

    axum::serve(listener, router(state)).await?;
    listeners.dispose();

    Ok(())
}
