// HTTP request handlers
use crate::application::graph_view::RenderedGraph;
use crate::domain::device::ViewportMeasurement;
use crate::domain::temperature::TimeRange;
use crate::presentation::app_state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct RangeUpdate {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Currently selected range
pub async fn get_range(State(state): State<Arc<AppState>>) -> Json<TimeRange> {
    Json(state.page.range())
}

/// Replace whichever bounds the body carries
pub async fn update_range(
    State(state): State<Arc<AppState>>,
    Json(update): Json<RangeUpdate>,
) -> Json<TimeRange> {
    if let Some(start) = update.start {
        state.page.set_start(start);
    }
    if let Some(end) = update.end {
        state.page.set_end(end);
    }
    Json(state.page.range())
}

/// The "fetch" button: runs in the background so `/graph` can show the spinner
pub async fn fetch_graph(State(state): State<Arc<AppState>>) -> StatusCode {
    let page = state.page.clone();
    tokio::spawn(async move {
        page.fetch_graph().await;
    });
    StatusCode::ACCEPTED
}

/// Resize or orientation change reported by the client
pub async fn report_viewport(
    State(state): State<Arc<AppState>>,
    Json(measurement): Json<ViewportMeasurement>,
) -> StatusCode {
    state.viewport.report(measurement);
    StatusCode::NO_CONTENT
}

/// Last measurement the layout was derived from, if any
pub async fn get_viewport(
    State(state): State<Arc<AppState>>,
) -> Json<Option<ViewportMeasurement>> {
    Json(state.viewport.current())
}

/// Current render: loading flag plus chart configuration, if any
pub async fn get_graph(State(state): State<Arc<AppState>>) -> Json<RenderedGraph> {
    Json(state.page.view().render())
}
