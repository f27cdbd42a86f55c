// Router for the control surface
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    fetch_graph, get_graph, get_range, get_viewport, health_check, report_viewport,
    update_range,
};
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/range", get(get_range).put(update_range))
        .route("/fetch", post(fetch_graph))
        .route("/viewport", get(get_viewport).put(report_viewport))
        .route("/graph", get(get_graph))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
