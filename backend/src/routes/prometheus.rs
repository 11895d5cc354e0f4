//! Prometheus metrics endpoint

use crate::state::AppState;
use axum::extract::State;

/// GET /metrics - Render metrics in Prometheus text format
pub async fn render_metrics(State(state): State<AppState>) -> String {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}
