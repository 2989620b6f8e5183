use axum::routing::get;
use axum::{extract::State, response::IntoResponse, Router};
use http::{header::CONTENT_TYPE, StatusCode};
use tracing::error;

use crate::server::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(get_metrics))
}

/// `503` until the first refresh cycle has published, then the latest
/// complete snapshot in text exposition format.
async fn get_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.render().await {
        Ok(Some(body)) => (
            StatusCode::OK,
            [(CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Ok(None) => (StatusCode::SERVICE_UNAVAILABLE, "Metrics not ready yet").into_response(),
        Err(err) => {
            error!("failed to encode metrics: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode metrics").into_response()
        }
    }
}
