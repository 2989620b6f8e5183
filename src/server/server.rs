use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tracing::info;

use crate::config::settings::Settings;
use crate::server::routes;
use crate::snapshot::store::SnapshotStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SnapshotStore>,
}

/// Start the Axum server exposing the metrics endpoint.
pub async fn start(settings: &Settings, store: Arc<SnapshotStore>) -> Result<()> {
    let state = AppState { store };
    let app = routes::router().with_state(state);

    let bind_addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("metrics server listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Router with state already applied, for tests that spawn the server
/// on an ephemeral port.
pub fn app(store: Arc<SnapshotStore>) -> Router {
    routes::router().with_state(AppState { store })
}
