//! Background refresh loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{error, info};

use crate::gitlab::client::GitLabClient;
use crate::snapshot::builder;
use crate::snapshot::store::SnapshotStore;

/// Run the refresh cycle forever: rebuild the full sample set, publish
/// it atomically, sleep out the interval, repeat.
///
/// The first tick fires immediately, so warm-up lasts exactly one
/// traversal. A failure to publish is logged and the loop keeps
/// running; the previous snapshot stays served until a cycle succeeds.
pub async fn run(
    client: GitLabClient,
    store: Arc<SnapshotStore>,
    refresh_interval: Duration,
) -> Result<()> {
    let mut ticker = tokio::time::interval(refresh_interval);

    loop {
        ticker.tick().await;
        info!("refresh cycle start");

        let samples = builder::build_samples(&client).await;
        match store.publish(&samples).await {
            Ok(count) => info!("published snapshot with {} samples", count),
            Err(err) => error!("failed to publish snapshot: {}", err),
        }
    }
}
