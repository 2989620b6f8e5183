use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use gitlab_token_exporter::gitlab::client::GitLabClient;
use gitlab_token_exporter::snapshot::store::SnapshotStore;
use gitlab_token_exporter::utils::logging;
use gitlab_token_exporter::{scheduler, server, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read flags / environment
    // -------------------------------

    let settings = Settings::parse();
    logging::run(settings.log_level);

    // -------------------------------
    // 2. Create API client and shared snapshot store
    // -------------------------------

    let client = GitLabClient::new(&settings.gitlab_url, &settings.gitlab_api_token)?;
    let store = Arc::new(SnapshotStore::new());

    // -------------------------------
    // 3. Start refresh loop worker
    // -------------------------------

    let refresh_interval = Duration::from_secs(settings.refresh_interval_seconds);
    let refresher = scheduler::run(client, store.clone(), refresh_interval);

    // -------------------------------
    // 4. Start http metrics server
    // -------------------------------

    let http_server = server::server::start(&settings, store);

    info!("Service starting...");
    tokio::try_join!(refresher, http_server)?;

    Ok(())
}
