// tests/common/mod.rs
pub use axum::Router;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;

use chrono::{Days, Utc};
use reqwest::Client;

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

/// `YYYY-MM-DD` date `n` days from now, for building token fixtures
/// whose alert tier is stable regardless of when the test runs.
pub fn date_in_days(n: u64) -> String {
    Utc::now()
        .checked_add_days(Days::new(n))
        .expect("date overflow")
        .format("%Y-%m-%d")
        .to_string()
}
