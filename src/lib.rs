//! # GitLab Token Exporter Library
//!
//! Provides functionality for walking a GitLab instance's groups and
//! projects, computing the remaining lifetime of each access token,
//! and exposing the result as a Prometheus scrape endpoint.
//!
//! Modules:
//! - `config` — service settings read from flags / environment
//! - `gitlab` — GitLab REST API client and response types
//! - `expiry` — days-left calculation and alert level tiers
//! - `snapshot` — per-cycle sample builder and the published snapshot store
//! - `scheduler` — background refresh loop
//! - `server` — axum metrics server

pub mod config;
pub mod gitlab;
pub mod expiry;
pub mod snapshot;
pub mod scheduler;
pub mod server;
pub mod utils;
pub mod tests;

pub use crate::config::settings::Settings;
pub use crate::gitlab::client::GitLabClient;
pub use crate::snapshot::store::SnapshotStore;
