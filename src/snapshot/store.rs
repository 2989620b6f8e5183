use anyhow::Result;
use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};
use tokio::sync::Mutex;

use crate::expiry::AlertLevel;

pub static TOKEN_EXPIRY_METRIC: &str = "gitlab_token_days_left";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScope {
    Group,
    Project,
}

impl TokenScope {
    pub fn as_str(&self) -> &'static str {
        match *self {
            TokenScope::Group => "group",
            TokenScope::Project => "project",
        }
    }
}

/// One published observation: a token's remaining lifetime in days.
///
/// All four label values together form the sample key; re-observing
/// the same key within a cycle overwrites the prior value.
#[derive(Debug, Clone)]
pub struct TokenSample {
    pub token_name: String,
    pub owner: String,
    pub scope: TokenScope,
    pub alert_level: AlertLevel,
    pub days_left: i64,
}

/// The complete set of samples produced by one refresh cycle, folded
/// into its own registry so a later cycle replaces it wholesale and
/// stale label combinations cannot survive.
pub struct Snapshot {
    registry: Registry,
    pub sample_count: usize,
}

impl Snapshot {
    pub fn build(samples: &[TokenSample]) -> Result<Self> {
        let registry = Registry::new();
        let gauge = GaugeVec::new(
            Opts::new(TOKEN_EXPIRY_METRIC, "Days left before GitLab token expires"),
            &["token_name", "owner", "scope", "alert_level"],
        )?;
        registry.register(Box::new(gauge.clone()))?;

        for sample in samples {
            gauge
                .with_label_values(&[
                    sample.token_name.as_str(),
                    sample.owner.as_str(),
                    sample.scope.as_str(),
                    sample.alert_level.as_str(),
                ])
                .set(sample.days_left as f64);
        }

        Ok(Self {
            registry,
            sample_count: samples.len(),
        })
    }

    /// Serialize into the Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Shared holder for the latest published snapshot.
///
/// `None` means warming: the first refresh cycle has not completed yet.
/// The single mutex serializes publish against read-and-serialize, so a
/// scrape sees either the previous complete snapshot or the new one,
/// never a mix of two cycles.
pub struct SnapshotStore {
    inner: Mutex<Option<Snapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    /// Replace the published snapshot in its entirety.
    pub async fn publish(&self, samples: &[TokenSample]) -> Result<usize> {
        let snapshot = Snapshot::build(samples)?;
        let count = snapshot.sample_count;
        *self.inner.lock().await = Some(snapshot);
        Ok(count)
    }

    pub async fn is_ready(&self) -> bool {
        self.inner.lock().await.is_some()
    }

    /// Encode the current snapshot; `None` while still warming.
    pub async fn render(&self) -> Result<Option<String>> {
        match self.inner.lock().await.as_ref() {
            Some(snapshot) => Ok(Some(snapshot.render()?)),
            None => Ok(None),
        }
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
