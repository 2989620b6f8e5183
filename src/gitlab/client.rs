use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::gitlab::types::{AccessToken, Group, Project};

static PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";
static REQUEST_TIMEOUT_SECONDS: u64 = 10;
/// GitLab caps list endpoints at 100 items per page.
static PER_PAGE: u32 = 100;

/// Read-only client for the GitLab v4 REST API.
///
/// Every public listing operation absorbs transport errors, non-2xx
/// statuses and malformed bodies into an empty list with a diagnostic,
/// so one failing group or project never aborts a refresh cycle. The
/// next scheduled cycle is the retry mechanism.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    base_url: String,
    token: String,
    client: Client,
}

impl GitLabClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        })
    }

    pub async fn list_groups(&self) -> Vec<Group> {
        let path = format!("/api/v4/groups?per_page={}", PER_PAGE);
        self.get_list(&path, "groups").await
    }

    pub async fn list_projects(&self, group_id: u64) -> Vec<Project> {
        let path = format!("/api/v4/groups/{}/projects?per_page={}", group_id, PER_PAGE);
        self.get_list(&path, "projects").await
    }

    pub async fn list_group_tokens(&self, group_id: u64) -> Vec<AccessToken> {
        let path = format!("/api/v4/groups/{}/access_tokens", group_id);
        self.get_list(&path, "group tokens").await
    }

    pub async fn list_project_tokens(&self, project_id: u64) -> Vec<AccessToken> {
        let path = format!("/api/v4/projects/{}/access_tokens", project_id);
        self.get_list(&path, "project tokens").await
    }

    /// One GET attempt, absorbed into an empty list on any failure.
    async fn get_list<T: DeserializeOwned>(&self, path: &str, what: &str) -> Vec<T> {
        match self.fetch(path).await {
            Ok(items) => items,
            Err(err) => {
                warn!("error fetching {} from {}: {}", what, path, err);
                Vec::new()
            }
        }
    }

    /// Typed fetch: success-with-data or an error for the caller to absorb.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(PRIVATE_TOKEN_HEADER, &self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP request failed: {}", response.status()));
        }
        Ok(response.json::<Vec<T>>().await?)
    }
}
