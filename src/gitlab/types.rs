use serde::Deserialize;

/// A GitLab group, as returned by `/api/v4/groups`.
///
/// `full_path` is published as the `owner` label for group tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    pub id: u64,
    pub full_path: String,
}

/// A project inside a group, from `/api/v4/groups/{id}/projects`.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name_with_namespace: String,
}

/// A group or project access token.
///
/// `expires_at` is a bare `YYYY-MM-DD` date; GitLab returns `null` for
/// tokens created without an expiry.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub name: String,
    pub expires_at: Option<String>,
}
