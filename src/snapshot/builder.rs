use tracing::{debug, info};

use crate::expiry::{days_left, AlertLevel};
use crate::gitlab::client::GitLabClient;
use crate::gitlab::types::AccessToken;
use crate::snapshot::store::{TokenSample, TokenScope};

/// Walk every visible group, its access tokens, its projects and their
/// access tokens, and accumulate one sample per token with a parseable
/// expiry date.
///
/// Fetch failures have already been absorbed into empty lists by the
/// client, so a failing entity just contributes no samples and the
/// traversal always runs to completion.
pub async fn build_samples(client: &GitLabClient) -> Vec<TokenSample> {
    let mut samples = Vec::new();

    let groups = client.list_groups().await;
    if groups.is_empty() {
        info!("no groups found");
        return samples;
    }

    for group in groups {
        for token in client.list_group_tokens(group.id).await {
            push_sample(&mut samples, &token, &group.full_path, TokenScope::Group);
        }

        for project in client.list_projects(group.id).await {
            for token in client.list_project_tokens(project.id).await {
                push_sample(
                    &mut samples,
                    &token,
                    &project.name_with_namespace,
                    TokenScope::Project,
                );
            }
        }
    }

    samples
}

/// Tokens without a computable day count are excluded from the snapshot.
fn push_sample(samples: &mut Vec<TokenSample>, token: &AccessToken, owner: &str, scope: TokenScope) {
    let days = match token.expires_at.as_deref().and_then(days_left) {
        Some(days) => days,
        None => {
            debug!("skipping token '{}' of {} '{}': no usable expiry", token.name, scope.as_str(), owner);
            return;
        }
    };

    samples.push(TokenSample {
        token_name: token.name.clone(),
        owner: owner.to_string(),
        scope,
        alert_level: AlertLevel::from_days_left(Some(days)),
        days_left: days,
    });
}
