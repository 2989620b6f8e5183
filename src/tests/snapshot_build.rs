// Traversal tests against a mocked GitLab API:
//  - zero groups is a valid, empty cycle
//  - group and project tokens end up with the right owner/scope labels
//  - one failing fetch never costs the other entities their samples

use httpmock::prelude::*;
use serde_json::json;

use crate::expiry::AlertLevel;
use crate::gitlab::client::GitLabClient;
use crate::snapshot::builder::build_samples;
use crate::snapshot::store::{SnapshotStore, TokenScope, TOKEN_EXPIRY_METRIC};
use crate::tests::common::date_in_days;

fn client_for(server: &MockServer) -> GitLabClient {
    GitLabClient::new(&server.base_url(), "secret").expect("client")
}

#[tokio::test]
async fn zero_groups_yields_empty_but_ready_snapshot() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v4/groups")
                .query_param("per_page", "100")
                .header("PRIVATE-TOKEN", "secret");
            then.status(200).json_body(json!([]));
        })
        .await;

    let samples = build_samples(&client_for(&server)).await;
    assert!(samples.is_empty());

    let store = SnapshotStore::new();
    assert!(!store.is_ready().await);
    store.publish(&samples).await.expect("publish");
    assert!(store.is_ready().await);

    let body = store.render().await.expect("render").expect("ready");
    let sample_lines = body
        .lines()
        .filter(|l| l.starts_with(&format!("{}{{", TOKEN_EXPIRY_METRIC)))
        .count();
    assert_eq!(sample_lines, 0);
}

#[tokio::test]
async fn traversal_labels_group_and_project_tokens() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v4/groups");
            then.status(200)
                .json_body(json!([{"id": 1, "full_path": "acme", "name": "Acme"}]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v4/groups/1/access_tokens");
            then.status(200).json_body(json!([
                {"id": 11, "name": "ci-token", "expires_at": date_in_days(100), "active": true},
                {"id": 12, "name": "legacy", "expires_at": null, "active": true}
            ]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v4/groups/1/projects")
                .query_param("per_page", "100");
            then.status(200)
                .json_body(json!([{"id": 10, "name_with_namespace": "Acme / api"}]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v4/projects/10/access_tokens");
            then.status(200).json_body(json!([
                {"id": 13, "name": "deploy", "expires_at": date_in_days(10)}
            ]));
        })
        .await;

    let samples = build_samples(&client_for(&server)).await;
    assert_eq!(samples.len(), 2, "token without expiry must be excluded");

    let group_sample = &samples[0];
    assert_eq!(group_sample.token_name, "ci-token");
    assert_eq!(group_sample.owner, "acme");
    assert_eq!(group_sample.scope, TokenScope::Group);
    assert_eq!(group_sample.alert_level, AlertLevel::Info);

    let project_sample = &samples[1];
    assert_eq!(project_sample.token_name, "deploy");
    assert_eq!(project_sample.owner, "Acme / api");
    assert_eq!(project_sample.scope, TokenScope::Project);
    assert_eq!(project_sample.alert_level, AlertLevel::Warning);
}

#[tokio::test]
async fn failing_project_fetch_keeps_other_samples() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v4/groups");
            then.status(200).json_body(json!([
                {"id": 1, "full_path": "g-one"},
                {"id": 2, "full_path": "g-two"}
            ]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v4/groups/1/access_tokens");
            then.status(200)
                .json_body(json!([{"name": "tok-a", "expires_at": date_in_days(90)}]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v4/groups/1/projects");
            then.status(200)
                .json_body(json!([{"id": 10, "name_with_namespace": "g-one / broken"}]));
        })
        .await;
    // simulated transport-level failure for this one project
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v4/projects/10/access_tokens");
            then.status(500).body("internal error");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v4/groups/2/access_tokens");
            then.status(200)
                .json_body(json!([{"name": "tok-b", "expires_at": date_in_days(90)}]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v4/groups/2/projects");
            then.status(200).json_body(json!([]));
        })
        .await;

    let samples = build_samples(&client_for(&server)).await;
    let names: Vec<&str> = samples.iter().map(|s| s.token_name.as_str()).collect();
    assert_eq!(names, vec!["tok-a", "tok-b"]);
}

#[tokio::test]
async fn malformed_groups_body_yields_empty_cycle() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v4/groups");
            then.status(200).body("definitely not json");
        })
        .await;

    let samples = build_samples(&client_for(&server)).await;
    assert!(samples.is_empty());
}
