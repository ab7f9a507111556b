//! Shared test fixtures

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{MockPlatformService, PutCall};

use circlemator::types::{IssueTrackerConfig, MergeRequestSpec, PullRequestRef};
use serde_json::json;

pub const PR_URL: &str = "https://api.github.com/rainforestapp/circlemator/pulls/12345";
pub const SHA: &str = "1234567";

/// The PR every fixture resolves to
pub fn make_pr() -> PullRequestRef {
    PullRequestRef {
        number: 12345,
        url: PR_URL.to_string(),
    }
}

pub fn commits_url() -> String {
    format!("{PR_URL}/commits")
}

pub fn merge_url() -> String {
    format!("{PR_URL}/merge")
}

/// Spec without issue-tracker annotation
pub fn default_spec() -> MergeRequestSpec {
    MergeRequestSpec::new(SHA, "master", "topic")
}

/// Spec annotating with project `CM` and transition `ship`
pub fn jira_spec() -> MergeRequestSpec {
    default_spec().with_issue_tracker(IssueTrackerConfig {
        project_key: "CM".to_string(),
        transition_name: "ship".to_string(),
    })
}

/// Body of `GET <pr_url>/commits` for the given messages
pub fn commits_body(messages: &[&str]) -> String {
    let entries: Vec<_> = messages
        .iter()
        .enumerate()
        .map(|(i, m)| json!({ "sha": format!("c{i}"), "commit": { "message": m } }))
        .collect();
    serde_json::Value::Array(entries).to_string()
}

/// Mock resolving to [`make_pr`] whose merge succeeds
pub fn mergeable_platform() -> MockPlatformService {
    let mock = MockPlatformService::with_pr(make_pr());
    mock.set_put_response(
        &merge_url(),
        200,
        r#"{"sha":"6dcb09b5b57875f334f61aebed695e2e4193db5e","merged":true,"message":"Pull Request successfully merged"}"#,
    );
    mock
}
