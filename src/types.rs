//! Core types for circlemator

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Issue-tracker parameters for annotating the merge commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTrackerConfig {
    /// Project key, e.g. `CM` for references like `CM-123`
    pub project_key: String,
    /// Transition directive appended to each reference, e.g. `ship`
    pub transition_name: String,
}

/// A single merge attempt
///
/// `revision_id` is the head commit the caller expects the pull request's
/// branch to be at. It is forwarded to the merge endpoint unchanged and
/// makes the merge fail if the branch moved in the meantime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequestSpec {
    /// Expected head commit of the branch being merged (not a PR number)
    pub revision_id: String,
    /// Branch the pull request targets
    pub base_branch: String,
    /// Branch the pull request merges from
    pub compare_branch: String,
    /// Issue-tracker annotation, if any
    pub issue_tracker: Option<IssueTrackerConfig>,
}

impl MergeRequestSpec {
    /// Create a spec without issue-tracker annotation
    pub fn new(
        revision_id: impl Into<String>,
        base_branch: impl Into<String>,
        compare_branch: impl Into<String>,
    ) -> Self {
        Self {
            revision_id: revision_id.into(),
            base_branch: base_branch.into(),
            compare_branch: compare_branch.into(),
            issue_tracker: None,
        }
    }

    /// Attach issue-tracker parameters
    #[must_use]
    pub fn with_issue_tracker(mut self, config: IssueTrackerConfig) -> Self {
        self.issue_tracker = Some(config);
        self
    }
}

/// The pull request matching a merge attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// PR number
    pub number: u64,
    /// API URL of the PR (`.../repos/{owner}/{repo}/pulls/{number}`)
    pub url: String,
}

/// One commit of a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full commit message
    pub message: String,
}

/// Entry of `GET <pr_url>/commits`
#[derive(Debug, Deserialize)]
struct CommitEntry {
    commit: CommitRecord,
}

/// Parse the body of `GET <pr_url>/commits`
pub fn parse_commits(body: &str) -> Result<Vec<CommitRecord>> {
    let entries: Vec<CommitEntry> = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("failed to parse commit list: {e}")))?;
    Ok(entries.into_iter().map(|e| e.commit).collect())
}

/// Raw HTTP response from the hosting API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body (JSON text)
    pub body: String,
}

impl ApiResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only HTTP 200 counts as success for the endpoints used here
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Deserialize the body
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            Error::MalformedResponse(format!("status {}: {e}: {}", self.status, self.body))
        })
    }
}

/// Outcome of a merge attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The pull request was merged
    Merged {
        /// PR number
        number: u64,
        /// Merge commit sha, when the API reported one
        sha: Option<String>,
    },
    /// No pull request matched; nothing was done
    NoPullRequest,
}

/// Repository coordinates on the hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}
