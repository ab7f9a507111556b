//! Hosting platform services
//!
//! The merge flow talks to the hosting platform through two capabilities:
//! finding the PR for a revision, and raw GET/PUT requests. Both are traits
//! so the flow can run against GitHub or a test double.

mod detection;
mod github;

pub use detection::parse_repo_slug;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{ApiResponse, MergeRequestSpec, PullRequestRef};
use async_trait::async_trait;

/// Finds the pull request a merge attempt refers to
#[async_trait]
pub trait PullRequestResolver: Send + Sync {
    /// Find the single open PR for the requested branches and revision
    ///
    /// `Ok(None)` means there is nothing to merge. That is not an error.
    async fn find_pull_request(&self, spec: &MergeRequestSpec) -> Result<Option<PullRequestRef>>;
}

/// Raw access to the hosting API
///
/// Implementations return any HTTP status as a response; only transport
/// failures are errors. Interpreting the status is up to the caller.
#[async_trait]
pub trait HostingApi: Send + Sync {
    /// GET a URL (absolute, or a path relative to the API base)
    async fn get(&self, url: &str) -> Result<ApiResponse>;

    /// PUT a JSON body to a URL (absolute, or a path relative to the API base)
    async fn put(&self, url: &str, body: &serde_json::Value) -> Result<ApiResponse>;
}
