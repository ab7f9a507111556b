//! Merge execution - effectful operations
//!
//! Resolves the pull request, builds the commit message and asks the hosting
//! API to merge. Nothing is retried: the first failure ends the attempt.

use crate::error::{Error, Result};
use crate::merge::message::{DEFAULT_MESSAGE, MergeMessageBuilder};
use crate::platform::{HostingApi, PullRequestResolver};
use crate::types::{
    IssueTrackerConfig, MergeOutcome, MergeRequestSpec, PullRequestRef, parse_commits,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

/// Error body returned by the merge endpoint
#[derive(Deserialize)]
struct MergeErrorBody {
    message: String,
}

/// Success body returned by the merge endpoint
#[derive(Deserialize)]
struct MergeSuccessBody {
    sha: Option<String>,
}

/// Merges the pull request carrying a given revision
pub struct PullRequestMerger<'a> {
    resolver: &'a dyn PullRequestResolver,
    api: &'a dyn HostingApi,
}

impl<'a> PullRequestMerger<'a> {
    /// Create a merger over the given resolver and API
    pub fn new(resolver: &'a dyn PullRequestResolver, api: &'a dyn HostingApi) -> Self {
        Self { resolver, api }
    }

    /// Merge the PR matching `spec` (EFFECTFUL)
    ///
    /// Returns [`MergeOutcome::NoPullRequest`] without touching the API when
    /// no PR matches. The merge request carries `spec.revision_id` as `sha`,
    /// so the platform refuses it if the branch head moved.
    ///
    /// # Errors
    /// - [`Error::Upstream`] if the commit list cannot be fetched
    /// - [`Error::MergeRejected`] if the platform refuses the merge
    /// - [`Error::MalformedResponse`] if a response body cannot be parsed
    pub async fn merge(&self, spec: &MergeRequestSpec) -> Result<MergeOutcome> {
        let Some(pr) = self.resolver.find_pull_request(spec).await? else {
            info!(
                compare_branch = %spec.compare_branch,
                sha = %spec.revision_id,
                "no pull request to merge"
            );
            return Ok(MergeOutcome::NoPullRequest);
        };

        let commit_message = match &spec.issue_tracker {
            Some(config) => self.issue_tracker_message(&pr, config).await?,
            None => MergeMessageBuilder::default_message().to_string(),
        };

        let body = json!({
            "commit_message": commit_message,
            "sha": spec.revision_id,
        });

        debug!(pr_number = pr.number, sha = %spec.revision_id, "merging PR");
        let response = self.api.put(&format!("{}/merge", pr.url), &body).await?;

        if !response.is_success() {
            let error: MergeErrorBody = response.json()?;
            warn!(
                pr_number = pr.number,
                status = response.status,
                message = %error.message,
                "merge rejected"
            );
            return Err(Error::MergeRejected {
                status: response.status,
                message: error.message,
            });
        }

        let sha = response
            .json::<MergeSuccessBody>()
            .ok()
            .and_then(|body| body.sha);
        info!(pr_number = pr.number, sha = ?sha, "merged PR");
        Ok(MergeOutcome::Merged {
            number: pr.number,
            sha,
        })
    }

    /// Fetch the PR's commits and turn their issue references into directives
    async fn issue_tracker_message(
        &self,
        pr: &PullRequestRef,
        config: &IssueTrackerConfig,
    ) -> Result<String> {
        let builder = MergeMessageBuilder::new(config)?;

        debug!(pr_number = pr.number, "fetching PR commits");
        let response = self.api.get(&format!("{}/commits", pr.url)).await?;
        if !response.is_success() {
            return Err(Error::Upstream {
                status: response.status,
                body: response.body,
            });
        }

        let commits = parse_commits(&response.body)?;
        let message = builder.build(&commits);
        debug!(
            pr_number = pr.number,
            commits = commits.len(),
            "built issue transition message"
        );

        if message.is_empty() {
            warn!(
                pr_number = pr.number,
                project_key = %config.project_key,
                "no issue references found in commits, using default message"
            );
            return Ok(DEFAULT_MESSAGE.to_string());
        }
        Ok(message)
    }
}
