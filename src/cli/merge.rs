//! Self-merge command - merge the PR carrying the current CI revision

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check};
use anstream::println;
use circlemator::error::Result;
use circlemator::merge::PullRequestMerger;
use circlemator::types::{IssueTrackerConfig, MergeOutcome, MergeRequestSpec};

/// Options for the self-merge command
#[derive(Debug, Clone)]
pub struct SelfMergeOptions {
    /// `owner/repo` or a remote URL
    pub repo: String,
    /// GitHub Enterprise host
    pub github_host: Option<String>,
    /// Revision that passed CI
    pub sha: String,
    /// Branch the PR targets
    pub base_branch: String,
    /// Branch the PR merges from
    pub compare_branch: String,
    /// Issue-tracker annotation
    pub issue_tracker: Option<IssueTrackerConfig>,
}

/// Run the self-merge command
pub async fn run_self_merge(options: SelfMergeOptions) -> Result<()> {
    let ctx = CommandContext::new(&options.repo, options.github_host.as_deref()).await?;

    let mut spec = MergeRequestSpec::new(
        options.sha,
        options.base_branch,
        options.compare_branch,
    );
    if let Some(config) = options.issue_tracker {
        spec = spec.with_issue_tracker(config);
    }

    println!(
        "{}",
        format!(
            "Looking for a PR from {} into {} at {}...",
            spec.compare_branch, spec.base_branch, spec.revision_id
        )
        .muted()
    );

    let merger = PullRequestMerger::new(&ctx.platform, &ctx.platform);
    match merger.merge(&spec).await? {
        MergeOutcome::Merged { number, sha } => {
            let sha_display = sha.as_deref().unwrap_or("(no sha)");
            println!(
                "{} {} {}",
                check(),
                "Merged".emphasis(),
                format!("PR #{number}: {sha_display}").accent()
            );
        }
        MergeOutcome::NoPullRequest => {
            println!("{}", "No pull request to merge.".muted());
        }
    }

    Ok(())
}
