//! circlemator CLI

mod cli;

use anyhow::Context;
use circlemator::types::IssueTrackerConfig;
use clap::{Parser, Subcommand};
use cli::{SelfMergeOptions, run_self_merge};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Merge pull requests from CI once checks pass
#[derive(Parser)]
#[command(name = "circlemator", version, about)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge the open PR whose head is the given revision
    SelfMerge(SelfMergeArgs),
}

#[derive(clap::Args)]
struct SelfMergeArgs {
    /// Repository as owner/repo or a remote URL
    #[arg(long, env = "CIRCLEMATOR_REPO")]
    repo: String,

    /// Revision that passed CI; the merge fails if the branch moved past it
    #[arg(long, env = "CIRCLE_SHA1")]
    sha: String,

    /// Branch the PR targets
    #[arg(long, env = "CIRCLEMATOR_BASE_BRANCH", default_value = "master")]
    base_branch: String,

    /// Branch the PR merges from
    #[arg(long, env = "CIRCLE_BRANCH")]
    compare_branch: String,

    /// JIRA project key whose issue references go into the merge commit
    #[arg(long, env = "CIRCLEMATOR_JIRA_PROJECT", requires = "jira_transition")]
    jira_project: Option<String>,

    /// JIRA transition applied to every referenced issue
    #[arg(long, env = "CIRCLEMATOR_JIRA_TRANSITION", requires = "jira_project")]
    jira_transition: Option<String>,

    /// GitHub Enterprise host (defaults to github.com)
    #[arg(long, env = "CIRCLEMATOR_GITHUB_HOST")]
    github_host: Option<String>,
}

impl From<SelfMergeArgs> for SelfMergeOptions {
    fn from(args: SelfMergeArgs) -> Self {
        let issue_tracker = args
            .jira_project
            .zip(args.jira_transition)
            .map(|(project_key, transition_name)| IssueTrackerConfig {
                project_key,
                transition_name,
            });

        Self {
            repo: args.repo,
            github_host: args.github_host,
            sha: args.sha,
            base_branch: args.base_branch,
            compare_branch: args.compare_branch,
            issue_tracker,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "circlemator=debug"
    } else {
        "circlemator=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::SelfMerge(args) => run_self_merge(args.into())
            .await
            .context("self-merge failed")?,
    }

    Ok(())
}
