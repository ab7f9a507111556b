//! Shared command context for CLI commands
//!
//! Extracts the platform setup out of the command body:
//! - Finding a GitHub token
//! - Parsing the repository argument
//! - Creating the platform service

use circlemator::auth::get_github_auth;
use circlemator::error::Result;
use circlemator::platform::{GitHubService, parse_repo_slug};
use tracing::debug;

/// Context for commands that talk to GitHub
pub struct CommandContext {
    /// Platform service, used both as resolver and as API transport
    pub platform: GitHubService,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// `host` overrides the host parsed from `repo` (GitHub Enterprise).
    pub async fn new(repo: &str, host: Option<&str>) -> Result<Self> {
        let mut config = parse_repo_slug(repo)?;
        if let Some(host) = host {
            config.host = Some(host.to_string());
        }

        let auth = get_github_auth().await?;
        debug!(source = ?auth.source, owner = %config.owner, repo = %config.repo, "authenticated");

        let platform = GitHubService::new(&auth.token, config)?;
        Ok(Self { platform })
    }
}
