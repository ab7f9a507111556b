//! GitHub token discovery

use super::AuthSource;
use crate::error::{Error, Result};
use tokio::process::Command;
use tracing::debug;

/// Environment variables checked for a token, in order
pub const TOKEN_ENV_VARS: [&str; 3] = ["GITHUB_TOKEN", "GH_TOKEN", "GITHUB_ACCESS_TOKEN"];

/// A GitHub token and where it came from
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// API token
    pub token: String,
    /// Where the token was found
    pub source: AuthSource,
}

/// Find a GitHub token
///
/// Checks [`TOKEN_ENV_VARS`] first, then falls back to `gh auth token`.
pub async fn get_github_auth() -> Result<GitHubAuthConfig> {
    if let Some((var, token)) = token_from_env(|name| std::env::var(name).ok()) {
        debug!(var, "using GitHub token from environment");
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::EnvVar,
        });
    }

    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .map_err(|e| {
            Error::Auth(format!(
                "no token in {} and failed to run gh: {e}",
                TOKEN_ENV_VARS.join(", ")
            ))
        })?;

    if !output.status.success() {
        return Err(Error::Auth(format!(
            "no token in {} and `gh auth token` failed: {}",
            TOKEN_ENV_VARS.join(", "),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(Error::Auth("`gh auth token` returned an empty token".to_string()));
    }

    debug!("using GitHub token from gh CLI");
    Ok(GitHubAuthConfig {
        token,
        source: AuthSource::Cli,
    })
}

/// First non-empty token among [`TOKEN_ENV_VARS`]
fn token_from_env(lookup: impl Fn(&str) -> Option<String>) -> Option<(&'static str, String)> {
    TOKEN_ENV_VARS.iter().find_map(|&name| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(|v| (name, v))
    })
}
