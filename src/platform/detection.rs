//! Repository coordinate parsing

use crate::error::{Error, Result};
use crate::types::PlatformConfig;
use url::Url;

const GITHUB_HOST: &str = "github.com";

/// Parse a repository argument into platform coordinates
///
/// Accepts `owner/repo`, `https://<host>/owner/repo[.git]` and
/// `git@<host>:owner/repo[.git]`. A host other than github.com is kept so the
/// API base can point at GitHub Enterprise.
pub fn parse_repo_slug(input: &str) -> Result<PlatformConfig> {
    let input = input.trim();

    let (host, path) = if let Some(rest) = input.strip_prefix("git@") {
        let (host, path) = rest
            .split_once(':')
            .ok_or_else(|| invalid(input, "missing ':' after host"))?;
        (Some(host.to_string()), path.to_string())
    } else if input.contains("://") {
        let url = Url::parse(input).map_err(|e| invalid(input, &e.to_string()))?;
        let host = url
            .host_str()
            .ok_or_else(|| invalid(input, "missing host"))?
            .to_string();
        (Some(host), url.path().to_string())
    } else {
        (None, input.to_string())
    };

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let (owner, repo) = path
        .split_once('/')
        .ok_or_else(|| invalid(input, "expected owner/repo"))?;

    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return Err(invalid(input, "expected owner/repo"));
    }

    Ok(PlatformConfig {
        owner: owner.to_string(),
        repo: repo.to_string(),
        host: host.filter(|h| h != GITHUB_HOST),
    })
}

fn invalid(input: &str, reason: &str) -> Error {
    Error::Config(format!("invalid repository '{input}': {reason}"))
}
