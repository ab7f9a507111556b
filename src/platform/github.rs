//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::{HostingApi, PullRequestResolver};
use crate::types::{ApiResponse, MergeRequestSpec, PlatformConfig, PullRequestRef};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

/// GitHub service
///
/// PR lookup goes through octocrab; the raw GET/PUT calls of the merge flow
/// go through reqwest so the caller sees every status code.
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
    /// Token for raw HTTP requests
    token: String,
    /// HTTP client for raw requests
    http_client: Client,
    /// Base for relative API paths, always ending in `/`
    api_base: Url,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, config: PlatformConfig) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let api_base = if let Some(ref h) = config.host {
            let base_url = format!("https://{h}/api/v3/");
            builder = builder
                .base_uri(base_url.as_str())
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
            base_url
        } else {
            "https://api.github.com/".to_string()
        };
        let api_base = Url::parse(&api_base)
            .map_err(|e| Error::Config(format!("invalid GitHub host: {e}")))?;

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("circlemator")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            token: token.to_string(),
            http_client,
            api_base,
        })
    }

    /// Repository this service targets
    pub const fn config(&self) -> &PlatformConfig {
        &self.config
    }

    async fn read_response(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to read response body: {e}")))?;
        Ok(ApiResponse { status, body })
    }
}

/// Resolve a request target against the API base
///
/// Absolute URLs (such as a PR's `url` field) pass through unchanged.
fn resolve_url(base: &Url, target: &str) -> Result<Url> {
    base.join(target.trim_start_matches('/'))
        .map_err(|e| Error::Config(format!("invalid request URL '{target}': {e}")))
}

#[async_trait]
impl HostingApi for GitHubService {
    async fn get(&self, url: &str) -> Result<ApiResponse> {
        let url = resolve_url(&self.api_base, url)?;
        debug!(%url, "GET");

        let response = self
            .http_client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await?;

        let response = Self::read_response(response).await?;
        debug!(status = response.status, "GET complete");
        Ok(response)
    }

    async fn put(&self, url: &str, body: &serde_json::Value) -> Result<ApiResponse> {
        let url = resolve_url(&self.api_base, url)?;
        debug!(%url, "PUT");

        let response = self
            .http_client
            .put(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(body)
            .send()
            .await?;

        let response = Self::read_response(response).await?;
        debug!(status = response.status, "PUT complete");
        Ok(response)
    }
}

#[async_trait]
impl PullRequestResolver for GitHubService {
    async fn find_pull_request(&self, spec: &MergeRequestSpec) -> Result<Option<PullRequestRef>> {
        debug!(
            base = %spec.base_branch,
            compare = %spec.compare_branch,
            sha = %spec.revision_id,
            "finding PR"
        );
        let head = format!("{}:{}", &self.config.owner, spec.compare_branch);

        let prs = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .list()
            .state(octocrab::params::State::Open)
            .head(head)
            .base(spec.base_branch.clone())
            .send()
            .await?;

        debug!(open = prs.items.len(), "listed open PRs");
        Ok(select_pull_request(
            prs.items
                .iter()
                .map(|pr| (pr.number, pr.url.clone(), pr.head.sha.clone())),
            &spec.revision_id,
        ))
    }
}

/// Pick the single PR whose head is `revision_id`
///
/// Candidates are `(number, api_url, head_sha)`. Zero or several matches
/// both mean there is nothing to merge.
fn select_pull_request(
    candidates: impl IntoIterator<Item = (u64, String, String)>,
    revision_id: &str,
) -> Option<PullRequestRef> {
    let matching: Vec<PullRequestRef> = candidates
        .into_iter()
        .filter(|(_, _, head_sha)| head_sha == revision_id)
        .map(|(number, url, _)| PullRequestRef { number, url })
        .collect();

    match matching.as_slice() {
        [] => {
            debug!(sha = revision_id, "no PR at this revision");
            None
        }
        [pr] => {
            debug!(pr_number = pr.number, "found PR");
            Some(pr.clone())
        }
        many => {
            let numbers: Vec<u64> = many.iter().map(|pr| pr.number).collect();
            warn!(?numbers, "several PRs match this revision, not merging");
            None
        }
    }
}
