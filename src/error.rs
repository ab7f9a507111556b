//! Error types for circlemator

use thiserror::Error;

/// Errors surfaced by the merge flow and its collaborators
#[derive(Debug, Error)]
pub enum Error {
    /// Commit-history fetch returned a non-200 status
    #[error("GitHub API response error: status {status}: {body}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The merge endpoint refused the merge
    #[error("Merge failed: {message}")]
    MergeRejected {
        /// HTTP status code
        status: u16,
        /// `message` field of the error body, verbatim
        message: String,
    },

    /// Response body was not JSON or lacked expected fields
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// GitHub API or transport failure
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// HTTP client failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No usable credentials
    #[error("authentication error: {0}")]
    Auth(String),

    /// Invalid configuration (repository slug, host, issue key pattern)
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<octocrab::Error> for Error {
    fn from(e: octocrab::Error) -> Self {
        Self::GitHubApi(e.to_string())
    }
}

/// Result alias using circlemator's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
