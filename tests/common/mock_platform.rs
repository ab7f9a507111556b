//! Mock platform service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use circlemator::error::{Error, Result};
use circlemator::platform::{HostingApi, PullRequestResolver};
use circlemator::types::{ApiResponse, MergeRequestSpec, PullRequestRef};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `put`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutCall {
    pub url: String,
    pub body: serde_json::Value,
}

/// Simple mock platform service for testing
///
/// Implements both `PullRequestResolver` and `HostingApi` by hand.
///
/// Features:
/// - Configurable PR lookup result
/// - Configurable responses per URL (unconfigured URLs answer 404)
/// - Call tracking for verification
/// - Error injection for transport failures
pub struct MockPlatformService {
    pull_request: Mutex<Option<PullRequestRef>>,
    get_responses: Mutex<HashMap<String, ApiResponse>>,
    put_responses: Mutex<HashMap<String, ApiResponse>>,
    // Call tracking
    find_pr_calls: Mutex<Vec<MergeRequestSpec>>,
    get_calls: Mutex<Vec<String>>,
    put_calls: Mutex<Vec<PutCall>>,
    // Error injection
    error_on_find_pr: Mutex<Option<String>>,
    error_on_get: Mutex<Option<String>>,
    error_on_put: Mutex<Option<String>>,
}

impl Default for MockPlatformService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatformService {
    /// Create a mock that finds no PR
    pub fn new() -> Self {
        Self {
            pull_request: Mutex::new(None),
            get_responses: Mutex::new(HashMap::new()),
            put_responses: Mutex::new(HashMap::new()),
            find_pr_calls: Mutex::new(Vec::new()),
            get_calls: Mutex::new(Vec::new()),
            put_calls: Mutex::new(Vec::new()),
            error_on_find_pr: Mutex::new(None),
            error_on_get: Mutex::new(None),
            error_on_put: Mutex::new(None),
        }
    }

    /// Create a mock that finds the given PR
    pub fn with_pr(pr: PullRequestRef) -> Self {
        let mock = Self::new();
        mock.set_pull_request(Some(pr));
        mock
    }

    // === Error injection methods ===

    /// Make `find_pull_request` return an error
    pub fn fail_find_pr(&self, msg: &str) {
        *self.error_on_find_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `get` return a transport error
    pub fn fail_get(&self, msg: &str) {
        *self.error_on_get.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `put` return a transport error
    pub fn fail_put(&self, msg: &str) {
        *self.error_on_put.lock().unwrap() = Some(msg.to_string());
    }

    // === Response configuration ===

    /// Set the result of `find_pull_request`
    pub fn set_pull_request(&self, pr: Option<PullRequestRef>) {
        *self.pull_request.lock().unwrap() = pr;
    }

    /// Set the response for `get` on a URL
    pub fn set_get_response(&self, url: &str, status: u16, body: &str) {
        self.get_responses
            .lock()
            .unwrap()
            .insert(url.to_string(), ApiResponse::new(status, body));
    }

    /// Set the response for `put` on a URL
    pub fn set_put_response(&self, url: &str, status: u16, body: &str) {
        self.put_responses
            .lock()
            .unwrap()
            .insert(url.to_string(), ApiResponse::new(status, body));
    }

    // === Call inspection ===

    pub fn find_pr_calls(&self) -> Vec<MergeRequestSpec> {
        self.find_pr_calls.lock().unwrap().clone()
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.get_calls.lock().unwrap().clone()
    }

    pub fn put_calls(&self) -> Vec<PutCall> {
        self.put_calls.lock().unwrap().clone()
    }
}

fn not_found() -> ApiResponse {
    ApiResponse::new(404, r#"{"message":"Not Found"}"#)
}

#[async_trait]
impl PullRequestResolver for MockPlatformService {
    async fn find_pull_request(&self, spec: &MergeRequestSpec) -> Result<Option<PullRequestRef>> {
        self.find_pr_calls.lock().unwrap().push(spec.clone());

        if let Some(msg) = self.error_on_find_pr.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(self.pull_request.lock().unwrap().clone())
    }
}

#[async_trait]
impl HostingApi for MockPlatformService {
    async fn get(&self, url: &str) -> Result<ApiResponse> {
        self.get_calls.lock().unwrap().push(url.to_string());

        if let Some(msg) = self.error_on_get.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(self
            .get_responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(not_found))
    }

    async fn put(&self, url: &str, body: &serde_json::Value) -> Result<ApiResponse> {
        self.put_calls.lock().unwrap().push(PutCall {
            url: url.to_string(),
            body: body.clone(),
        });

        if let Some(msg) = self.error_on_put.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(self
            .put_responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(not_found))
    }
}
