//! Merge commit message construction - pure functions
//!
//! No I/O happens here. The message depends only on the commit history and
//! the issue-tracker parameters, so the same input always yields the same
//! message.

use crate::error::{Error, Result};
use crate::types::{CommitRecord, IssueTrackerConfig};
use regex::Regex;
use std::collections::BTreeSet;

/// Commit message used when no issue-tracker parameters are given
pub const DEFAULT_MESSAGE: &str = "Auto-merge by Circlemator!";

/// Builds merge commit messages carrying issue-tracker transitions
///
/// Every `<project_key>-<digits>` reference found in the PR's commits becomes
/// one `<reference> #<transition>` line. References are deduplicated and
/// sorted as strings, so `CM-1000` sorts before `CM-2`.
#[derive(Debug, Clone)]
pub struct MergeMessageBuilder {
    pattern: Regex,
    transition_name: String,
}

impl MergeMessageBuilder {
    /// Create a builder for the given project key and transition
    ///
    /// The project key is matched literally; characters such as `.` or `+`
    /// carry no pattern meaning. An empty key is rejected: it would match
    /// any hyphenated number.
    pub fn new(config: &IssueTrackerConfig) -> Result<Self> {
        if config.project_key.is_empty() {
            return Err(Error::Config("issue project key is empty".to_string()));
        }

        let pattern = Regex::new(&format!(r"{}-[0-9]+", regex::escape(&config.project_key)))
            .map_err(|e| {
                Error::Config(format!(
                    "invalid issue project key '{}': {e}",
                    config.project_key
                ))
            })?;

        Ok(Self {
            pattern,
            transition_name: config.transition_name.clone(),
        })
    }

    /// The fixed message used without issue-tracker parameters
    pub const fn default_message() -> &'static str {
        DEFAULT_MESSAGE
    }

    /// Unique issue references across all commit messages, in string order
    pub fn references(&self, commits: &[CommitRecord]) -> BTreeSet<String> {
        commits
            .iter()
            .flat_map(|c| self.pattern.find_iter(&c.message))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Build the transition directives, one line per reference
    ///
    /// Returns an empty string when no commit mentions the project.
    pub fn build(&self, commits: &[CommitRecord]) -> String {
        self.references(commits)
            .iter()
            .map(|reference| format!("{reference} #{}", self.transition_name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
