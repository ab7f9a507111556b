//! circlemator - merge pull requests from CI
//!
//! Once a revision's checks pass, circlemator finds the pull request that
//! carries it and merges it, guarding the merge with the revision's sha.
//! The merge commit message can carry issue-tracker transition directives
//! collected from the pull request's commits.

pub mod auth;
pub mod error;
pub mod merge;
pub mod platform;
pub mod types;
