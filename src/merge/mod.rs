//! Merge engine
//!
//! Two steps, kept apart so the first is testable without I/O:
//! 1. Message - build the merge commit message from commit history (pure)
//! 2. Execute - resolve the PR, fetch commits, merge (effectful)

mod execute;
mod message;

pub use execute::PullRequestMerger;
pub use message::{DEFAULT_MESSAGE, MergeMessageBuilder};
