//! CLI commands

mod context;
mod merge;
pub mod style;

pub use merge::{SelfMergeOptions, run_self_merge};
