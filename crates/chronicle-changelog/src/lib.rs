//! Chronicle Changelog - Commit classification and release grouping
//!
//! This crate turns a repository's commit history into a structured,
//! release-grouped changelog: it classifies conventional commit messages,
//! filters commits by branch membership, partitions the survivors into
//! per-tag release buckets plus an "unreleased" bucket, and renders the
//! result.

pub mod builder;
pub mod classify;
pub mod filter;
pub mod formatter;
pub mod grouping;
pub mod source;
pub mod traverse;
pub mod types;

pub use classify::{classify, Classification};
pub use filter::BranchFilter;
pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use grouping::group_commits;
pub use source::RepositorySource;
pub use traverse::{traverse, TraverseOptions};
pub use types::{Changelog, Commit, CommitCategory, Release, Unreleased};
