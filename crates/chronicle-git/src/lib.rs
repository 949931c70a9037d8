//! Chronicle Git - Repository access for changelog generation
//!
//! This crate wraps git2 with the few read-only operations the changelog
//! engine needs: tag enumeration, commit history walks, and
//! branch-containment queries.

mod branches;
mod commits;
mod repository;
mod tags;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::{BranchRef, CommitInfo, TagInfo};
