//! Repository access port
//!
//! The engine only ever touches a repository through this trait, which
//! keeps classification and grouping testable with fixture data and no
//! real repository.

use chronicle_core::error::GitError;
use chronicle_git::{BranchRef, CommitInfo, GitRepo, TagInfo};

/// The three repository operations the changelog engine consumes
pub trait RepositorySource {
    /// List tags whose name matches a glob pattern, each anchored to the
    /// commit it points to
    fn list_tags(&self, pattern: &str) -> Result<Vec<TagInfo>, GitError>;

    /// List commits reachable from a revision
    fn list_commits(&self, rev: &str) -> Result<Vec<CommitInfo>, GitError>;

    /// List the branches (local and remote-tracking) containing a commit
    fn branches_containing(&self, commit_id: &str) -> Result<Vec<BranchRef>, GitError>;
}

impl RepositorySource for GitRepo {
    fn list_tags(&self, pattern: &str) -> Result<Vec<TagInfo>, GitError> {
        self.tags_matching(pattern)
    }

    fn list_commits(&self, rev: &str) -> Result<Vec<CommitInfo>, GitError> {
        self.commits_from(rev)
    }

    fn branches_containing(&self, commit_id: &str) -> Result<Vec<BranchRef>, GitError> {
        GitRepo::branches_containing(self, commit_id)
    }
}
