//! Commit history operations

use git2::Sort;
use tracing::debug;

use chronicle_core::error::GitError;

use crate::repository::{commit_to_info, GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Get all commits reachable from a revision (anything rev-parse accepts)
    pub fn commits_from(&self, rev: &str) -> Result<Vec<CommitInfo>> {
        let start = self
            .repo
            .revparse_single(rev)
            .map_err(|_| GitError::RevisionNotFound(rev.to_string()))?
            .peel_to_commit()
            .map_err(|_| GitError::RevisionNotFound(rev.to_string()))?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(start.id())?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(rev, count = commits.len(), "walked commit history");
        Ok(commits)
    }

    /// Get a specific commit by hash
    pub fn get_commit(&self, hash: &str) -> Result<CommitInfo> {
        let oid = git2::Oid::from_str(hash)?;
        let commit = self.repo.find_commit(oid)?;
        Ok(commit_to_info(&commit))
    }
}
