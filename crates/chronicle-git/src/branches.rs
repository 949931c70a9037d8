//! Branch containment queries

use git2::{BranchType, Oid};
use tracing::trace;

use crate::repository::{GitRepo, Result};
use crate::types::BranchRef;

impl GitRepo {
    /// Get every branch (local and remote-tracking) whose history contains
    /// the given commit.
    ///
    /// A branch contains the commit when its tip is the commit itself or a
    /// descendant of it. Symbolic refs that do not peel to a commit (e.g.
    /// `origin/HEAD` in a freshly cloned repo) are skipped.
    pub fn branches_containing(&self, commit_id: &str) -> Result<Vec<BranchRef>> {
        let oid = Oid::from_str(commit_id)?;
        let mut found = Vec::new();

        for entry in self.repo.branches(None)? {
            let (branch, branch_type) = entry?;

            let Some(name) = branch.name()?.map(str::to_string) else {
                continue;
            };
            let Ok(tip) = branch.get().peel_to_commit() else {
                continue;
            };

            let contains =
                tip.id() == oid || self.repo.graph_descendant_of(tip.id(), oid)?;

            if contains {
                found.push(BranchRef {
                    name,
                    remote: matches!(branch_type, BranchType::Remote),
                });
            }
        }

        trace!(commit = commit_id, count = found.len(), "resolved containing branches");
        Ok(found)
    }
}
