//! Tag operations

use globset::Glob;
use tracing::{debug, instrument};

use chronicle_core::error::GitError;

use crate::repository::{commit_to_info, GitRepo, Result};
use crate::types::TagInfo;

impl GitRepo {
    /// Get all tags, each anchored to the commit it points to.
    ///
    /// Annotated tags are peeled to their target commit; the anchor
    /// timestamp is always the committed timestamp of that commit.
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut names = Vec::new();

        self.repo.tag_foreach(|_oid, name| {
            names.push(String::from_utf8_lossy(name).to_string());
            true
        })?;

        let mut tags = Vec::new();
        for full_name in names {
            let name = full_name.trim_start_matches("refs/tags/").to_string();
            // Peeling resolves annotated tags down to the target commit
            let reference = self.repo.find_reference(&full_name)?;
            let commit = reference.peel_to_commit()?;

            tags.push(TagInfo::new(name, commit_to_info(&commit)));
        }

        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }

    /// Get tags whose name matches a glob pattern
    pub fn tags_matching(&self, pattern: &str) -> Result<Vec<TagInfo>> {
        let matcher = Glob::new(pattern)
            .map_err(|e| GitError::BadPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?
            .compile_matcher();

        let matching: Vec<_> = self
            .tags()?
            .into_iter()
            .filter(|t| matcher.is_match(&t.name))
            .collect();

        debug!(pattern, count = matching.len(), "filtered tags");
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature, Time};
    use std::path::Path;
    use tempfile::TempDir;

    fn setup_repo_with_tags() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        let sig = Signature::new("Test", "test@example.com", &Time::new(1000, 0)).unwrap();

        std::fs::write(temp.path().join("file.txt"), "content").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("file.txt")).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, "chore: initial commit", &tree, &[])
            .unwrap();

        let commit = repo.find_commit(oid).unwrap();
        repo.tag_lightweight("v1.0.0", commit.as_object(), false)
            .unwrap();
        repo.tag("v1.1.0", commit.as_object(), &sig, "release 1.1.0", false)
            .unwrap();
        repo.tag_lightweight("experiment", commit.as_object(), false)
            .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        (temp, git_repo)
    }

    #[test]
    fn test_list_tags() {
        let (_temp, repo) = setup_repo_with_tags();
        let tags = repo.tags().unwrap();
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn test_annotated_tag_peels_to_commit() {
        let (_temp, repo) = setup_repo_with_tags();
        let tags = repo.tags().unwrap();
        let annotated = tags.iter().find(|t| t.name == "v1.1.0").unwrap();
        // Anchor timestamp is the committed timestamp, not the tagger time
        assert_eq!(annotated.timestamp().timestamp(), 1000);
        assert_eq!(annotated.target.message, "chore: initial commit");
    }

    #[test]
    fn test_tags_matching() {
        let (_temp, repo) = setup_repo_with_tags();
        let tags = repo.tags_matching("v*").unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.iter().all(|t| t.name.starts_with('v')));
    }

    #[test]
    fn test_tags_matching_none() {
        let (_temp, repo) = setup_repo_with_tags();
        let tags = repo.tags_matching("release-*").unwrap();
        assert!(tags.is_empty());
    }
}
