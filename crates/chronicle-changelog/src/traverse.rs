//! Traversal orchestration
//!
//! Composes the repository port, the branch filter, the classifier, and
//! the grouping engine into the full history walk.

use tracing::{debug, info, instrument};

use chronicle_core::error::{ChronicleError, GitError};

use crate::filter::BranchFilter;
use crate::grouping::group_commits;
use crate::source::RepositorySource;
use crate::types::{Commit, Release, Unreleased};

/// Options controlling one traversal
#[derive(Debug, Clone)]
pub struct TraverseOptions {
    /// Revision the commit walk starts from
    pub rev: String,
    /// Glob pattern selecting release tags
    pub tag_pattern: String,
    /// Branch name globs a commit must be contained in
    pub include_branches: Vec<String>,
    /// Branch name globs that disqualify a commit
    pub exclude_branches: Vec<String>,
    /// Keep commits newer than the latest tag
    pub keep_unreleased: bool,
}

impl Default for TraverseOptions {
    fn default() -> Self {
        Self {
            rev: "HEAD".to_string(),
            tag_pattern: "*".to_string(),
            include_branches: vec!["*".to_string()],
            exclude_branches: Vec::new(),
            keep_unreleased: true,
        }
    }
}

/// Walk the repository and group its commits by release.
///
/// Returns the releases in ascending tag order and, when retention is
/// enabled and commits newer than the last tag exist, the unreleased
/// bucket. Filtering the tag set down to nothing is a fatal configuration
/// error raised before any commit is touched.
#[instrument(skip(source, options), fields(rev = %options.rev, tag_pattern = %options.tag_pattern))]
pub fn traverse<S: RepositorySource>(
    source: &S,
    options: &TraverseOptions,
) -> Result<(Vec<Release>, Option<Unreleased>), ChronicleError> {
    let tags = source.list_tags(&options.tag_pattern)?;
    if tags.is_empty() {
        return Err(GitError::NoTags(options.tag_pattern.clone()).into());
    }
    debug!(count = tags.len(), "tags selected");

    let filter = BranchFilter::new(&options.include_branches, &options.exclude_branches)?;

    // One containment query per commit; classification is fused into the
    // same pass. The queries are independent and read-only, so this loop
    // is where a bounded worker pool would go if commit counts ever
    // warranted it.
    let mut candidates = Vec::new();
    for info in source.list_commits(&options.rev)? {
        let branches = source.branches_containing(&info.hash)?;
        if filter.is_included(&branches) {
            candidates.push(Commit::from_info(&info));
        }
    }
    debug!(count = candidates.len(), "commits passed branch filtering");

    let (releases, leftovers) = group_commits(&tags, &candidates);

    let unreleased = if options.keep_unreleased && !leftovers.is_empty() {
        Some(Unreleased::new(leftovers))
    } else {
        None
    };

    info!(
        releases = releases.len(),
        unreleased = unreleased.as_ref().map_or(0, |u| u.commits.len()),
        "traversal complete"
    );
    Ok((releases, unreleased))
}
