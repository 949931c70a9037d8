//! Branch membership filtering

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

use chronicle_core::error::ConfigError;
use chronicle_git::BranchRef;

/// Glob-based include/exclude filter over the branches containing a commit.
///
/// A commit passes when at least one of its branches matches an include
/// pattern and none match an exclude pattern. Exclusion always overrides
/// inclusion.
#[derive(Debug)]
pub struct BranchFilter {
    include: GlobSet,
    exclude: GlobSet,
}

impl BranchFilter {
    /// Compile include/exclude pattern lists into a filter
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, ConfigError> {
        Ok(Self {
            include: build_glob_set(include)?,
            exclude: build_glob_set(exclude)?,
        })
    }

    /// The default filter: include everything, exclude nothing
    pub fn include_all() -> Self {
        Self::new(&["*".to_string()], &[]).expect("default patterns are valid")
    }

    /// Decide membership for a commit given the branches containing it
    pub fn is_included(&self, branches: &[BranchRef]) -> bool {
        let included = branches
            .iter()
            .any(|b| self.include.is_match(normalized_name(b)));

        if !included {
            return false;
        }

        let excluded = branches
            .iter()
            .any(|b| self.exclude.is_match(normalized_name(b)));

        if excluded {
            debug!("commit excluded by branch pattern");
        }
        !excluded
    }
}

/// Strip the remote segment from remote-tracking branch names so local and
/// remote variants of the same branch compare equal (`origin/main` -> `main`).
pub fn normalized_name(branch: &BranchRef) -> &str {
    if branch.remote {
        branch
            .name
            .split_once('/')
            .map_or(branch.name.as_str(), |(_, rest)| rest)
    } else {
        &branch.name
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| ConfigError::InvalidPattern {
        pattern: patterns.join(","),
        reason: e.to_string(),
    })
}
