//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Main configuration for chronicle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema")]
    pub schema: Option<String>,

    /// Project configuration
    pub project: ProjectConfig,

    /// History traversal configuration
    pub traversal: TraversalConfig,

    /// Changelog rendering configuration
    pub changelog: ChangelogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: None,
            project: ProjectConfig::default(),
            traversal: TraversalConfig::default(),
            changelog: ChangelogConfig::default(),
        }
    }
}

/// Project-level settings used as changelog front matter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Changelog title
    pub title: String,

    /// Optional project description rendered under the title
    pub description: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            title: "Changelog".to_string(),
            description: None,
        }
    }
}

/// Settings controlling which commits and tags enter the changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Revision the commit walk starts from (anything git rev-parse accepts)
    pub rev: String,

    /// Glob pattern selecting release tags
    pub tag_pattern: String,

    /// Branch name globs a commit must be contained in
    pub include_branches: Vec<String>,

    /// Branch name globs that disqualify a commit
    pub exclude_branches: Vec<String>,

    /// Keep commits newer than the latest tag in an "Unreleased" section
    pub keep_unreleased: bool,
}

impl Default for TraversalConfig {
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

/// Changelog rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Commit types to include, keyed by conventional type
    #[serde(default)]
    pub types: HashMap<String, CommitTypeConfig>,

    /// Whether to include commit hashes
    pub include_hashes: bool,

    /// Whether to include authors
    pub include_authors: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        let mut types = HashMap::new();
        types.insert(
            "feat".to_string(),
            CommitTypeConfig {
                section: "Features".to_string(),
                hidden: false,
            },
        );
        types.insert(
            "fix".to_string(),
            CommitTypeConfig {
                section: "Bug Fixes".to_string(),
                hidden: false,
            },
        );
        types.insert(
            "docs".to_string(),
            CommitTypeConfig {
                section: "Documentation".to_string(),
                hidden: false,
            },
        );
        types.insert(
            "perf".to_string(),
            CommitTypeConfig {
                section: "Performance".to_string(),
                hidden: false,
            },
        );
        types.insert(
            "refactor".to_string(),
            CommitTypeConfig {
                section: "Refactoring".to_string(),
                hidden: true,
            },
        );
        types.insert(
            "style".to_string(),
            CommitTypeConfig {
                section: "Styles".to_string(),
                hidden: true,
            },
        );
        types.insert(
            "test".to_string(),
            CommitTypeConfig {
                section: "Tests".to_string(),
                hidden: true,
            },
        );
        types.insert(
            "build".to_string(),
            CommitTypeConfig {
                section: "Build System".to_string(),
                hidden: true,
            },
        );
        types.insert(
            "ci".to_string(),
            CommitTypeConfig {
                section: "Continuous Integration".to_string(),
                hidden: true,
            },
        );
        types.insert(
            "chore".to_string(),
            CommitTypeConfig {
                section: "Chores".to_string(),
                hidden: true,
            },
        );

        Self {
            file: PathBuf::from("CHANGELOG.md"),
            types,
            include_hashes: true,
            include_authors: false,
        }
    }
}

/// Per-commit-type rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitTypeConfig {
    /// Section title used in the changelog
    pub section: String,

    /// Whether commits of this type are omitted from output
    #[serde(default)]
    pub hidden: bool,
}
