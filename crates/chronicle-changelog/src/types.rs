//! Changelog types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chronicle_git::{CommitInfo, TagInfo};

use crate::classify::classify;

/// Commit category vocabulary
///
/// Matching against a raw message is case-sensitive: `Feat` or `FIX` do
/// not classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitCategory {
    /// New feature
    Feat,
    /// Bug fix
    Fix,
    /// Documentation
    Docs,
    /// Code style (formatting, etc.)
    Style,
    /// Refactoring
    Refactor,
    /// Performance improvement
    Perf,
    /// Tests
    Test,
    /// Chores (maintenance)
    Chore,
    /// Build system
    Build,
    /// CI configuration
    Ci,
}

impl CommitCategory {
    /// The lowercase token as it appears in commit headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Build => "build",
            Self::Ci => "ci",
        }
    }

    /// Get the default section title for this category
    pub fn default_section(&self) -> &'static str {
        match self {
            Self::Feat => "Features",
            Self::Fix => "Bug Fixes",
            Self::Docs => "Documentation",
            Self::Style => "Styles",
            Self::Refactor => "Refactoring",
            Self::Perf => "Performance",
            Self::Test => "Tests",
            Self::Chore => "Chores",
            Self::Build => "Build System",
            Self::Ci => "Continuous Integration",
        }
    }

    /// Check if this category should be hidden by default
    pub fn is_hidden_by_default(&self) -> bool {
        matches!(
            self,
            Self::Style | Self::Refactor | Self::Test | Self::Build | Self::Ci | Self::Chore
        )
    }
}

impl std::str::FromStr for CommitCategory {
    type Err = ();

    // Case-sensitive on purpose
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feat" => Ok(Self::Feat),
            "fix" => Ok(Self::Fix),
            "docs" => Ok(Self::Docs),
            "style" => Ok(Self::Style),
            "refactor" => Ok(Self::Refactor),
            "perf" => Ok(Self::Perf),
            "test" => Ok(Self::Test),
            "chore" => Ok(Self::Chore),
            "build" => Ok(Self::Build),
            "ci" => Ok(Self::Ci),
            _ => Err(()),
        }
    }
}

/// An immutable, classified commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// Commit hash (full)
    pub hash: String,
    /// Short hash (first 7 characters)
    pub short_hash: String,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Committed timestamp
    pub timestamp: DateTime<Utc>,
    /// Category, `None` when the message fails the classification grammar
    pub category: Option<CommitCategory>,
    /// Scope (optional, in parentheses)
    pub scope: Option<String>,
    /// Subject line; the full raw message for unclassified commits
    pub subject: String,
    /// Message body (lines after the header)
    pub body: String,
    /// Whether this is a breaking change
    pub breaking: bool,
    /// Breaking-change note captured from the body
    pub breaking_note: Option<String>,
}

impl Commit {
    /// Classify a raw commit into an immutable record
    pub fn from_info(info: &CommitInfo) -> Self {
        let classification = classify(&info.full_message());

        Self {
            hash: info.hash.clone(),
            short_hash: info.short_hash.clone(),
            author: info.author.clone(),
            author_email: info.author_email.clone(),
            timestamp: info.timestamp,
            category: classification.category,
            scope: classification.scope,
            subject: classification.subject,
            body: classification.body,
            breaking: classification.breaking,
            breaking_note: classification.breaking_note,
        }
    }

    /// Whether the message matched the classification grammar
    pub fn is_classified(&self) -> bool {
        self.category.is_some()
    }
}

/// A release: a tag and the commit bucket the grouping engine assigned to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Tag name
    pub tag: String,
    /// Hash of the tag's anchor commit
    pub anchor_hash: String,
    /// Committed timestamp of the anchor commit
    pub timestamp: DateTime<Utc>,
    /// Commits in this release, sorted ascending by timestamp
    pub commits: Vec<Commit>,
}

impl Release {
    /// Create an empty release for a tag
    pub fn new(tag: &TagInfo) -> Self {
        Self {
            tag: tag.name.clone(),
            anchor_hash: tag.target.hash.clone(),
            timestamp: tag.timestamp(),
            commits: Vec::new(),
        }
    }
}

/// Commits newer than the latest release boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unreleased {
    /// Commits not yet associated with any tag, sorted ascending by timestamp
    pub commits: Vec<Commit>,
}

impl Unreleased {
    /// Wrap leftover commits
    pub fn new(commits: Vec<Commit>) -> Self {
        Self { commits }
    }
}

/// The full changelog document handed to rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Changelog {
    /// Changelog title
    pub title: String,
    /// Optional project description
    pub description: Option<String>,
    /// Unreleased commits, present only when retention is enabled and
    /// leftovers exist
    pub unreleased: Option<Unreleased>,
    /// Releases, newest first
    pub releases: Vec<Release>,
}

/// A titled group of commits within one release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title
    pub title: String,
    /// Commits in this section
    pub commits: Vec<Commit>,
}

impl Section {
    /// Create a new section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            commits: Vec::new(),
        }
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_category_from_str() {
        assert_eq!("feat".parse::<CommitCategory>(), Ok(CommitCategory::Feat));
        assert_eq!("fix".parse::<CommitCategory>(), Ok(CommitCategory::Fix));
        assert!("unknown".parse::<CommitCategory>().is_err());
    }

    #[test]
    fn test_category_is_case_sensitive() {
        assert!("Feat".parse::<CommitCategory>().is_err());
        assert!("FIX".parse::<CommitCategory>().is_err());
    }

    #[test]
    fn test_commit_from_info() {
        let info = CommitInfo::new(
            "abc1234567890",
            "fix(parser): handle empty input",
            "Test",
            "test@example.com",
            Utc.timestamp_opt(1000, 0).unwrap(),
        );

        let commit = Commit::from_info(&info);
        assert_eq!(commit.category, Some(CommitCategory::Fix));
        assert_eq!(commit.scope.as_deref(), Some("parser"));
        assert_eq!(commit.subject, "handle empty input");
        assert!(commit.is_classified());
    }

    #[test]
    fn test_unclassified_commit_keeps_raw_subject() {
        let info = CommitInfo::new(
            "abc1234567890",
            "Merge branch 'develop'",
            "Test",
            "test@example.com",
            Utc.timestamp_opt(1000, 0).unwrap(),
        );

        let commit = Commit::from_info(&info);
        assert!(commit.category.is_none());
        assert_eq!(commit.subject, "Merge branch 'develop'");
    }
}
