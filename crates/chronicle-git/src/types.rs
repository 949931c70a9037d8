//! Git types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Information about a git commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit hash (full)
    pub hash: String,
    /// Short hash (first 7 characters)
    pub short_hash: String,
    /// Commit message (first line)
    pub message: String,
    /// Full commit message body
    pub body: Option<String>,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Committed timestamp
    pub timestamp: DateTime<Utc>,
}

impl CommitInfo {
    /// Create a new CommitInfo
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        author_email: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let hash = hash.into();
        let short_hash = hash.chars().take(7).collect();

        Self {
            hash,
            short_hash,
            message: message.into(),
            body: None,
            author: author.into(),
            author_email: author_email.into(),
            timestamp,
        }
    }

    /// Set the commit body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = if body.is_empty() { None } else { Some(body) };
        self
    }

    /// Get the full message including body
    pub fn full_message(&self) -> String {
        match &self.body {
            Some(body) => format!("{}\n\n{}", self.message, body),
            None => self.message.clone(),
        }
    }
}

/// Information about a git tag, anchored to the commit it points to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagInfo {
    /// Tag name
    pub name: String,
    /// The commit the tag resolves to (annotated tags are peeled)
    pub target: CommitInfo,
}

impl TagInfo {
    /// Create a new TagInfo
    pub fn new(name: impl Into<String>, target: CommitInfo) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }

    /// Committed timestamp of the anchor commit
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.target.timestamp
    }
}

/// A branch that contains a given commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRef {
    /// Branch name as git reports it (`main`, `origin/main`)
    pub name: String,
    /// Whether this is a remote-tracking branch
    pub remote: bool,
}

impl BranchRef {
    /// Create a local branch reference
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remote: false,
        }
    }

    /// Create a remote-tracking branch reference
    pub fn remote(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remote: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_info() {
        let commit = CommitInfo::new(
            "abc1234567890",
            "feat: add feature",
            "Author",
            "author@example.com",
            Utc::now(),
        );
        assert_eq!(commit.short_hash, "abc1234");
        assert_eq!(commit.message, "feat: add feature");
        assert_eq!(commit.full_message(), "feat: add feature");
    }

    #[test]
    fn test_full_message_with_body() {
        let commit = CommitInfo::new(
            "abc1234567890",
            "fix: handle empty input",
            "Author",
            "author@example.com",
            Utc::now(),
        )
        .with_body("BREAKING CHANGE: drops legacy mode");

        assert_eq!(
            commit.full_message(),
            "fix: handle empty input\n\nBREAKING CHANGE: drops legacy mode"
        );
    }

    #[test]
    fn test_empty_body_is_none() {
        let commit = CommitInfo::new(
            "abc1234567890",
            "chore: tidy",
            "Author",
            "author@example.com",
            Utc::now(),
        )
        .with_body("");
        assert!(commit.body.is_none());
    }
}
