//! Markdown changelog formatter

use chronicle_core::config::ChangelogConfig;
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::builder::{breaking_changes, sections};
use crate::types::{Changelog, Commit};

/// Markdown changelog formatter
pub struct MarkdownFormatter {
    /// Repository URL for commit links
    pub repo_url: Option<String>,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self { repo_url: None }
    }

    /// Set repository URL for links
    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    fn push_commit_line(&self, output: &mut String, commit: &Commit, config: &ChangelogConfig) {
        output.push_str(&format!("- {}", commit.subject));

        if let Some(scope) = &commit.scope {
            output.push_str(&format!(" ({})", scope));
        }

        if config.include_hashes {
            if let Some(repo_url) = &self.repo_url {
                output.push_str(&format!(
                    " ([{}]({}/commit/{}))",
                    commit.short_hash, repo_url, commit.hash
                ));
            } else {
                output.push_str(&format!(" ({})", commit.short_hash));
            }
        }

        if config.include_authors {
            output.push_str(&format!(" - {}", commit.author));
        }

        output.push('\n');
    }

    fn push_bucket(&self, output: &mut String, commits: &[Commit], config: &ChangelogConfig) {
        let breaking = breaking_changes(commits);
        if !breaking.is_empty() {
            output.push_str("### ⚠ BREAKING CHANGES\n\n");
            for commit in &breaking {
                output.push_str(&format!("- {}", commit.subject));
                if let Some(note) = &commit.breaking_note {
                    output.push_str(&format!(": {}", note.replace('\n', " ")));
                }
                output.push('\n');
            }
            output.push('\n');
        }

        for section in sections(commits, config) {
            if section.is_empty() {
                continue;
            }

            output.push_str(&format!("### {}\n\n", section.title));
            for commit in &section.commits {
                self.push_commit_line(output, commit, config);
            }
            output.push('\n');
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, changelog, config), fields(releases = changelog.releases.len()))]
    fn format(&self, changelog: &Changelog, config: &ChangelogConfig) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", changelog.title));

        if let Some(description) = &changelog.description {
            output.push_str(&format!("{}\n\n", description));
        }

        if let Some(unreleased) = &changelog.unreleased {
            output.push_str("## Unreleased\n\n");
            self.push_bucket(&mut output, &unreleased.commits, config);
        }

        for release in &changelog.releases {
            let date = release.timestamp.format("%Y-%m-%d");
            output.push_str(&format!("## {} - {}\n\n", release.tag, date));
            self.push_bucket(&mut output, &release.commits, config);
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
