//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use chronicle_core::config::ChangelogConfig;

use crate::types::Changelog;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format a changelog document to string
    fn format(&self, changelog: &Changelog, config: &ChangelogConfig) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
