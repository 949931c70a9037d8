//! Changelog document assembly

use std::collections::HashMap;

use tracing::debug;

use chronicle_core::config::ChangelogConfig;

use crate::types::{Changelog, Commit, Release, Section, Unreleased};

/// Assemble the rendering document from traversal output.
///
/// Releases arrive in ascending tag order and are flipped to newest-first
/// for display.
pub fn build_changelog(
    title: impl Into<String>,
    description: Option<String>,
    mut releases: Vec<Release>,
    unreleased: Option<Unreleased>,
) -> Changelog {
    releases.reverse();

    Changelog {
        title: title.into(),
        description,
        unreleased,
        releases,
    }
}

/// Group one bucket's commits into titled sections, honoring the per-type
/// section names and hidden flags from config. Sections come back in a
/// stable display order.
pub fn sections(commits: &[Commit], config: &ChangelogConfig) -> Vec<Section> {
    let mut grouped: HashMap<&str, Section> = HashMap::new();

    for commit in commits {
        let Some(category) = commit.category else {
            continue;
        };

        let (section_title, hidden) = match config.types.get(category.as_str()) {
            Some(type_config) => (type_config.section.as_str(), type_config.hidden),
            None => (category.default_section(), category.is_hidden_by_default()),
        };

        if hidden {
            continue;
        }

        grouped
            .entry(category.as_str())
            .or_insert_with(|| Section::new(section_title))
            .commits
            .push(commit.clone());
    }

    let mut sections: Vec<Section> = grouped.into_values().collect();
    sections.sort_by(|a, b| {
        (display_order(&a.title), &a.title).cmp(&(display_order(&b.title), &b.title))
    });

    debug!(count = sections.len(), "built changelog sections");
    sections
}

/// Commits flagged as breaking, surfaced separately from their sections
pub fn breaking_changes(commits: &[Commit]) -> Vec<Commit> {
    commits.iter().filter(|c| c.breaking).cloned().collect()
}

fn display_order(section: &str) -> u8 {
    match section {
        "Features" => 0,
        "Bug Fixes" => 1,
        "Performance" => 2,
        "Documentation" => 3,
        _ => 99,
    }
}
