//! Message classification
//!
//! Parses commit messages following the conventional commit format:
//! `type(scope): subject`, an optional body, and an optional
//! `BREAKING CHANGE:` footer paragraph.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::CommitCategory;

/// Regex for the conventional header line
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[a-zA-Z]+)(?:\((?P<scope>[^)]+)\))?(?P<breaking>!)?: (?P<subject>.+)$")
        .expect("Invalid regex")
});

/// Marker opening a breaking-change paragraph in the body (line-anchored,
/// case-sensitive)
const BREAKING_MARKER: &str = "BREAKING CHANGE:";

/// The structured result of classifying one raw commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Category, `None` when the header fails the grammar
    pub category: Option<CommitCategory>,
    /// Scope token from the header
    pub scope: Option<String>,
    /// Header subject; the full raw message when unclassified
    pub subject: String,
    /// Lines after the header
    pub body: String,
    /// Breaking-change flag
    pub breaking: bool,
    /// Note captured from the `BREAKING CHANGE:` paragraph
    pub breaking_note: Option<String>,
}

/// Classify a raw commit message.
///
/// Pure and total: malformed input degrades to a `None` category with the
/// full raw message as subject instead of failing. The category vocabulary
/// is matched case-sensitively.
pub fn classify(raw: &str) -> Classification {
    let mut lines = raw.lines();
    let header = lines.next().unwrap_or("");
    let body = lines.collect::<Vec<_>>().join("\n");
    let body = body.trim_start_matches('\n').to_string();

    let (breaking_in_body, breaking_note) = scan_breaking(&body);

    let parsed = HEADER_REGEX.captures(header).and_then(|caps| {
        let category = caps.name("type")?.as_str().parse::<CommitCategory>().ok()?;
        let scope = caps.name("scope").map(|m| m.as_str().to_string());
        let marker = caps.name("breaking").is_some();
        let subject = caps.name("subject")?.as_str().to_string();
        Some((category, scope, marker, subject))
    });

    match parsed {
        Some((category, scope, marker, subject)) => Classification {
            category: Some(category),
            scope,
            subject,
            body,
            breaking: marker || breaking_in_body,
            breaking_note,
        },
        None => Classification {
            category: None,
            scope: None,
            subject: raw.to_string(),
            body,
            breaking: breaking_in_body,
            breaking_note,
        },
    }
}

/// Find a `BREAKING CHANGE:` paragraph in the body.
///
/// Returns the flag and the note: the remainder of the marker line plus the
/// following lines of the same paragraph.
fn scan_breaking(body: &str) -> (bool, Option<String>) {
    let mut lines = body.lines();

    while let Some(line) = lines.next() {
        let Some(rest) = line.strip_prefix(BREAKING_MARKER) else {
            continue;
        };

        let mut note_lines = vec![rest.trim().to_string()];
        for continuation in lines.by_ref() {
            if continuation.trim().is_empty() {
                break;
            }
            note_lines.push(continuation.trim().to_string());
        }

        let note = note_lines.join("\n").trim().to_string();
        let note = if note.is_empty() { None } else { Some(note) };
        return (true, note);
    }

    (false, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_simple_feat() {
        let c = classify("feat: add new feature");
        assert_eq!(c.category, Some(CommitCategory::Feat));
        assert_eq!(c.subject, "add new feature");
        assert!(c.scope.is_none());
        assert!(!c.breaking);
        assert!(c.body.is_empty());
    }

    #[test]
    fn test_classify_with_scope() {
        let c = classify("fix(parser): handle edge case");
        assert_eq!(c.category, Some(CommitCategory::Fix));
        assert_eq!(c.scope.as_deref(), Some("parser"));
        assert_eq!(c.subject, "handle edge case");
    }

    #[test]
    fn test_classify_breaking_marker() {
        let c = classify("refactor(core)!: major refactoring");
        assert_eq!(c.category, Some(CommitCategory::Refactor));
        assert_eq!(c.scope.as_deref(), Some("core"));
        assert!(c.breaking);
        assert!(c.breaking_note.is_none());
    }

    #[test]
    fn test_classify_breaking_change_footer() {
        let c = classify("fix(parser): handle empty input\n\nBREAKING CHANGE: drops legacy mode");
        assert_eq!(c.category, Some(CommitCategory::Fix));
        assert_eq!(c.scope.as_deref(), Some("parser"));
        assert_eq!(c.subject, "handle empty input");
        assert!(c.breaking);
        assert_eq!(c.breaking_note.as_deref(), Some("drops legacy mode"));
    }

    #[test]
    fn test_breaking_note_spans_paragraph() {
        let c = classify(
            "feat: new api\n\nBREAKING CHANGE: the old endpoint\nis gone for good\n\ntrailing text",
        );
        assert!(c.breaking);
        assert_eq!(
            c.breaking_note.as_deref(),
            Some("the old endpoint\nis gone for good")
        );
    }

    #[test]
    fn test_breaking_marker_is_line_anchored() {
        let c = classify("feat: new api\n\nthis mentions BREAKING CHANGE: mid-line");
        assert!(!c.breaking);
        assert!(c.breaking_note.is_none());
    }

    #[test]
    fn test_breaking_marker_is_case_sensitive() {
        let c = classify("feat: new api\n\nbreaking change: not really");
        assert!(!c.breaking);
    }

    #[test]
    fn test_classify_non_conventional() {
        let raw = "Just a regular commit message";
        let c = classify(raw);
        assert!(c.category.is_none());
        assert_eq!(c.subject, raw);
    }

    #[test]
    fn test_classify_unknown_type() {
        let raw = "wip: still hacking";
        let c = classify(raw);
        assert!(c.category.is_none());
        assert_eq!(c.subject, raw);
    }

    #[test]
    fn test_vocabulary_is_case_sensitive() {
        let c = classify("Feat: add new feature");
        assert!(c.category.is_none());
        assert_eq!(c.subject, "Feat: add new feature");
    }

    #[test]
    fn test_empty_scope_does_not_classify() {
        let c = classify("fix(): something");
        assert!(c.category.is_none());
    }

    #[test]
    fn test_classify_with_body() {
        let c = classify("feat: add feature\n\nThis is the body\nwith two lines");
        assert_eq!(c.category, Some(CommitCategory::Feat));
        assert_eq!(c.body, "This is the body\nwith two lines");
    }

    #[test]
    fn test_classify_empty_message() {
        let c = classify("");
        assert!(c.category.is_none());
        assert_eq!(c.subject, "");
    }
}
