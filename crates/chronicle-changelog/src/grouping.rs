//! Tag grouping engine
//!
//! Partitions a classified commit set into per-release buckets plus the
//! leftover commits newer than the last release boundary.

use std::collections::HashSet;

use tracing::debug;

use chronicle_git::TagInfo;

use crate::types::{Commit, Release};

/// Group commits into per-tag release buckets.
///
/// Takes the candidate commits and the release tags, and returns the
/// releases in ascending tag order together with the leftover commits
/// newer than the last tag. The input is not mutated.
///
/// Bucket boundaries are half-open, upper-inclusive: a commit whose
/// timestamp equals a tag's anchor timestamp belongs to that tag, never
/// the next one. Tags sharing an anchor timestamp are ordered by name so
/// assignment stays deterministic. Unclassified commits are dropped.
///
/// Callers must reject the no-tags case before calling; with at least one
/// tag this function is total.
pub fn group_commits(tags: &[TagInfo], commits: &[Commit]) -> (Vec<Release>, Vec<Commit>) {
    let mut sorted_tags: Vec<&TagInfo> = tags.iter().collect();
    sorted_tags.sort_by(|a, b| {
        a.timestamp()
            .cmp(&b.timestamp())
            .then_with(|| a.name.cmp(&b.name))
    });

    // A tag's release commit is often not reachable as a "normal" commit
    // from the walked revision; inject each anchor once, skipping anchors
    // already in the candidate set.
    let mut candidates: Vec<Commit> = commits.to_vec();
    let mut seen: HashSet<String> = commits.iter().map(|c| c.hash.clone()).collect();
    for tag in &sorted_tags {
        if seen.insert(tag.target.hash.clone()) {
            candidates.push(Commit::from_info(&tag.target));
        }
    }

    candidates.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.hash.cmp(&b.hash))
    });
    candidates.retain(Commit::is_classified);

    let mut releases: Vec<Release> = sorted_tags.iter().map(|t| Release::new(t)).collect();
    let mut leftovers = Vec::new();

    // Single sweep: commits and tag boundaries are both time-sorted, so a
    // monotone index assigns every commit to its bucket.
    let mut idx = 0;
    for commit in candidates {
        while idx < releases.len() && commit.timestamp > releases[idx].timestamp {
            idx += 1;
        }
        match releases.get_mut(idx) {
            Some(release) => release.commits.push(commit),
            None => leftovers.push(commit),
        }
    }

    debug!(
        releases = releases.len(),
        leftovers = leftovers.len(),
        "grouped commits into release buckets"
    );
    (releases, leftovers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use chronicle_git::CommitInfo;

    fn commit_at(ts: i64, hash: &str, message: &str) -> Commit {
        Commit::from_info(&CommitInfo::new(
            hash,
            message,
            "Test",
            "test@example.com",
            Utc.timestamp_opt(ts, 0).unwrap(),
        ))
    }

    fn tag_at(ts: i64, name: &str, hash: &str) -> TagInfo {
        TagInfo::new(
            name,
            CommitInfo::new(
                hash,
                format!("chore: release {name}"),
                "Test",
                "test@example.com",
                Utc.timestamp_opt(ts, 0).unwrap(),
            ),
        )
    }

    #[test]
    fn test_partitioning_scenario() {
        // Tags v1@10, v2@20; classified commits at 5, 15, 20, 25.
        let tags = vec![tag_at(10, "v1", "t1"), tag_at(20, "v2", "t2")];
        let commits = vec![
            commit_at(5, "c5", "feat: five"),
            commit_at(15, "c15", "fix: fifteen"),
            commit_at(20, "c20", "feat: twenty"),
            commit_at(25, "c25", "fix: twenty-five"),
        ];

        let (releases, leftovers) = group_commits(&tags, &commits);

        assert_eq!(releases.len(), 2);
        let v1: Vec<_> = releases[0].commits.iter().map(|c| c.hash.as_str()).collect();
        let v2: Vec<_> = releases[1].commits.iter().map(|c| c.hash.as_str()).collect();

        // Anchor commits are injected, so each bucket also holds its tag's
        // release commit
        assert_eq!(v1, vec!["c5", "t1"]);
        assert_eq!(v2, vec!["c15", "c20", "t2"]);

        let left: Vec<_> = leftovers.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(left, vec!["c25"]);
    }

    #[test]
    fn test_partition_completeness() {
        let tags = vec![tag_at(10, "v1", "t1"), tag_at(20, "v2", "t2")];
        let commits = vec![
            commit_at(5, "c5", "feat: a"),
            commit_at(12, "c12", "not conventional"),
            commit_at(15, "c15", "fix: b"),
            commit_at(30, "c30", "feat: c"),
        ];

        let (releases, leftovers) = group_commits(&tags, &commits);

        let mut all: Vec<&str> = releases
            .iter()
            .flat_map(|r| r.commits.iter().map(|c| c.hash.as_str()))
            .chain(leftovers.iter().map(|c| c.hash.as_str()))
            .collect();
        all.sort_unstable();

        // Every classified commit lands in exactly one bucket; the
        // unclassified c12 lands in none
        assert_eq!(all, vec!["c15", "c30", "c5", "t1", "t2"]);
    }

    #[test]
    fn test_boundary_is_upper_inclusive() {
        let tags = vec![tag_at(10, "v1", "t1"), tag_at(20, "v2", "t2")];
        let commits = vec![commit_at(10, "c10", "feat: on the boundary")];

        let (releases, _) = group_commits(&tags, &commits);

        assert!(releases[0].commits.iter().any(|c| c.hash == "c10"));
        assert!(!releases[1].commits.iter().any(|c| c.hash == "c10"));
    }

    #[test]
    fn test_chronological_bucket_ordering() {
        let tags = vec![tag_at(10, "v1", "t1"), tag_at(20, "v2", "t2")];
        let commits = vec![
            commit_at(3, "c3", "feat: a"),
            commit_at(7, "c7", "fix: b"),
            commit_at(11, "c11", "feat: c"),
            commit_at(19, "c19", "fix: d"),
        ];

        let (releases, _) = group_commits(&tags, &commits);

        for release in &releases {
            let times: Vec<_> = release.commits.iter().map(|c| c.timestamp).collect();
            let mut sorted = times.clone();
            sorted.sort();
            assert_eq!(times, sorted);
            assert!(times.iter().all(|t| *t <= release.timestamp));
        }
        // Nothing in v2's bucket is old enough to belong to v1
        assert!(releases[1]
            .commits
            .iter()
            .all(|c| c.timestamp > releases[0].timestamp));
    }

    #[test]
    fn test_unclassified_commits_are_dropped() {
        let tags = vec![tag_at(10, "v1", "t1")];
        let commits = vec![commit_at(5, "c5", "random words about nothing")];

        let (releases, leftovers) = group_commits(&tags, &commits);

        assert!(releases[0].commits.iter().all(|c| c.hash != "c5"));
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_anchor_injection_deduplicates() {
        let tags = vec![tag_at(10, "v1", "t1")];
        // The anchor commit is already present in the candidate set
        let commits = vec![commit_at(10, "t1", "chore: release v1")];

        let (releases, _) = group_commits(&tags, &commits);

        assert_eq!(releases[0].commits.len(), 1);
    }

    #[test]
    fn test_equal_timestamp_tags_tie_break_by_name() {
        let tags = vec![tag_at(10, "v2", "t2"), tag_at(10, "v1", "t1")];
        let commits = vec![commit_at(5, "c5", "feat: before both")];

        let (releases, _) = group_commits(&tags, &commits);

        assert_eq!(releases[0].tag, "v1");
        assert_eq!(releases[1].tag, "v2");
        // The shared-boundary commit goes to the lexicographically first tag
        assert!(releases[0].commits.iter().any(|c| c.hash == "c5"));
        assert!(!releases[1].commits.iter().any(|c| c.hash == "c5"));
    }

    #[test]
    fn test_single_tag_everything_before_it() {
        let tags = vec![tag_at(100, "v1", "t1")];
        let commits = vec![
            commit_at(1, "c1", "feat: a"),
            commit_at(50, "c50", "fix: b"),
            commit_at(100, "c100", "feat: c"),
        ];

        let (releases, leftovers) = group_commits(&tags, &commits);

        assert_eq!(releases[0].commits.len(), 4);
        assert!(leftovers.is_empty());
    }
}
