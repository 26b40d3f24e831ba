//! Test helpers for constructing `MergedPullRequest` fixtures.
//!
//! These builders reduce boilerplate in evaluator and reporting tests, where
//! only the number, title, and merge timestamp usually matter.

use chrono::{DateTime, Duration, Utc};

use super::MergedPullRequest;

/// Constructs a merged pull request with the given number, title, and merge
/// timestamp.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use cheergate::github::models::test_support::merged_pr;
///
/// let pr = merged_pr(7, "Add tests ✅", Utc::now());
/// assert_eq!(pr.number, 7);
/// assert!(pr.merged_at.is_some());
/// ```
#[must_use]
pub fn merged_pr(number: u64, title: &str, merged_at: DateTime<Utc>) -> MergedPullRequest {
    MergedPullRequest {
        number,
        title: Some(title.to_owned()),
        state: Some("closed".to_owned()),
        merged_at: Some(merged_at),
        ..Default::default()
    }
}

/// Constructs a merged pull request merged a whole number of days before
/// `now`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use cheergate::github::models::test_support::merged_days_ago;
///
/// let now = Utc::now();
/// let pr = merged_days_ago(7, "Update docs 🎉", 3, now);
/// assert_eq!(pr.merged_at, Some(now - chrono::Duration::days(3)));
/// ```
#[must_use]
pub fn merged_days_ago(
    number: u64,
    title: &str,
    days: i64,
    now: DateTime<Utc>,
) -> MergedPullRequest {
    merged_pr(number, title, now - Duration::days(days))
}

/// Constructs a pull request that was closed without being merged.
///
/// # Examples
///
/// ```
/// use cheergate::github::models::test_support::closed_unmerged_pr;
///
/// let pr = closed_unmerged_pr(9, "Abandoned idea");
/// assert!(pr.merged_at.is_none());
/// ```
#[must_use]
pub fn closed_unmerged_pr(number: u64, title: &str) -> MergedPullRequest {
    MergedPullRequest {
        number,
        title: Some(title.to_owned()),
        state: Some("closed".to_owned()),
        merged_at: None,
        ..Default::default()
    }
}
