//! Data models for closed pull requests returned by the listing call.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into public domain types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[cfg(feature = "test-support")]
pub mod test_support;

/// Closed pull request summary with the merge timestamp the gate filters on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedPullRequest {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
    /// State (e.g. open, closed).
    pub state: Option<String>,
    /// Author login if present.
    pub author: Option<String>,
    /// Merge timestamp; `None` for pull requests closed without merging.
    pub merged_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

/// API response type for the closed pull request listing.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequestSummary {
    pub(super) number: u64,
    pub(super) title: Option<String>,
    pub(super) state: Option<String>,
    pub(super) user: Option<ApiUser>,
    pub(super) merged_at: Option<DateTime<Utc>>,
    pub(super) updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

impl From<ApiPullRequestSummary> for MergedPullRequest {
    fn from(value: ApiPullRequestSummary) -> Self {
        Self {
            number: value.number,
            title: value.title,
            state: value.state,
            author: value.user.and_then(|user| user.login),
            merged_at: value.merged_at,
            updated_at: value.updated_at,
        }
    }
}
