//! Gateway for listing closed pull requests through Octocrab.
//!
//! The gate needs exactly one outbound call: the first page of closed pull
//! requests for the target repository, most recently updated first. The
//! trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests and maps failures into
//! user-friendly [`GateError`] variants.

use async_trait::async_trait;
use http::{StatusCode, Uri};
use octocrab::{Octocrab, Page};

use super::error::GateError;
use super::locator::{PersonalAccessToken, RepositoryLocator};
use super::models::{ApiPullRequestSummary, MergedPullRequest};
use super::rate_limit::RateLimitInfo;

/// Fixed page size for the closed pull request listing.
///
/// Only the first page is fetched. Merged pull requests older than the most
/// recently updated 100 closed items are invisible to the gate regardless of
/// their merge date.
pub const CLOSED_LISTING_PAGE_SIZE: u8 = 100;

/// Builds an Octocrab client for the given token and API base URL.
///
/// # Errors
///
/// Returns `GateError::InvalidUrl` when the base URI cannot be parsed or
/// `GateError::Api` when Octocrab fails to construct a client.
fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, GateError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| GateError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| GateError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}

/// Gateway that can list closed pull requests for a repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Fetch the first page of closed pull requests, sorted by last update
    /// descending.
    async fn list_closed_pull_requests(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<MergedPullRequest>, GateError>;
}

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and repository locator.
    ///
    /// # Errors
    ///
    /// Returns `GateError::InvalidUrl` when the base URI cannot be parsed or
    /// `GateError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, GateError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }

    async fn map_octocrab_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> GateError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                let base_message =
                    format!("{operation} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!(
                        "{base_message} (resets at {reset})",
                        reset = info.reset_at()
                    ),
                    None => base_message,
                };

                GateError::RateLimitExceeded {
                    rate_limit,
                    message,
                }
            }
            _ => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let Ok(limit) = u32::try_from(rate.limit) else {
            return None;
        };
        let Ok(remaining) = u32::try_from(rate.remaining) else {
            return None;
        };
        Some(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}

#[async_trait]
impl RepositoryGateway for OctocrabGateway {
    async fn list_closed_pull_requests(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<MergedPullRequest>, GateError> {
        let per_page = CLOSED_LISTING_PAGE_SIZE.to_string();
        let query_params = [
            ("state", "closed"),
            ("sort", "updated"),
            ("direction", "desc"),
            ("page", "1"),
            ("per_page", per_page.as_str()),
        ];

        let fetched: Page<ApiPullRequestSummary> = match self
            .client
            .get(locator.pulls_path(), Some(&query_params))
            .await
        {
            Ok(first_page) => first_page,
            Err(error) => {
                return Err(self
                    .map_octocrab_error_with_rate_limit("list closed pulls", &error)
                    .await);
            }
        };

        Ok(fetched
            .items
            .into_iter()
            .map(ApiPullRequestSummary::into)
            .collect())
    }
}

// --- Error mapping helpers ---

/// Checks if a GitHub error status indicates an authentication failure.
const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> GateError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return if is_auth_failure(source.status_code) {
            GateError::Authentication {
                message: format!(
                    "{operation} failed: GitHub returned {status} {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        } else {
            GateError::Api {
                message: format!(
                    "{operation} failed with status {status}: {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        };
    }

    if is_network_error(error) {
        return GateError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    GateError::Api {
        message: format!("{operation} failed: {error}"),
    }
}
