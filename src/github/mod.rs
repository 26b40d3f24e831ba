//! GitHub repository access for the gate check.
//!
//! This module wraps Octocrab to identify the target repository, validate
//! personal access tokens, and list recently closed pull requests. Errors are
//! mapped into user-friendly variants so that callers can surface precise
//! failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod rate_limit;

pub use error::GateError;
pub use gateway::{CLOSED_LISTING_PAGE_SIZE, OctocrabGateway, RepositoryGateway};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::MergedPullRequest;
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::MockRepositoryGateway;
