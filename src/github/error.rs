//! Error types exposed by the GitHub access layer.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while resolving configuration or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The provided repository URL could not be parsed.
    #[error("repository URL is invalid: {0}")]
    InvalidUrl(String),

    /// The repository identifier is incomplete.
    #[error("repository must be identified as <owner>/<repo>")]
    MissingPathSegments,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or resolved.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if available from response headers.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },
}
