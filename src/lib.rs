//! Cheergate library crate providing the positive-emoji merge gate.
//!
//! The library wraps Octocrab to list recently closed pull requests, filters
//! them through a lookback window and an emoji sentiment policy, and
//! produces a typed pass/warn/fail outcome that the CLI maps to a process
//! exit status.

pub mod config;
pub mod gate;
pub mod github;
pub mod report;

pub use config::CheergateConfig;
pub use gate::{
    DEFAULT_LOOKBACK_DAYS, GateCheck, GateEvaluator, GateOutcome, GateReport, GateSettings,
    LookbackWindow, SentimentPolicy,
};
pub use github::{
    GateError, MergedPullRequest, OctocrabGateway, PersonalAccessToken, RateLimitInfo,
    RepositoryGateway, RepositoryLocator,
};
