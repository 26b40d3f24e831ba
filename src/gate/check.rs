//! High-level gate check facade used by the CLI.

use crate::github::error::GateError;
use crate::github::gateway::RepositoryGateway;
use crate::github::locator::RepositoryLocator;

use super::evaluator::{GateEvaluator, GateOutcome};
use super::sentiment::SentimentPolicy;
use super::settings::GateSettings;
use super::window::LookbackWindow;

/// Runs a full fetch-and-evaluate pass using a gateway.
pub struct GateCheck<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> GateCheck<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    /// Create a new gate check facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Fetches closed pull requests and evaluates them against the gate.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway, including GitHub
    /// authentication errors or network problems. A policy miss is not an
    /// error; it surfaces as [`GateOutcome::Failed`] or
    /// [`GateOutcome::BypassWarning`].
    pub async fn run(
        &self,
        locator: &RepositoryLocator,
        policy: &SentimentPolicy,
        window: LookbackWindow,
        settings: &GateSettings,
    ) -> Result<GateOutcome, GateError> {
        let closed = self.client.list_closed_pull_requests(locator).await?;
        let report = GateEvaluator::new(policy, window).evaluate(closed);
        Ok(report.decide(settings))
    }
}
