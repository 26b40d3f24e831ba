//! Gate evaluation over fetched closed pull requests.
//!
//! The evaluator is a pure filter: it never performs I/O and never signals a
//! policy failure through `Err`. Policy outcomes are a typed result that the
//! outermost boundary maps to the process exit status.

use crate::github::models::MergedPullRequest;

use super::settings::GateSettings;
use super::sentiment::SentimentPolicy;
use super::window::LookbackWindow;

/// Filters closed pull requests down to those that satisfy the gate.
pub struct GateEvaluator<'policy> {
    policy: &'policy SentimentPolicy,
    window: LookbackWindow,
}

impl<'policy> GateEvaluator<'policy> {
    /// Creates an evaluator over the given policy and window.
    #[must_use]
    pub const fn new(policy: &'policy SentimentPolicy, window: LookbackWindow) -> Self {
        Self { policy, window }
    }

    /// Evaluates the fetched closed pull requests.
    ///
    /// Records without a merge timestamp are dropped, as are merges at or
    /// before the window start. Of the remainder, a record qualifies when its
    /// title carries at least one allow-listed emoji.
    #[must_use]
    pub fn evaluate(&self, closed: Vec<MergedPullRequest>) -> GateReport {
        let mut total_merged = 0_usize;
        let mut qualifying = Vec::new();

        for pull_request in closed {
            let Some(merged_at) = pull_request.merged_at else {
                continue;
            };
            if !self.window.contains(merged_at) {
                continue;
            }
            total_merged += 1;
            if pull_request
                .title
                .as_deref()
                .is_some_and(|title| self.policy.qualifies(title))
            {
                qualifying.push(pull_request);
            }
        }

        GateReport {
            qualifying,
            total_merged,
        }
    }
}

/// Result of one evaluation pass.
///
/// `qualifying.len() <= total_merged` holds by construction: qualifying
/// records are drawn from the merged-in-window set that `total_merged`
/// counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    /// Merged-in-window pull requests whose titles carry a positive emoji.
    pub qualifying: Vec<MergedPullRequest>,
    /// Count of pull requests merged within the window.
    pub total_merged: usize,
}

impl GateReport {
    /// Number of qualifying pull requests.
    #[must_use]
    pub fn qualifying_count(&self) -> usize {
        self.qualifying.len()
    }

    /// Applies the outcome policy to this report.
    ///
    /// A non-empty qualifying set passes regardless of the bypass setting.
    /// An empty set produces the remediation message, downgraded to a
    /// warning when bypass is enabled.
    #[must_use]
    pub fn decide(self, settings: &GateSettings) -> GateOutcome {
        if !self.qualifying.is_empty() {
            return GateOutcome::Passed { report: self };
        }

        let message = remediation_message(settings.days());
        if settings.bypass() {
            GateOutcome::BypassWarning {
                report: self,
                message,
            }
        } else {
            GateOutcome::Failed {
                report: self,
                message,
            }
        }
    }
}

/// Terminal outcome of a gate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// At least one qualifying pull request was found.
    Passed {
        /// The evaluation report backing the outcome.
        report: GateReport,
    },
    /// No qualifying pull request, but bypass mode keeps the run green.
    BypassWarning {
        /// The evaluation report backing the outcome.
        report: GateReport,
        /// Remediation message, emitted as a warning.
        message: String,
    },
    /// No qualifying pull request; the run must fail.
    Failed {
        /// The evaluation report backing the outcome.
        report: GateReport,
        /// Remediation message, emitted as the failure reason.
        message: String,
    },
}

impl GateOutcome {
    /// Returns true when the outcome should fail the process.
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The evaluation report backing this outcome.
    #[must_use]
    pub const fn report(&self) -> &GateReport {
        match self {
            Self::Passed { report }
            | Self::BypassWarning { report, .. }
            | Self::Failed { report, .. } => report,
        }
    }
}

fn remediation_message(days: u32) -> String {
    format!(
        "❌ No PRs with positive emojis were merged in the last {days} days!\n\
         \n\
         Your team needs to create and merge a PR with a positive emoji in the title \
         to unblock deployments.\n\
         \n\
         Positive emoji examples: 😊 👍 🎉 ✨ ❤️\n\
         \n\
         Create a small PR (e.g., update documentation, add comments) with a positive \
         emoji in the title, get it reviewed and merged, and then retry this workflow."
    )
}
