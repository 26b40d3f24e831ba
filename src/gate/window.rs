//! Lookback window over merge timestamps.

use chrono::{DateTime, Days, Utc};

/// Trailing period within which merged pull requests are considered.
///
/// Membership is strict: a merge at exactly `period_start` falls outside the
/// window.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use cheergate::gate::window::LookbackWindow;
///
/// let now = Utc::now();
/// let window = LookbackWindow::ending_at(now, 7);
/// assert!(window.contains(now - Duration::days(3)));
/// assert!(!window.contains(now - Duration::days(8)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackWindow {
    period_start: DateTime<Utc>,
}

impl LookbackWindow {
    /// Computes the window ending at `now` by calendar-day subtraction.
    ///
    /// Saturates to the minimum representable timestamp if the subtraction
    /// would underflow.
    #[must_use]
    pub fn ending_at(now: DateTime<Utc>, days: u32) -> Self {
        let period_start = now
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { period_start }
    }

    /// Start of the window (exclusive).
    #[must_use]
    pub const fn period_start(&self) -> DateTime<Utc> {
        self.period_start
    }

    /// Returns true when `merged_at` is strictly later than the window start.
    #[must_use]
    pub fn contains(&self, merged_at: DateTime<Utc>) -> bool {
        merged_at > self.period_start
    }
}
