//! Parsed gate settings built from raw configuration strings.
//!
//! Configuration keeps `days` and `bypass_mode` as raw strings so every
//! source (CLI, environment, file) shares one explicit parse step. Invalid or
//! missing values fall back to the defaults here, once, at startup.

use crate::config::CheergateConfig;

/// Default lookback window in days.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

/// Immutable per-run gate settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateSettings {
    days: u32,
    bypass: bool,
}

impl GateSettings {
    /// Parses settings from the loaded configuration.
    ///
    /// `days` must be a positive integer; anything else falls back to
    /// [`DEFAULT_LOOKBACK_DAYS`]. `bypass_mode` is compared
    /// case-insensitively to `"true"`; any other value disables bypass.
    #[must_use]
    pub fn from_config(config: &CheergateConfig) -> Self {
        Self {
            days: parse_days(config.days.as_deref()),
            bypass: parse_bypass(config.bypass_mode.as_deref()),
        }
    }

    /// Lookback window size in days.
    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Whether a failing gate is downgraded to a warning.
    #[must_use]
    pub const fn bypass(&self) -> bool {
        self.bypass
    }
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            days: DEFAULT_LOOKBACK_DAYS,
            bypass: false,
        }
    }
}

fn parse_days(raw: Option<&str>) -> u32 {
    let Some(value) = raw else {
        return DEFAULT_LOOKBACK_DAYS;
    };
    match value.trim().parse::<u32>() {
        Ok(days) if days > 0 => days,
        _ => {
            tracing::warn!(
                "lookback days input '{value}' is not a positive integer; \
                 using {DEFAULT_LOOKBACK_DAYS}"
            );
            DEFAULT_LOOKBACK_DAYS
        }
    }
}

fn parse_bypass(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
}
