//! Gate evaluation: settings, sentiment policy, lookback window, and the
//! typed outcome.
//!
//! The evaluator itself is exception-free: it consumes fetched pull request
//! records and produces a [`GateOutcome`] that the binary maps to the process
//! exit status. Only the gateway fetch can fail with a [`crate::GateError`].

pub mod check;
pub mod evaluator;
pub mod sentiment;
pub mod settings;
pub mod window;

pub use check::GateCheck;
pub use evaluator::{GateEvaluator, GateOutcome, GateReport};
pub use sentiment::SentimentPolicy;
pub use settings::{DEFAULT_LOOKBACK_DAYS, GateSettings};
pub use window::LookbackWindow;
