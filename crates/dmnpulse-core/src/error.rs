//! Shared error type across dmnpulse crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, DmnPulseError>;

/// Unified error type used by core and listener.
#[derive(Debug, Error)]
pub enum DmnPulseError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("invalid metric spec for {metric}: {reason}")]
    MetricSpec { metric: String, reason: String },
    #[error("label schema mismatch for {metric}: expected {expected} values, got {got}")]
    LabelSchema {
        metric: String,
        expected: usize,
        got: usize,
    },
}
