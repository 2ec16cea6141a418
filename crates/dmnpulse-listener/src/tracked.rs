//! Tracked-decision table.
//!
//! Centralizing decision and metric names here keeps the dispatch table and
//! the tests pointing at one definition.

/// Dynamic label names appended after the configured static prefix, in order.
pub const DYNAMIC_LABEL_NAMES: [&str; 2] = ["decision_model_name", "decision_model_namespace"];

pub const DECISION_CARDHOLDER_RISK_RATING: &str = "Cardholder Risk Rating";
pub const DECISION_DISPUTE_RISK_RATING: &str = "Dispute Risk Rating";
pub const DECISION_PROCESS_AUTOMATICALLY: &str = "Process Automatically";

pub const METRIC_CARDHOLDER_RISK_RATING: &str = "cardholder_risk_rating";
pub const METRIC_DISPUTE_RISK_RATING: &str = "dispute_risk_rating";
pub const METRIC_PROCESS_AUTOMATICALLY: &str = "process_automatically";

const RATING_BUCKETS: &[f64] = &[1.0, 2.0, 3.0, 4.0, 5.0];
const BINARY_BUCKETS: &[f64] = &[0.0, 1.0];

/// Static binding of one decision name to its collector shape.
///
/// Each entry carries its own bucket layout; nothing requires the tracked
/// metrics to share one.
#[derive(Debug, Clone, Copy)]
pub struct TrackedSpec {
    /// Decision name as surfaced by the runtime. Exact, case-sensitive match.
    pub decision_name: &'static str,
    /// Metric name the observations are recorded under.
    pub metric_name: &'static str,
    /// Help text for the rendered output.
    pub help: &'static str,
    /// Bucket upper bounds for this decision's value range.
    pub buckets: &'static [f64],
}

/// The three decisions this listener republishes.
pub const TRACKED_DECISIONS: [TrackedSpec; 3] = [
    TrackedSpec {
        decision_name: DECISION_CARDHOLDER_RISK_RATING,
        metric_name: METRIC_CARDHOLDER_RISK_RATING,
        help: "Cardholder risk rating",
        buckets: RATING_BUCKETS,
    },
    TrackedSpec {
        decision_name: DECISION_DISPUTE_RISK_RATING,
        metric_name: METRIC_DISPUTE_RISK_RATING,
        help: "Dispute risk rating",
        buckets: RATING_BUCKETS,
    },
    TrackedSpec {
        decision_name: DECISION_PROCESS_AUTOMATICALLY,
        metric_name: METRIC_PROCESS_AUTOMATICALLY,
        help: "Automatic processing outcome",
        buckets: BINARY_BUCKETS,
    },
];
