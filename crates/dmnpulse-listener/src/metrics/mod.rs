//! In-process histogram collectors and the process-wide registry.
//!
//! Collectors are stored as atomics keyed by ordered label-value vectors and
//! rendered on demand in Prometheus text format; nothing here owns a network
//! endpoint. Registration is name-keyed and idempotent so any number of
//! listener constructions converge on one collector per metric.

pub mod collector;
pub mod registry;

pub use collector::{Histogram, HistogramSpec};
pub use registry::MetricRegistry;
