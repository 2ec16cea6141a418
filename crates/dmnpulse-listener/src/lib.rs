//! dmnpulse listener library entry.
//!
//! This crate wires the metric registry, the tracked-decision table, the
//! configuration layer, and the runtime listener into a cohesive stack. It is
//! intended to be consumed by embedding applications, by the replay binary
//! (`main.rs`), and by integration tests.

pub mod config;
pub mod listener;
pub mod metrics;
pub mod tracked;

pub use listener::DecisionMetricsListener;
pub use metrics::{Histogram, HistogramSpec, MetricRegistry};
