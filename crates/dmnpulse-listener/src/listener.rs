//! The decision-evaluation metrics listener.

use std::sync::Arc;

use dmnpulse_core::event::AfterEvaluateDecisionEvent;
use dmnpulse_core::{DmnRuntimeEventListener, Result};

use crate::config::{ListenerConfig, StaticLabel};
use crate::metrics::{Histogram, HistogramSpec, MetricRegistry};
use crate::tracked::{DYNAMIC_LABEL_NAMES, TRACKED_DECISIONS};

/// Republishes tracked decision results as histogram observations.
///
/// One instance is typically constructed per loaded decision package; all
/// instances sharing a registry observe into the same collectors. The
/// listener owns no collector lifetime and keeps no per-event state, so the
/// runtime may drive it from any number of evaluation threads at once.
pub struct DecisionMetricsListener {
    static_values: Vec<String>,
    tracked: Vec<(&'static str, Arc<Histogram>)>,
}

impl DecisionMetricsListener {
    /// Build a listener, resolving its collectors against `registry`.
    ///
    /// `static_labels` is the ordered deployment-identity prefix (e.g.
    /// group/artifact/version of the decision model package); its names
    /// become the leading part of every collector's label schema. Invalid or
    /// colliding label names and any schema disagreement with an already
    /// registered collector surface here, before the first event arrives.
    pub fn new(registry: &MetricRegistry, static_labels: &[StaticLabel]) -> Result<Self> {
        let label_names: Vec<String> = static_labels
            .iter()
            .map(|l| l.name.clone())
            .chain(DYNAMIC_LABEL_NAMES.iter().map(|n| n.to_string()))
            .collect();

        let mut tracked = Vec::with_capacity(TRACKED_DECISIONS.len());
        for spec in TRACKED_DECISIONS {
            let collector = registry.resolve_or_create(HistogramSpec {
                name: spec.metric_name.to_string(),
                help: spec.help.to_string(),
                label_names: label_names.clone(),
                buckets: spec.buckets.to_vec(),
            })?;
            tracked.push((spec.decision_name, collector));
        }

        Ok(Self {
            static_values: static_labels.iter().map(|l| l.value.clone()).collect(),
            tracked,
        })
    }

    /// Build a listener from a validated configuration.
    pub fn from_config(registry: &MetricRegistry, cfg: &ListenerConfig) -> Result<Self> {
        cfg.validate()?;
        Self::new(registry, &cfg.static_labels)
    }

    fn collector_for(&self, decision_name: &str) -> Option<&Arc<Histogram>> {
        self.tracked
            .iter()
            .find(|(name, _)| *name == decision_name)
            .map(|(_, collector)| collector)
    }
}

impl DmnRuntimeEventListener for DecisionMetricsListener {
    fn after_evaluate_decision(&self, event: &AfterEvaluateDecisionEvent) {
        let decision = event.decision.name.as_str();

        let Some(collector) = self.collector_for(decision) else {
            tracing::debug!(%decision, "untracked decision, nothing to record");
            return;
        };

        let Some(result) = event.result.by_name(decision) else {
            tracing::debug!(%decision, "tracked decision has no result entry, dropping");
            return;
        };
        if result.has_errors {
            tracing::debug!(%decision, "tracked decision evaluated with errors, dropping");
            return;
        }

        let value = result.value.observation_value();

        let mut labels: Vec<&str> = self.static_values.iter().map(String::as_str).collect();
        labels.push(event.decision.model.name.as_str());
        labels.push(event.decision.model.namespace.as_str());

        // Label arity is fixed at construction; if observe still fails, the
        // error stops here. Nothing may raise back into the runtime.
        if let Err(error) = collector.observe(&labels, value) {
            tracing::error!(%decision, metric = %collector.name(), %error, "observation dropped");
        }
    }
}
