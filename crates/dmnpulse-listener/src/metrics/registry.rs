//! Name-keyed registry with resolve-or-create semantics.

use std::sync::{Arc, OnceLock};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use dmnpulse_core::{DmnPulseError, Result};

use super::collector::{Histogram, HistogramSpec};

/// Process-wide collector registry.
///
/// A given metric name maps to exactly one collector instance no matter how
/// many listeners are constructed against the registry, including
/// concurrently. Share via `Arc`; the registry outlives any listener.
#[derive(Default)]
pub struct MetricRegistry {
    metrics: DashMap<String, Arc<Histogram>>,
}

impl MetricRegistry {
    pub fn new() -> Self {
        Self {
            metrics: DashMap::new(),
        }
    }

    /// The ambient process-wide instance, created on first access.
    ///
    /// Nothing inside this crate reaches for it implicitly; embedders that
    /// want one registry across independently constructed listeners can pass
    /// it in explicitly.
    pub fn global() -> &'static Arc<MetricRegistry> {
        static GLOBAL: OnceLock<Arc<MetricRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(MetricRegistry::new()))
    }

    /// Return the collector registered under `spec.name`, creating it first
    /// if absent.
    ///
    /// An already-registered collector is authoritative: the incoming spec's
    /// help text and buckets are ignored. A disagreement in label schema is
    /// the exception and surfaces as an error; a collector whose schema
    /// differs from what the caller will feed it would corrupt every later
    /// observation.
    pub fn resolve_or_create(&self, spec: HistogramSpec) -> Result<Arc<Histogram>> {
        match self.metrics.entry(spec.name.clone()) {
            Entry::Occupied(e) => {
                let existing = Arc::clone(e.get());
                if existing.label_names() != spec.label_names.as_slice() {
                    return Err(DmnPulseError::MetricSpec {
                        metric: spec.name,
                        reason: "already registered with a different label schema".into(),
                    });
                }
                tracing::debug!(metric = %existing.name(), "reusing registered collector");
                Ok(existing)
            }
            Entry::Vacant(v) => {
                let created = Arc::new(Histogram::from_spec(spec)?);
                v.insert(Arc::clone(&created));
                tracing::debug!(metric = %created.name(), "registered new collector");
                Ok(created)
            }
        }
    }

    /// Look up a collector by metric name.
    pub fn get(&self, name: &str) -> Option<Arc<Histogram>> {
        self.metrics.get(name).map(|r| Arc::clone(r.value()))
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Render every registered collector in Prometheus text format.
    ///
    /// Output is ordered by metric name so snapshots are deterministic.
    pub fn render(&self) -> String {
        let mut names: Vec<String> = self.metrics.iter().map(|r| r.key().clone()).collect();
        names.sort();

        let mut out = String::new();
        for name in names {
            if let Some(h) = self.metrics.get(&name) {
                h.render(&mut out);
            }
        }
        out
    }
}
