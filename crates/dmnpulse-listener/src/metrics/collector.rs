//! Histogram collector with a fixed label schema and fixed buckets.
//!
//! Series are keyed by ordered label-value vectors backed by `DashMap`, so
//! concurrent `observe` calls never lock the whole collector. The f64 sum is
//! kept as raw bits in an `AtomicU64` and updated with a CAS loop.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use dmnpulse_core::{DmnPulseError, Result};

/// Helper to escape label values for text rendering.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Metric and label names share the Prometheus identifier shape.
pub fn is_valid_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Builder input for one histogram collector.
#[derive(Debug, Clone)]
pub struct HistogramSpec {
    /// Metric name.
    pub name: String,
    /// Help text for the rendered output.
    pub help: String,
    /// Ordered label-name schema. Every observation must supply exactly one
    /// value per name, in this order.
    pub label_names: Vec<String>,
    /// Ascending bucket upper bounds. `+Inf` is implicit.
    pub buckets: Vec<f64>,
}

impl HistogramSpec {
    fn validate(&self) -> Result<()> {
        if !is_valid_name(&self.name) {
            return Err(DmnPulseError::MetricSpec {
                metric: self.name.clone(),
                reason: "metric name must match [a-zA-Z_][a-zA-Z0-9_]*".into(),
            });
        }
        if self.buckets.is_empty() {
            return Err(DmnPulseError::MetricSpec {
                metric: self.name.clone(),
                reason: "buckets must not be empty".into(),
            });
        }
        let ascending = self
            .buckets
            .windows(2)
            .all(|w| w[0] < w[1]);
        if !ascending || self.buckets.iter().any(|b| !b.is_finite()) {
            return Err(DmnPulseError::MetricSpec {
                metric: self.name.clone(),
                reason: "buckets must be finite and strictly ascending".into(),
            });
        }
        for (i, name) in self.label_names.iter().enumerate() {
            if !is_valid_name(name) {
                return Err(DmnPulseError::MetricSpec {
                    metric: self.name.clone(),
                    reason: format!("invalid label name: {name:?}"),
                });
            }
            if self.label_names[..i].contains(name) {
                return Err(DmnPulseError::MetricSpec {
                    metric: self.name.clone(),
                    reason: format!("duplicate label name: {name}"),
                });
            }
        }
        Ok(())
    }
}

/// One label vector's accumulated state. Buckets are cumulative.
#[derive(Debug)]
struct Series {
    count: AtomicU64,
    sum_bits: AtomicU64,
    buckets: Vec<AtomicU64>,
}

impl Series {
    fn new(bucket_count: usize) -> Self {
        Self {
            count: AtomicU64::new(0),
            sum_bits: AtomicU64::new(0.0f64.to_bits()),
            buckets: (0..bucket_count).map(|_| AtomicU64::new(0)).collect(),
        }
    }

    fn record(&self, bounds: &[f64], value: f64) {
        self.count.fetch_add(1, Ordering::Relaxed);

        let mut cur = self.sum_bits.load(Ordering::Relaxed);
        loop {
            let next = (f64::from_bits(cur) + value).to_bits();
            match self
                .sum_bits
                .compare_exchange_weak(cur, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => break,
                Err(actual) => cur = actual,
            }
        }

        for (i, &b) in bounds.iter().enumerate() {
            if value <= b {
                self.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

/// A named histogram collector, created once and shared for the process
/// lifetime. Safe for concurrent observation from any number of threads.
#[derive(Debug)]
pub struct Histogram {
    name: String,
    help: String,
    label_names: Vec<String>,
    buckets: Vec<f64>,
    series: DashMap<Vec<String>, Series>,
}

impl Histogram {
    pub(crate) fn from_spec(spec: HistogramSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self {
            name: spec.name,
            help: spec.help,
            label_names: spec.label_names,
            buckets: spec.buckets,
            series: DashMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }

    pub fn buckets(&self) -> &[f64] {
        &self.buckets
    }

    /// Record one observation against a label vector.
    ///
    /// The label vector must match the declared schema in length and order;
    /// a mismatch is a deployment misconfiguration and is reported instead of
    /// being truncated or padded.
    pub fn observe(&self, label_values: &[&str], value: f64) -> Result<()> {
        if label_values.len() != self.label_names.len() {
            return Err(DmnPulseError::LabelSchema {
                metric: self.name.clone(),
                expected: self.label_names.len(),
                got: label_values.len(),
            });
        }
        let key: Vec<String> = label_values.iter().map(|v| v.to_string()).collect();
        let series = self
            .series
            .entry(key)
            .or_insert_with(|| Series::new(self.buckets.len()));
        series.record(&self.buckets, value);
        Ok(())
    }

    /// Observation count for one label vector (0 when the series is absent).
    pub fn sample_count(&self, label_values: &[&str]) -> u64 {
        let key: Vec<String> = label_values.iter().map(|v| v.to_string()).collect();
        self.series
            .get(&key)
            .map(|s| s.count.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Observation sum for one label vector (0.0 when the series is absent).
    pub fn sample_sum(&self, label_values: &[&str]) -> f64 {
        let key: Vec<String> = label_values.iter().map(|v| v.to_string()).collect();
        self.series
            .get(&key)
            .map(|s| f64::from_bits(s.sum_bits.load(Ordering::Relaxed)))
            .unwrap_or(0.0)
    }

    /// Total observation count across every series of this collector.
    pub fn total_count(&self) -> u64 {
        self.series
            .iter()
            .map(|s| s.value().count.load(Ordering::Relaxed))
            .sum()
    }

    /// Render in Prometheus text exposition format.
    pub(crate) fn render(&self, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", self.name, self.help);
        let _ = writeln!(out, "# TYPE {} histogram", self.name);
        for r in self.series.iter() {
            let label_str = self
                .label_names
                .iter()
                .zip(r.key())
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let prefix = if label_str.is_empty() {
                String::new()
            } else {
                format!("{label_str},")
            };

            let series = r.value();
            for (i, &le) in self.buckets.iter().enumerate() {
                let count = series.buckets[i].load(Ordering::Relaxed);
                let _ = writeln!(out, "{}_bucket{{{}le=\"{}\"}} {}", self.name, prefix, le, count);
            }
            let count = series.count.load(Ordering::Relaxed);
            let _ = writeln!(out, "{}_bucket{{{}le=\"+Inf\"}} {}", self.name, prefix, count);

            let sum = f64::from_bits(series.sum_bits.load(Ordering::Relaxed));
            let _ = writeln!(out, "{}_sum{{{}}} {}", self.name, label_str, sum);
            let _ = writeln!(out, "{}_count{{{}}} {}", self.name, label_str, count);
        }
    }
}
