//! dmnpulse replay driver.
//!
//! Loads a listener config, constructs the listener against a fresh registry,
//! replays a captured JSON array of after-decision events through it, and
//! prints the registry snapshot. Useful for eyeballing label composition and
//! bucket layout without a live decision runtime:
//!
//! `dmnpulse-listener [config.yaml] [events.json]`

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use dmnpulse_core::event::AfterEvaluateDecisionEvent;
use dmnpulse_core::DmnRuntimeEventListener;
use dmnpulse_listener::{config, DecisionMetricsListener, MetricRegistry};

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let cfg_path = args.next().unwrap_or_else(|| "dmnpulse.yaml".to_string());
    let events_path = args.next();

    let cfg = config::load_from_file(&cfg_path).expect("config load failed");

    let registry = Arc::new(MetricRegistry::new());
    let listener =
        DecisionMetricsListener::from_config(&registry, &cfg).expect("listener construction failed");

    if let Some(path) = events_path {
        let raw = std::fs::read_to_string(&path).expect("events file read failed");
        let events: Vec<AfterEvaluateDecisionEvent> =
            serde_json::from_str(&raw).expect("events file must be a JSON array of events");

        tracing::info!(count = events.len(), "replaying after-decision events");
        for event in &events {
            listener.after_evaluate_decision(event);
        }
    }

    print!("{}", registry.render());
}
