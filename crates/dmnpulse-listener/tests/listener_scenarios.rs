//! Dispatch scenarios: tracked matching, coercion, label composition, drops.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use serde_json::json;

use dmnpulse_core::event::{
    AfterEvaluateDecisionEvent, DecisionRef, DecisionResult, EvaluationResult, ModelRef,
    ResultValue,
};
use dmnpulse_core::DmnRuntimeEventListener;
use dmnpulse_listener::config::StaticLabel;
use dmnpulse_listener::tracked::{
    DECISION_CARDHOLDER_RISK_RATING, DECISION_DISPUTE_RISK_RATING,
    DECISION_PROCESS_AUTOMATICALLY, METRIC_CARDHOLDER_RISK_RATING, METRIC_DISPUTE_RISK_RATING,
    METRIC_PROCESS_AUTOMATICALLY,
};
use dmnpulse_listener::{DecisionMetricsListener, MetricRegistry};

const ALL_METRICS: [&str; 3] = [
    METRIC_CARDHOLDER_RISK_RATING,
    METRIC_DISPUTE_RISK_RATING,
    METRIC_PROCESS_AUTOMATICALLY,
];

fn static_labels() -> Vec<StaticLabel> {
    [
        ("group_id", "grp"),
        ("artifact_id", "art"),
        ("version", "1.0"),
    ]
    .into_iter()
    .map(|(name, value)| StaticLabel {
        name: name.into(),
        value: value.into(),
    })
    .collect()
}

fn new_listener() -> (Arc<MetricRegistry>, DecisionMetricsListener) {
    let registry = Arc::new(MetricRegistry::new());
    let listener = DecisionMetricsListener::new(&registry, &static_labels()).unwrap();
    (registry, listener)
}

fn decision_event(name: &str, value: ResultValue, has_errors: bool) -> AfterEvaluateDecisionEvent {
    AfterEvaluateDecisionEvent {
        decision: DecisionRef {
            id: format!("_{name}"),
            name: name.into(),
            model: ModelRef {
                name: "Model1".into(),
                namespace: "ns1".into(),
            },
        },
        result: EvaluationResult::new(vec![DecisionResult {
            decision_id: format!("_{name}"),
            decision_name: name.into(),
            value,
            has_errors,
        }]),
    }
}

const EXPECTED_LABELS: [&str; 5] = ["grp", "art", "1.0", "Model1", "ns1"];

fn total_observations(registry: &MetricRegistry) -> u64 {
    ALL_METRICS
        .iter()
        .map(|m| registry.get(m).unwrap().total_count())
        .sum()
}

#[test]
fn scenario_a_numeric_rating_observed_once() {
    let (registry, listener) = new_listener();

    listener.after_evaluate_decision(&decision_event(
        DECISION_CARDHOLDER_RISK_RATING,
        ResultValue::Number(3.5),
        false,
    ));

    let cardholder = registry.get(METRIC_CARDHOLDER_RISK_RATING).unwrap();
    assert_eq!(cardholder.sample_count(&EXPECTED_LABELS), 1);
    assert_eq!(cardholder.sample_sum(&EXPECTED_LABELS), 3.5);

    // Nothing crossed into the other collectors.
    assert_eq!(registry.get(METRIC_DISPUTE_RISK_RATING).unwrap().total_count(), 0);
    assert_eq!(registry.get(METRIC_PROCESS_AUTOMATICALLY).unwrap().total_count(), 0);
}

#[test]
fn scenario_b_boolean_true_observes_one() {
    let (registry, listener) = new_listener();

    listener.after_evaluate_decision(&decision_event(
        DECISION_PROCESS_AUTOMATICALLY,
        ResultValue::Boolean(true),
        false,
    ));

    let process = registry.get(METRIC_PROCESS_AUTOMATICALLY).unwrap();
    assert_eq!(process.sample_count(&EXPECTED_LABELS), 1);
    assert_eq!(process.sample_sum(&EXPECTED_LABELS), 1.0);
}

#[test]
fn boolean_false_observes_zero() {
    let (registry, listener) = new_listener();

    listener.after_evaluate_decision(&decision_event(
        DECISION_PROCESS_AUTOMATICALLY,
        ResultValue::Boolean(false),
        false,
    ));

    let process = registry.get(METRIC_PROCESS_AUTOMATICALLY).unwrap();
    assert_eq!(process.sample_count(&EXPECTED_LABELS), 1);
    assert_eq!(process.sample_sum(&EXPECTED_LABELS), 0.0);
}

#[test]
fn scenario_c_untracked_decision_touches_nothing() {
    let (registry, listener) = new_listener();

    listener.after_evaluate_decision(&decision_event(
        "Unrelated Decision",
        ResultValue::Number(9.0),
        false,
    ));

    assert_eq!(total_observations(&registry), 0);
}

#[test]
fn scenario_d_errored_result_is_dropped() {
    let (registry, listener) = new_listener();

    listener.after_evaluate_decision(&decision_event(
        DECISION_DISPUTE_RISK_RATING,
        ResultValue::Number(4.0),
        true,
    ));

    assert_eq!(total_observations(&registry), 0);
}

#[test]
fn missing_result_entry_is_dropped() {
    let (registry, listener) = new_listener();

    let mut event = decision_event(DECISION_CARDHOLDER_RISK_RATING, ResultValue::Number(1.0), false);
    event.result = EvaluationResult::default();
    listener.after_evaluate_decision(&event);

    assert_eq!(total_observations(&registry), 0);
}

#[test]
fn unrecognized_result_type_observes_default_zero() {
    let (registry, listener) = new_listener();

    listener.after_evaluate_decision(&decision_event(
        DECISION_DISPUTE_RISK_RATING,
        ResultValue::Other(json!({ "level": "HIGH" })),
        false,
    ));

    let dispute = registry.get(METRIC_DISPUTE_RISK_RATING).unwrap();
    assert_eq!(dispute.sample_count(&EXPECTED_LABELS), 1);
    assert_eq!(dispute.sample_sum(&EXPECTED_LABELS), 0.0);
}

#[test]
fn dynamic_labels_follow_the_evaluated_model() {
    let (registry, listener) = new_listener();

    let mut event = decision_event(DECISION_CARDHOLDER_RISK_RATING, ResultValue::Number(2.0), false);
    event.decision.model = ModelRef {
        name: "Model2".into(),
        namespace: "ns2".into(),
    };
    listener.after_evaluate_decision(&event);

    let cardholder = registry.get(METRIC_CARDHOLDER_RISK_RATING).unwrap();
    assert_eq!(cardholder.sample_count(&["grp", "art", "1.0", "Model2", "ns2"]), 1);
    assert_eq!(cardholder.sample_count(&EXPECTED_LABELS), 0);
}

#[test]
fn render_snapshot_carries_observed_series() {
    let (registry, listener) = new_listener();

    listener.after_evaluate_decision(&decision_event(
        DECISION_CARDHOLDER_RISK_RATING,
        ResultValue::Number(3.5),
        false,
    ));

    let out = registry.render();
    assert!(out.contains("# TYPE cardholder_risk_rating histogram"));
    assert!(out.contains("decision_model_name=\"Model1\""));
    assert!(out.contains("cardholder_risk_rating_bucket"));
    assert!(out.contains("le=\"+Inf\"} 1"));
    assert!(out.contains("cardholder_risk_rating_sum"));
    assert!(out.contains("cardholder_risk_rating_count"));
    // Value 3.5 lands in the le=4 bucket but not le=3.
    assert!(out.contains("le=\"4\"} 1"));
    assert!(out.contains("le=\"3\"} 0"));
}
