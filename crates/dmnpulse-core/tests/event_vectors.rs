//! After-decision event vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use dmnpulse_core::event::{AfterEvaluateDecisionEvent, ResultValue};

fn load(name: &str) -> String {
    fs::read_to_string(format!("tests/vectors/{name}")).unwrap()
}

#[test]
fn parse_numeric_result() {
    let s = load("after_decision_numeric.json");
    let event: AfterEvaluateDecisionEvent = serde_json::from_str(&s).unwrap();

    assert_eq!(event.decision.name, "Cardholder Risk Rating");
    assert_eq!(event.decision.model.name, "Model1");
    assert_eq!(event.decision.model.namespace, "ns1");

    let result = event.result.by_name("Cardholder Risk Rating").unwrap();
    assert!(!result.has_errors);
    assert_eq!(result.value, ResultValue::Number(3.5));
}

#[test]
fn parse_errored_result() {
    let s = load("after_decision_errored.json");
    let event: AfterEvaluateDecisionEvent = serde_json::from_str(&s).unwrap();

    let result = event.result.by_name("Dispute Risk Rating").unwrap();
    assert!(result.has_errors);
    assert!(matches!(result.value, ResultValue::Other(_)));
}

#[test]
fn parse_boolean_result_and_id_lookup() {
    let s = load("after_decision_boolean.json");
    let event: AfterEvaluateDecisionEvent = serde_json::from_str(&s).unwrap();

    let by_name = event.result.by_name("Process Automatically").unwrap();
    assert_eq!(by_name.value, ResultValue::Boolean(true));

    // The result set carries sibling decisions too, addressable by node id.
    let by_id = event.result.by_id("_chrr").unwrap();
    assert_eq!(by_id.decision_name, "Cardholder Risk Rating");
    assert_eq!(by_id.value, ResultValue::Number(2.0));

    assert!(event.result.by_name("nope").is_none());
    assert!(event.result.by_id("_nope").is_none());
}

#[test]
fn unknown_fields_rejected() {
    let s = load("after_decision_numeric.json").replace(
        "\"id\": \"_chrr\",",
        "\"id\": \"_chrr\", \"extra\": 1,",
    );
    assert!(serde_json::from_str::<AfterEvaluateDecisionEvent>(&s).is_err());
}
