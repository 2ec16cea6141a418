//! Coercion totality: every result variant maps to a defined observation.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use dmnpulse_core::event::ResultValue;
use serde_json::json;

#[test]
fn numbers_pass_through() {
    assert_eq!(ResultValue::Number(3.5).observation_value(), 3.5);
    assert_eq!(ResultValue::Number(0.0).observation_value(), 0.0);
    assert_eq!(ResultValue::Number(-2.0).observation_value(), -2.0);
}

#[test]
fn booleans_map_to_binary() {
    assert_eq!(ResultValue::Boolean(true).observation_value(), 1.0);
    assert_eq!(ResultValue::Boolean(false).observation_value(), 0.0);
}

#[test]
fn other_payloads_degrade_to_zero() {
    for payload in [
        json!(null),
        json!("HIGH"),
        json!(["a", "b"]),
        json!({ "approved": true, "score": 4 }),
    ] {
        assert_eq!(ResultValue::Other(payload).observation_value(), 0.0);
    }
}
