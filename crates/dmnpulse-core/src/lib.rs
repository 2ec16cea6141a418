//! dmnpulse core: evaluation event model, listener contract, and error types.
//!
//! This crate defines the contracts shared by the metrics listener and by any
//! embedding decision runtime: the typed lifecycle events a runtime emits, the
//! closed result-value variant with its total numeric coercion, and the error
//! surface. It intentionally carries no runtime or transport dependencies so
//! it can be reused wherever the events need to be produced or replayed.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `DmnPulseError`/`Result` so a listener
//! callback can never crash the evaluation runtime that drives it.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod event;
pub mod listener;

/// Shared result type.
pub use error::{DmnPulseError, Result};
pub use event::{
    AfterEvaluateDecisionEvent, DecisionRef, DecisionResult, EvaluationResult, ModelRef,
    ResultValue,
};
pub use listener::DmnRuntimeEventListener;
