//! Runtime listener contract.

use crate::event::*;

/// Notification interface a decision runtime drives around each evaluation.
///
/// Hooks run synchronously on the runtime's evaluation threads and must
/// return promptly; implementations are invoked concurrently and therefore
/// need to be `Send + Sync`. Every hook has a default empty body so an
/// implementation only overrides the lifecycle points it cares about.
pub trait DmnRuntimeEventListener: Send + Sync {
    fn before_evaluate_decision(&self, _event: &BeforeEvaluateDecisionEvent) {}
    fn after_evaluate_decision(&self, _event: &AfterEvaluateDecisionEvent) {}

    fn before_evaluate_bkm(&self, _event: &BeforeEvaluateBkmEvent) {}
    fn after_evaluate_bkm(&self, _event: &AfterEvaluateBkmEvent) {}

    fn before_evaluate_context_entry(&self, _event: &BeforeEvaluateContextEntryEvent) {}
    fn after_evaluate_context_entry(&self, _event: &AfterEvaluateContextEntryEvent) {}

    fn before_evaluate_decision_table(&self, _event: &BeforeEvaluateDecisionTableEvent) {}
    fn after_evaluate_decision_table(&self, _event: &AfterEvaluateDecisionTableEvent) {}

    fn before_evaluate_decision_service(&self, _event: &BeforeEvaluateDecisionServiceEvent) {}
    fn after_evaluate_decision_service(&self, _event: &AfterEvaluateDecisionServiceEvent) {}
}
