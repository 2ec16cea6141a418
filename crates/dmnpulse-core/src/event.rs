//! Evaluation lifecycle events emitted by a decision runtime.
//!
//! These are plain owned structs so they can be produced in-process by a
//! runtime binding or replayed from captured JSON. Result payloads are modeled
//! as a closed variant (`ResultValue`) instead of runtime type inspection;
//! coercion to an observable number is total.

use serde::{Deserialize, Serialize};

/// Identity of the decision model that owns an evaluated construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelRef {
    /// Model name (e.g., "Model1").
    pub name: String,
    /// Model namespace URI.
    pub namespace: String,
}

/// Identity of one decision node inside a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecisionRef {
    /// Node id, unique within the model.
    pub id: String,
    /// Human-readable decision name. Matched case-sensitively.
    pub name: String,
    /// Owning model.
    pub model: ModelRef,
}

/// Result payload of one evaluated decision.
///
/// Unknown payload shapes land in `Other` and observe as `0.0`; that keeps
/// the coercion total so a surprising result can never abort the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    /// Bounded numeric outcome (ratings, scores).
    Number(f64),
    /// Binary outcome.
    Boolean(bool),
    /// Anything else the runtime produced (strings, contexts, lists, null).
    Other(serde_json::Value),
}

impl ResultValue {
    /// Total coercion to an observation value.
    ///
    /// `Number` observes as itself, `Boolean` as 1.0/0.0, `Other` as 0.0.
    pub fn observation_value(&self) -> f64 {
        match self {
            ResultValue::Number(n) => *n,
            ResultValue::Boolean(true) => 1.0,
            ResultValue::Boolean(false) => 0.0,
            ResultValue::Other(_) => 0.0,
        }
    }
}

/// One decision's outcome inside an evaluation result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecisionResult {
    /// Id of the decision node that produced this result.
    pub decision_id: String,
    /// Name of the decision that produced this result.
    pub decision_name: String,
    /// The evaluated value.
    pub value: ResultValue,
    /// True when evaluation reported messages at error severity.
    #[serde(default)]
    pub has_errors: bool,
}

/// Result set of one evaluation, queryable by decision name or node id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationResult {
    results: Vec<DecisionResult>,
}

impl EvaluationResult {
    pub fn new(results: Vec<DecisionResult>) -> Self {
        Self { results }
    }

    /// Look up a decision result by decision name (exact match).
    pub fn by_name(&self, name: &str) -> Option<&DecisionResult> {
        self.results.iter().find(|r| r.decision_name == name)
    }

    /// Look up a decision result by decision node id.
    pub fn by_id(&self, id: &str) -> Option<&DecisionResult> {
        self.results.iter().find(|r| r.decision_id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecisionResult> {
        self.results.iter()
    }
}

/// Fired before a decision node is evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeforeEvaluateDecisionEvent {
    pub decision: DecisionRef,
}

/// Fired after a decision node is evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AfterEvaluateDecisionEvent {
    /// The decision that finished evaluating.
    pub decision: DecisionRef,
    /// Result set of the whole evaluation this decision belongs to.
    pub result: EvaluationResult,
}

/// Fired before a business knowledge model is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeforeEvaluateBkmEvent {
    pub name: String,
    pub model: ModelRef,
}

/// Fired after a business knowledge model is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AfterEvaluateBkmEvent {
    pub name: String,
    pub model: ModelRef,
}

/// Fired before a context entry is evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeforeEvaluateContextEntryEvent {
    pub node_name: String,
    pub variable_name: String,
    pub model: ModelRef,
}

/// Fired after a context entry is evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AfterEvaluateContextEntryEvent {
    pub node_name: String,
    pub variable_name: String,
    pub model: ModelRef,
}

/// Fired before a decision table is evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeforeEvaluateDecisionTableEvent {
    pub node_name: String,
    pub table_name: String,
    pub model: ModelRef,
}

/// Fired after a decision table is evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AfterEvaluateDecisionTableEvent {
    pub node_name: String,
    pub table_name: String,
    pub model: ModelRef,
}

/// Fired before a decision service is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeforeEvaluateDecisionServiceEvent {
    pub name: String,
    pub model: ModelRef,
}

/// Fired after a decision service is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AfterEvaluateDecisionServiceEvent {
    pub name: String,
    pub model: ModelRef,
}
