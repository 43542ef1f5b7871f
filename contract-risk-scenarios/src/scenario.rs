//! Core types for parsed scenario files.
//!
//! ```toml
//! title = "Consultant lowers delay risk"
//!
//! [[step]]
//! action = "submit"
//! contract_value = 100000
//! duration_months = 20
//! penalty = "Yes"
//! scope = "High"
//! expect = { delay = "High", insights = ["Long project duration"] }
//!
//! [[step]]
//! action = "adjust"
//! level = "Medium"
//!
//! [[step]]
//! action = "finalize"
//! decision = "Approve"
//! expect = { delay = "Medium", archive_len = 1 }
//! ```

use std::fmt;

use contract_risk::{Insight, OwnerDecision, RiskLevel, RiskRules};
use serde::{Deserialize, Serialize};

/// A parsed scenario document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable name shown in reports
    pub title: String,
    /// Optional threshold overrides for the evaluator
    #[serde(default)]
    pub rules: Option<RiskRules>,
    /// Steps run in order against one workflow
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// Workflow operation performed by a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Submit,
    Adjust,
    Finalize,
    List,
}

/// A single scenario step.
///
/// Choice fields are kept as text so that placeholder selections can be
/// exercised; a missing choice is treated as the placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub action: Action,
    #[serde(default)]
    pub contract_value: u64,
    #[serde(default = "default_duration")]
    pub duration_months: u32,
    #[serde(default)]
    pub penalty: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    /// Consultant's delay risk for `adjust`
    #[serde(default)]
    pub level: Option<String>,
    /// Owner decision for `finalize`
    #[serde(default)]
    pub decision: Option<String>,
    #[serde(default)]
    pub expect: Expectation,
}

fn default_duration() -> u32 {
    1
}

/// Expected outcome of a step. Unset fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expectation {
    #[serde(default)]
    pub error: Option<ExpectedError>,
    #[serde(default)]
    pub delay: Option<RiskLevel>,
    #[serde(default)]
    pub cost: Option<RiskLevel>,
    #[serde(default)]
    pub claim: Option<RiskLevel>,
    #[serde(default)]
    pub insights: Option<Vec<Insight>>,
    #[serde(default)]
    pub decision: Option<OwnerDecision>,
    #[serde(default)]
    pub archive_len: Option<usize>,
}

/// Error kind a step is expected to fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedError {
    Validation,
    NoActiveRecord,
}

impl Expectation {
    /// Whether any risk or decision field is asserted.
    pub fn checks_record(&self) -> bool {
        self.delay.is_some()
            || self.cost.is_some()
            || self.claim.is_some()
            || self.insights.is_some()
            || self.decision.is_some()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Submit => write!(f, "submit"),
            Action::Adjust => write!(f, "adjust"),
            Action::Finalize => write!(f, "finalize"),
            Action::List => write!(f, "list"),
        }
    }
}

impl fmt::Display for ExpectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedError::Validation => write!(f, "validation"),
            ExpectedError::NoActiveRecord => write!(f, "no_active_record"),
        }
    }
}
