//! Contract submissions, risk assessments and review records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Field, WorkflowError, WorkflowResult};

/// Text a selection widget shows before the user picks an option.
const PLACEHOLDER: &str = "Select";

fn is_placeholder(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text.eq_ignore_ascii_case(PLACEHOLDER)
}

/// Parse an optional choice: the placeholder maps to `None`.
fn parse_selection<T>(text: &str) -> WorkflowResult<Option<T>>
where
    T: FromStr<Err = WorkflowError>,
{
    if is_placeholder(text) {
        Ok(None)
    } else {
        text.parse().map(Some)
    }
}

/// Whether the contract carries a delay penalty clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenaltyClause {
    Yes,
    No,
}

/// How clearly the contract scope is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeClarity {
    Low,
    Medium,
    High,
}

/// Categorical risk level, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Final decision recorded by the project owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnerDecision {
    Approve,
    Hold,
    Reject,
    #[serde(rename = "Partial Approval", alias = "PartialApproval")]
    PartialApproval,
}

/// Human-readable note explaining why a risk was elevated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Insight {
    #[serde(rename = "Long project duration")]
    LongProjectDuration,
    #[serde(rename = "Low scope clarity")]
    LowScopeClarity,
    #[serde(rename = "No penalty clause")]
    NoPenaltyClause,
}

impl Insight {
    pub fn label(self) -> &'static str {
        match self {
            Insight::LongProjectDuration => "Long project duration",
            Insight::LowScopeClarity => "Low scope clarity",
            Insight::NoPenaltyClause => "No penalty clause",
        }
    }
}

/// Raw contractor submission as collected by a form.
///
/// `None` in a choice field means the placeholder was still selected; such a
/// form is rejected by [`ContractForm::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractForm {
    pub contract_value: u64,
    pub duration_months: u32,
    pub penalty_clause: Option<PenaltyClause>,
    pub scope_clarity: Option<ScopeClarity>,
}

impl ContractForm {
    /// Build a form from the text choices a presentation layer collects.
    ///
    /// The placeholder (`"Select"` or blank) is kept as an unselected field so
    /// that submission reports it; any other unknown text is rejected here.
    ///
    /// ```
    /// use contract_risk::{ContractForm, PenaltyClause};
    ///
    /// let form = ContractForm::from_choices(5_000, 6, "Yes", "Select").unwrap();
    /// assert_eq!(form.penalty_clause, Some(PenaltyClause::Yes));
    /// assert_eq!(form.scope_clarity, None);
    /// assert!(form.validate().is_err());
    /// ```
    pub fn from_choices(
        contract_value: u64,
        duration_months: u32,
        penalty_clause: &str,
        scope_clarity: &str,
    ) -> WorkflowResult<Self> {
        Ok(Self {
            contract_value,
            duration_months,
            penalty_clause: parse_selection(penalty_clause)?,
            scope_clarity: parse_selection(scope_clarity)?,
        })
    }

    /// Check that every choice was made. The penalty clause is checked first.
    pub fn validate(&self) -> WorkflowResult<ContractInput> {
        let penalty_clause = self
            .penalty_clause
            .ok_or_else(|| WorkflowError::unselected(Field::PenaltyClause))?;
        let scope_clarity = self
            .scope_clarity
            .ok_or_else(|| WorkflowError::unselected(Field::ScopeClarity))?;

        Ok(ContractInput {
            contract_value: self.contract_value,
            duration_months: self.duration_months,
            penalty_clause,
            scope_clarity,
        })
    }
}

/// Validated contract attributes. `contract_value` is recorded but not scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInput {
    pub contract_value: u64,
    pub duration_months: u32,
    pub penalty_clause: PenaltyClause,
    pub scope_clarity: ScopeClarity,
}

impl ContractInput {
    pub fn new(
        contract_value: u64,
        duration_months: u32,
        penalty_clause: PenaltyClause,
        scope_clarity: ScopeClarity,
    ) -> Self {
        Self {
            contract_value,
            duration_months,
            penalty_clause,
            scope_clarity,
        }
    }
}

impl From<ContractInput> for ContractForm {
    fn from(input: ContractInput) -> Self {
        Self {
            contract_value: input.contract_value,
            duration_months: input.duration_months,
            penalty_clause: Some(input.penalty_clause),
            scope_clarity: Some(input.scope_clarity),
        }
    }
}

/// Risk levels derived from a [`ContractInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub delay_risk: RiskLevel,
    pub cost_risk: RiskLevel,
    pub claim_risk: RiskLevel,
    pub insights: Vec<Insight>,
}

impl RiskAssessment {
    /// One-line summary of the insight flags.
    ///
    /// ```
    /// use contract_risk::{evaluate, ContractInput, PenaltyClause, ScopeClarity};
    ///
    /// let input = ContractInput::new(0, 24, PenaltyClause::Yes, ScopeClarity::High);
    /// assert_eq!(evaluate(&input).summary(), "Insights / Flags: Long project duration");
    /// ```
    pub fn summary(&self) -> String {
        if self.insights.is_empty() {
            "No major flags.".to_string()
        } else {
            format!("Insights / Flags: {}", join_insights(&self.insights))
        }
    }

    /// Highest of the three risk levels.
    pub fn overall(&self) -> RiskLevel {
        self.delay_risk.max(self.cost_risk).max(self.claim_risk)
    }
}

pub(crate) fn join_insights(insights: &[Insight]) -> String {
    insights
        .iter()
        .map(|i| i.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A contract under review or archived with its owner decision.
///
/// Serializes as a single flat record of input, assessment and decision fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(flatten)]
    pub input: ContractInput,
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    #[serde(default)]
    pub owner_decision: Option<OwnerDecision>,
}

impl ReviewRecord {
    pub(crate) fn new(input: ContractInput, assessment: RiskAssessment) -> Self {
        Self {
            input,
            assessment,
            owner_decision: None,
        }
    }

    pub fn is_decided(&self) -> bool {
        self.owner_decision.is_some()
    }
}

impl FromStr for PenaltyClause {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Yes" => Ok(PenaltyClause::Yes),
            "No" => Ok(PenaltyClause::No),
            other if is_placeholder(other) => Err(WorkflowError::unselected(Field::PenaltyClause)),
            other => Err(WorkflowError::unrecognized(Field::PenaltyClause, other)),
        }
    }
}

impl FromStr for ScopeClarity {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(ScopeClarity::Low),
            "Medium" => Ok(ScopeClarity::Medium),
            "High" => Ok(ScopeClarity::High),
            other if is_placeholder(other) => Err(WorkflowError::unselected(Field::ScopeClarity)),
            other => Err(WorkflowError::unrecognized(Field::ScopeClarity, other)),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            other if is_placeholder(other) => Err(WorkflowError::unselected(Field::DelayRisk)),
            other => Err(WorkflowError::unrecognized(Field::DelayRisk, other)),
        }
    }
}

impl FromStr for OwnerDecision {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Approve" => Ok(OwnerDecision::Approve),
            "Hold" => Ok(OwnerDecision::Hold),
            "Reject" => Ok(OwnerDecision::Reject),
            "PartialApproval" | "Partial Approval" => Ok(OwnerDecision::PartialApproval),
            other if is_placeholder(other) => Err(WorkflowError::unselected(Field::OwnerDecision)),
            other => Err(WorkflowError::unrecognized(Field::OwnerDecision, other)),
        }
    }
}

impl fmt::Display for PenaltyClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PenaltyClause::Yes => write!(f, "Yes"),
            PenaltyClause::No => write!(f, "No"),
        }
    }
}

impl fmt::Display for ScopeClarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeClarity::Low => write!(f, "Low"),
            ScopeClarity::Medium => write!(f, "Medium"),
            ScopeClarity::High => write!(f, "High"),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

impl fmt::Display for OwnerDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerDecision::Approve => write!(f, "Approve"),
            OwnerDecision::Hold => write!(f, "Hold"),
            OwnerDecision::Reject => write!(f, "Reject"),
            OwnerDecision::PartialApproval => write!(f, "Partial Approval"),
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
