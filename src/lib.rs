#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/contract-risk/issues/"
)]

//! Rule-based contract risk scoring with a staged human review workflow.
//!
//! A contract moves through four stages:
//!
//! 1. **Submission** - the contractor fills in a [`ContractForm`]
//! 2. **Evaluation** - the [`RiskEvaluator`] scores delay, cost and claim risk
//! 3. **Consultant review** - the delay risk may be overridden
//! 4. **Owner decision** - the record is finalized and moved to the archive
//!
//! ## Core Types
//!
//! - [`Workflow`] - per-session state machine owning the in-flight record and the archive
//! - [`RiskEvaluator`] / [`evaluate`] - pure scoring rules
//! - [`ReviewRecord`] - input + assessment + optional owner decision
//! - [`ArchiveReport`] - plain-text rendering of finalized records
//!
//! ## Example
//!
//! ```
//! use contract_risk::{ContractForm, OwnerDecision, RiskLevel, Workflow};
//!
//! let mut workflow = Workflow::new();
//! let form = ContractForm::from_choices(100_000, 20, "No", "Low").unwrap();
//!
//! let record = workflow.submit(form).unwrap();
//! assert_eq!(record.assessment.delay_risk, RiskLevel::High);
//!
//! workflow.adjust_delay_risk(RiskLevel::Medium).unwrap();
//! workflow.finalize(OwnerDecision::Hold).unwrap();
//!
//! assert_eq!(workflow.list_archive().count(), 1);
//! assert!(workflow.current().is_none());
//! ```

mod config;
mod errors;
mod evaluator;
mod record;
mod report;
mod workflow;

pub use config::RiskRules;
pub use errors::{Field, ValidationReason, WorkflowError, WorkflowResult};
pub use evaluator::{evaluate, RiskEvaluator};
pub use record::{
    ContractForm, ContractInput, Insight, OwnerDecision, PenaltyClause, ReviewRecord,
    RiskAssessment, RiskLevel, ScopeClarity,
};
pub use report::ArchiveReport;
pub use workflow::{ReviewStage, Workflow};

#[cfg(test)]
mod tests;
