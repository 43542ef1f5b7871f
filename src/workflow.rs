//! Four-stage review workflow.
//!
//! A [`Workflow`] owns at most one record under review plus the append-only
//! archive of decided records. It is created per session by the caller; a
//! concurrent host must guard each instance with a single lock.
//!
//! ```text
//!            submit                 finalize
//!   Idle ───────────────▶ Evaluated ─────────▶ Idle (record archived)
//!                          │    ▲
//!                          └────┘
//!                    adjust_delay_risk
//! ```

use crate::errors::{WorkflowError, WorkflowResult};
use crate::evaluator::RiskEvaluator;
use crate::record::{ContractForm, ContractInput, OwnerDecision, ReviewRecord, RiskLevel};

/// Whether a record is currently under review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStage {
    /// No submission awaiting a decision.
    Idle,
    /// A submission has been scored and awaits consultant/owner review.
    Evaluated,
}

/// Per-session review state.
#[derive(Debug, Clone, Default)]
pub struct Workflow {
    evaluator: RiskEvaluator,
    current: Option<ReviewRecord>,
    archive: Vec<ReviewRecord>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workflow that scores submissions with a configured evaluator.
    pub fn with_evaluator(evaluator: RiskEvaluator) -> Self {
        Self {
            evaluator,
            ..Default::default()
        }
    }

    pub fn stage(&self) -> ReviewStage {
        if self.current.is_some() {
            ReviewStage::Evaluated
        } else {
            ReviewStage::Idle
        }
    }

    /// The record under review, if any.
    pub fn current(&self) -> Option<&ReviewRecord> {
        self.current.as_ref()
    }

    /// Delay risk a consultant form should preselect.
    pub fn pending_delay_risk(&self) -> Option<RiskLevel> {
        self.current.as_ref().map(|r| r.assessment.delay_risk)
    }

    /// Validate and score a contractor submission.
    ///
    /// On success the scored record becomes the record under review. Any
    /// previous undecided record is discarded. On failure nothing changes.
    pub fn submit(&mut self, form: ContractForm) -> WorkflowResult<&ReviewRecord> {
        let input = form.validate()?;
        Ok(self.submit_input(input))
    }

    /// Score an already validated contract and place it under review.
    pub fn submit_input(&mut self, input: ContractInput) -> &ReviewRecord {
        let assessment = self.evaluator.evaluate(&input);

        if let Some(discarded) = &self.current {
            tracing::warn!(
                contract_value = discarded.input.contract_value,
                duration_months = discarded.input.duration_months,
                "discarding undecided contract in favour of new submission"
            );
        }

        tracing::debug!(
            contract_value = input.contract_value,
            insights = assessment.insights.len(),
            "contract submitted for review"
        );

        self.current.insert(ReviewRecord::new(input, assessment))
    }

    /// Record the consultant's delay risk for the record under review.
    ///
    /// Only the delay risk changes; the evaluator's insights are kept as-is.
    pub fn adjust_delay_risk(&mut self, level: RiskLevel) -> WorkflowResult<()> {
        let record = self
            .current
            .as_mut()
            .ok_or(WorkflowError::NoActiveRecord {
                operation: "adjust delay risk",
            })?;

        tracing::debug!(
            from = %record.assessment.delay_risk,
            to = %level,
            "consultant adjusted delay risk"
        );
        record.assessment.delay_risk = level;
        Ok(())
    }

    /// Parse a consultant's text choice and apply it.
    pub fn adjust_delay_risk_choice(&mut self, level: &str) -> WorkflowResult<()> {
        let level: RiskLevel = level.parse()?;
        self.adjust_delay_risk(level)
    }

    /// Attach the owner's decision and move the record to the archive.
    ///
    /// Returns the archived record.
    pub fn finalize(&mut self, decision: OwnerDecision) -> WorkflowResult<&ReviewRecord> {
        let mut record = self
            .current
            .take()
            .ok_or(WorkflowError::NoActiveRecord {
                operation: "finalize",
            })?;

        record.owner_decision = Some(decision);
        tracing::debug!(
            %decision,
            archived = self.archive.len() + 1,
            "owner decision recorded"
        );
        self.archive.push(record);

        Ok(&self.archive[self.archive.len() - 1])
    }

    /// Parse an owner's text choice and finalize with it.
    pub fn finalize_choice(&mut self, decision: &str) -> WorkflowResult<&ReviewRecord> {
        let decision: OwnerDecision = decision.parse()?;
        self.finalize(decision)
    }

    /// Decided records, in decision order.
    pub fn list_archive(&self) -> impl Iterator<Item = &ReviewRecord> + '_ {
        self.archive.iter()
    }

    pub fn archive(&self) -> &[ReviewRecord] {
        &self.archive
    }
}
