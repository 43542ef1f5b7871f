//! Plain-text rendering of archived review records.

use std::fmt;

use crate::record::{join_insights, ReviewRecord};

/// Renders records as numbered blocks, one per contract.
///
/// ```
/// use contract_risk::{ArchiveReport, ContractForm, OwnerDecision, Workflow};
///
/// let mut workflow = Workflow::new();
/// workflow.submit(ContractForm::from_choices(5_000, 3, "Yes", "High").unwrap()).unwrap();
/// workflow.finalize(OwnerDecision::Approve).unwrap();
///
/// let text = ArchiveReport::new(workflow.archive()).to_string();
/// assert!(text.starts_with("Contract #1"));
/// assert!(text.contains("No major flags."));
/// ```
pub struct ArchiveReport<'a> {
    records: &'a [ReviewRecord],
}

impl<'a> ArchiveReport<'a> {
    pub fn new(records: &'a [ReviewRecord]) -> Self {
        Self { records }
    }
}

impl<'a> fmt::Display for ArchiveReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let input = &record.input;
            let assessment = &record.assessment;

            writeln!(f, "Contract #{}", i + 1)?;
            writeln!(
                f,
                "  Value: {} | Duration: {} months | Penalty: {} | Scope: {}",
                input.contract_value, input.duration_months, input.penalty_clause, input.scope_clarity
            )?;
            writeln!(
                f,
                "  Delay Risk: {} | Cost Risk: {} | Claim Risk: {}",
                assessment.delay_risk, assessment.cost_risk, assessment.claim_risk
            )?;
            if assessment.insights.is_empty() {
                writeln!(f, "  No major flags.")?;
            } else {
                writeln!(f, "  Insights: {}", join_insights(&assessment.insights))?;
            }
            match record.owner_decision {
                Some(decision) => write!(f, "  Owner Decision: {}", decision)?,
                None => write!(f, "  Owner Decision: Pending")?,
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
