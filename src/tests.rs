use crate::{
    ContractForm, Insight, OwnerDecision, ReviewStage, RiskLevel, Workflow, WorkflowError,
};

fn submit(workflow: &mut Workflow, value: u64, months: u32, penalty: &str, scope: &str) {
    let form = ContractForm::from_choices(value, months, penalty, scope).unwrap();
    workflow.submit(form).unwrap();
}

#[test]
fn test_high_risk_example() {
    let mut workflow = Workflow::new();
    let form = ContractForm::from_choices(100_000, 20, "No", "Low").unwrap();
    let record = workflow.submit(form).unwrap();

    assert_eq!(record.assessment.delay_risk, RiskLevel::High);
    assert_eq!(record.assessment.cost_risk, RiskLevel::High);
    assert_eq!(record.assessment.claim_risk, RiskLevel::High);
    let labels: Vec<&str> = record.assessment.insights.iter().map(|i| i.label()).collect();
    assert_eq!(
        labels,
        ["Long project duration", "Low scope clarity", "No penalty clause"]
    );
}

#[test]
fn test_low_risk_example() {
    let mut workflow = Workflow::new();
    let form = ContractForm::from_choices(100_000, 10, "Yes", "High").unwrap();
    let record = workflow.submit(form).unwrap();

    assert_eq!(record.assessment.delay_risk, RiskLevel::Low);
    assert_eq!(record.assessment.cost_risk, RiskLevel::Low);
    assert_eq!(record.assessment.claim_risk, RiskLevel::Low);
    assert!(record.assessment.insights.is_empty());
}

#[test]
fn test_finalize_without_adjustment_keeps_evaluated_delay() {
    let mut workflow = Workflow::new();
    submit(&mut workflow, 50_000, 15, "Yes", "Medium");
    workflow.finalize(OwnerDecision::Approve).unwrap();

    assert_eq!(workflow.archive()[0].assessment.delay_risk, RiskLevel::Medium);
}

#[test]
fn test_adjusted_delay_reaches_archive() {
    let mut workflow = Workflow::new();
    submit(&mut workflow, 50_000, 15, "Yes", "Medium");
    workflow.adjust_delay_risk(RiskLevel::High).unwrap();
    workflow.finalize(OwnerDecision::Hold).unwrap();

    let archived = &workflow.archive()[0];
    assert_eq!(archived.assessment.delay_risk, RiskLevel::High);
    // Insights reflect the evaluation, not the consultant's override.
    assert!(!archived
        .assessment
        .insights
        .contains(&Insight::LongProjectDuration));
}

#[test]
fn test_archive_keeps_submission_order() {
    let mut workflow = Workflow::new();
    let decisions = [
        OwnerDecision::Approve,
        OwnerDecision::Hold,
        OwnerDecision::Reject,
        OwnerDecision::PartialApproval,
        OwnerDecision::Approve,
    ];
    for (i, decision) in decisions.iter().enumerate() {
        submit(&mut workflow, i as u64 * 1_000, i as u32 + 1, "Yes", "High");
        workflow.finalize(*decision).unwrap();
    }

    let archived: Vec<_> = workflow.list_archive().collect();
    assert_eq!(archived.len(), decisions.len());
    for (i, record) in archived.iter().enumerate() {
        assert_eq!(record.input.contract_value, i as u64 * 1_000);
        assert_eq!(record.owner_decision, Some(decisions[i]));
    }

    // Listing does not consume or mutate the archive.
    assert_eq!(workflow.list_archive().count(), decisions.len());
}

#[test]
fn test_second_finalize_fails() {
    let mut workflow = Workflow::new();
    submit(&mut workflow, 1, 1, "No", "Low");
    workflow.finalize(OwnerDecision::Reject).unwrap();

    assert!(matches!(
        workflow.finalize(OwnerDecision::Reject),
        Err(WorkflowError::NoActiveRecord { .. })
    ));
    assert_eq!(workflow.stage(), ReviewStage::Idle);
}

#[test]
fn test_discarded_submission_never_archived() {
    let mut workflow = Workflow::new();
    submit(&mut workflow, 1, 30, "No", "Low");
    submit(&mut workflow, 2, 3, "Yes", "High");
    workflow.finalize(OwnerDecision::Approve).unwrap();

    let archived: Vec<_> = workflow.list_archive().collect();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].input.contract_value, 2);
}

#[test]
fn test_full_session_from_text_choices() {
    let mut workflow = Workflow::new();

    let form = ContractForm::from_choices(75_000, 14, "Select", "Medium").unwrap();
    assert!(workflow.submit(form).unwrap_err().is_validation());
    assert_eq!(workflow.stage(), ReviewStage::Idle);

    let form = ContractForm::from_choices(75_000, 14, "No", "Medium").unwrap();
    workflow.submit(form).unwrap();
    workflow.adjust_delay_risk_choice("High").unwrap();
    workflow.finalize_choice("Hold").unwrap();

    let record = &workflow.archive()[0];
    assert_eq!(record.assessment.delay_risk, RiskLevel::High);
    assert_eq!(record.assessment.claim_risk, RiskLevel::High);
    assert_eq!(record.assessment.insights, vec![Insight::NoPenaltyClause]);
    assert_eq!(record.owner_decision, Some(OwnerDecision::Hold));
}
