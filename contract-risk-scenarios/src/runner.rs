//! Scenario runner.
//!
//! Each scenario runs against its own [`Workflow`]; steps never share state
//! across scenarios.

use std::fmt;

use contract_risk::{
    ContractForm, ReviewRecord, RiskEvaluator, Workflow, WorkflowError, WorkflowResult,
};

use crate::scenario::{Action, ExpectedError, Expectation, Scenario, Step};

/// Result of a single step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// 1-based step number
    pub index: usize,
    pub action: Action,
    /// Expectation mismatches; empty when the step passed
    pub mismatches: Vec<String>,
}

impl StepOutcome {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Outcome of running every step of a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub title: String,
    pub outcomes: Vec<StepOutcome>,
    /// Archive contents after the last step
    pub archive: Vec<ReviewRecord>,
}

impl ScenarioReport {
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(StepOutcome::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }
}

/// Run a scenario against a fresh workflow.
pub fn run_scenario(scenario: &Scenario) -> ScenarioReport {
    let evaluator = RiskEvaluator::new(scenario.rules.unwrap_or_default());
    let mut workflow = Workflow::with_evaluator(evaluator);

    let outcomes: Vec<StepOutcome> = scenario
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| run_step(&mut workflow, i + 1, step))
        .collect();

    let report = ScenarioReport {
        title: scenario.title.clone(),
        outcomes,
        archive: workflow.archive().to_vec(),
    };
    tracing::debug!(
        title = %report.title,
        passed = report.passed_count(),
        total = report.outcomes.len(),
        "scenario finished"
    );
    report
}

fn choice(text: &Option<String>) -> &str {
    text.as_deref().unwrap_or("")
}

fn perform(workflow: &mut Workflow, step: &Step) -> WorkflowResult<Option<ReviewRecord>> {
    match step.action {
        Action::Submit => {
            let form = ContractForm::from_choices(
                step.contract_value,
                step.duration_months,
                choice(&step.penalty),
                choice(&step.scope),
            )?;
            workflow.submit(form).map(|r| Some(r.clone()))
        }
        Action::Adjust => workflow
            .adjust_delay_risk_choice(choice(&step.level))
            .map(|()| workflow.current().cloned()),
        Action::Finalize => workflow
            .finalize_choice(choice(&step.decision))
            .map(|r| Some(r.clone())),
        Action::List => Ok(None),
    }
}

fn run_step(workflow: &mut Workflow, index: usize, step: &Step) -> StepOutcome {
    let result = perform(workflow, step);
    let mut mismatches = Vec::new();

    match (&result, step.expect.error) {
        (Err(err), Some(expected)) => {
            if !error_matches(err, expected) {
                mismatches.push(format!("expected {} error, got: {}", expected, err));
            }
        }
        (Err(err), None) => mismatches.push(format!("unexpected error: {}", err)),
        (Ok(_), Some(expected)) => {
            mismatches.push(format!("expected {} error, but the step succeeded", expected))
        }
        (Ok(Some(record)), None) => check_record(record, &step.expect, &mut mismatches),
        (Ok(None), None) => {
            if step.expect.checks_record() {
                mismatches.push("no record to check".to_string());
            }
        }
    }

    if let Some(expected) = step.expect.archive_len {
        let actual = workflow.archive().len();
        if actual != expected {
            mismatches.push(format!("expected archive_len {}, got {}", expected, actual));
        }
    }

    tracing::debug!(index, action = %step.action, ok = mismatches.is_empty(), "scenario step");

    StepOutcome {
        index,
        action: step.action,
        mismatches,
    }
}

fn error_matches(err: &WorkflowError, expected: ExpectedError) -> bool {
    match (err, expected) {
        (WorkflowError::Validation { .. }, ExpectedError::Validation) => true,
        (WorkflowError::NoActiveRecord { .. }, ExpectedError::NoActiveRecord) => true,
        _ => false,
    }
}

fn check_field<T>(name: &str, expected: Option<T>, actual: T, mismatches: &mut Vec<String>)
where
    T: PartialEq + fmt::Debug,
{
    if let Some(expected) = expected {
        if expected != actual {
            mismatches.push(format!("expected {} {:?}, got {:?}", name, expected, actual));
        }
    }
}

fn check_record(record: &ReviewRecord, expect: &Expectation, mismatches: &mut Vec<String>) {
    let assessment = &record.assessment;
    check_field("delay", expect.delay, assessment.delay_risk, mismatches);
    check_field("cost", expect.cost, assessment.cost_risk, mismatches);
    check_field("claim", expect.claim, assessment.claim_risk, mismatches);
    check_field(
        "insights",
        expect.insights.as_ref(),
        &assessment.insights,
        mismatches,
    );
    check_field("decision", expect.decision.map(Some), record.owner_decision, mismatches);
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.success() { "PASS" } else { "FAIL" };
        writeln!(
            f,
            "{} {} ({}/{} steps)",
            status,
            self.title,
            self.passed_count(),
            self.outcomes.len()
        )?;
        for outcome in self.failures() {
            for mismatch in &outcome.mismatches {
                writeln!(f, "  step {} ({}): {}", outcome.index, outcome.action, mismatch)?;
            }
        }
        Ok(())
    }
}
