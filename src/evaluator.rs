//! Rule-based contract risk scoring.
//!
//! Each risk is driven by exactly one attribute (default [`RiskRules`]):
//!
//! | Risk  | Attribute       | High when            |
//! |-------|-----------------|----------------------|
//! | Delay | duration        | over 18 months       |
//! | Cost  | scope clarity   | scope clarity is Low |
//! | Claim | penalty clause  | no penalty clause    |
//!
//! The contract value is carried on the record but does not affect scoring.

use crate::config::RiskRules;
use crate::record::{ContractInput, Insight, PenaltyClause, RiskAssessment, RiskLevel, ScopeClarity};

/// Scores contracts against a set of [`RiskRules`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskEvaluator {
    rules: RiskRules,
}

impl RiskEvaluator {
    pub fn new(rules: RiskRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RiskRules {
        &self.rules
    }

    /// Score a validated contract.
    pub fn evaluate(&self, input: &ContractInput) -> RiskAssessment {
        let delay_risk = self.delay_risk(input.duration_months);
        let cost_risk = cost_risk(input.scope_clarity);
        let claim_risk = claim_risk(input.penalty_clause);

        let mut insights = Vec::new();
        if delay_risk == RiskLevel::High {
            insights.push(Insight::LongProjectDuration);
        }
        if cost_risk == RiskLevel::High {
            insights.push(Insight::LowScopeClarity);
        }
        if claim_risk == RiskLevel::High {
            insights.push(Insight::NoPenaltyClause);
        }

        tracing::trace!(
            duration_months = input.duration_months,
            %delay_risk,
            %cost_risk,
            %claim_risk,
            "contract evaluated"
        );

        RiskAssessment {
            delay_risk,
            cost_risk,
            claim_risk,
            insights,
        }
    }

    fn delay_risk(&self, duration_months: u32) -> RiskLevel {
        if duration_months > self.rules.high_delay_after_months {
            RiskLevel::High
        } else if duration_months > self.rules.medium_delay_after_months {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

fn cost_risk(scope_clarity: ScopeClarity) -> RiskLevel {
    match scope_clarity {
        ScopeClarity::Low => RiskLevel::High,
        ScopeClarity::Medium => RiskLevel::Medium,
        ScopeClarity::High => RiskLevel::Low,
    }
}

fn claim_risk(penalty_clause: PenaltyClause) -> RiskLevel {
    match penalty_clause {
        PenaltyClause::No => RiskLevel::High,
        PenaltyClause::Yes => RiskLevel::Low,
    }
}

/// Score a contract with the standard rules.
///
/// ```
/// use contract_risk::{evaluate, ContractInput, PenaltyClause, RiskLevel, ScopeClarity};
///
/// let input = ContractInput::new(100_000, 10, PenaltyClause::Yes, ScopeClarity::High);
/// let assessment = evaluate(&input);
/// assert_eq!(assessment.delay_risk, RiskLevel::Low);
/// assert!(assessment.insights.is_empty());
/// ```
pub fn evaluate(input: &ContractInput) -> RiskAssessment {
    RiskEvaluator::default().evaluate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(duration_months: u32, penalty: PenaltyClause, scope: ScopeClarity) -> ContractInput {
        ContractInput::new(100_000, duration_months, penalty, scope)
    }

    #[test]
    fn test_delay_risk_bands() {
        for months in 1..=12 {
            let a = evaluate(&input(months, PenaltyClause::Yes, ScopeClarity::High));
            assert_eq!(a.delay_risk, RiskLevel::Low, "{} months", months);
        }
        for months in 13..=18 {
            let a = evaluate(&input(months, PenaltyClause::Yes, ScopeClarity::High));
            assert_eq!(a.delay_risk, RiskLevel::Medium, "{} months", months);
        }
        for months in [19, 24, 60, 600] {
            let a = evaluate(&input(months, PenaltyClause::Yes, ScopeClarity::High));
            assert_eq!(a.delay_risk, RiskLevel::High, "{} months", months);
        }
    }

    #[test]
    fn test_cost_risk_follows_scope() {
        assert_eq!(cost_risk(ScopeClarity::Low), RiskLevel::High);
        assert_eq!(cost_risk(ScopeClarity::Medium), RiskLevel::Medium);
        assert_eq!(cost_risk(ScopeClarity::High), RiskLevel::Low);
    }

    #[test]
    fn test_claim_risk_follows_penalty() {
        assert_eq!(claim_risk(PenaltyClause::No), RiskLevel::High);
        assert_eq!(claim_risk(PenaltyClause::Yes), RiskLevel::Low);
    }

    #[test]
    fn test_all_flags_in_order() {
        let a = evaluate(&input(20, PenaltyClause::No, ScopeClarity::Low));
        assert_eq!(a.delay_risk, RiskLevel::High);
        assert_eq!(a.cost_risk, RiskLevel::High);
        assert_eq!(a.claim_risk, RiskLevel::High);
        assert_eq!(
            a.insights,
            vec![
                Insight::LongProjectDuration,
                Insight::LowScopeClarity,
                Insight::NoPenaltyClause,
            ]
        );
    }

    #[test]
    fn test_no_flags() {
        let a = evaluate(&input(10, PenaltyClause::Yes, ScopeClarity::High));
        assert_eq!(
            (a.delay_risk, a.cost_risk, a.claim_risk),
            (RiskLevel::Low, RiskLevel::Low, RiskLevel::Low)
        );
        assert!(a.insights.is_empty());
    }

    #[test]
    fn test_medium_levels_never_flag() {
        let a = evaluate(&input(15, PenaltyClause::Yes, ScopeClarity::Medium));
        assert_eq!(a.delay_risk, RiskLevel::Medium);
        assert_eq!(a.cost_risk, RiskLevel::Medium);
        assert!(a.insights.is_empty());
    }

    #[test]
    fn test_insights_determined_by_levels() {
        let scopes = [ScopeClarity::Low, ScopeClarity::Medium, ScopeClarity::High];
        let penalties = [PenaltyClause::Yes, PenaltyClause::No];
        for months in [6, 15, 30] {
            for &scope in &scopes {
                for &penalty in &penalties {
                    let a = evaluate(&input(months, penalty, scope));
                    let expected: Vec<Insight> = [
                        (a.delay_risk, Insight::LongProjectDuration),
                        (a.cost_risk, Insight::LowScopeClarity),
                        (a.claim_risk, Insight::NoPenaltyClause),
                    ]
                    .iter()
                    .filter(|(level, _)| *level == RiskLevel::High)
                    .map(|(_, insight)| *insight)
                    .collect();
                    assert_eq!(a.insights, expected);
                }
            }
        }
    }

    #[test]
    fn test_contract_value_is_ignored() {
        let small = ContractInput::new(0, 14, PenaltyClause::No, ScopeClarity::Medium);
        let large = ContractInput::new(u64::MAX, 14, PenaltyClause::No, ScopeClarity::Medium);
        assert_eq!(evaluate(&small), evaluate(&large));
    }

    #[test]
    fn test_zero_duration_scores_low() {
        let a = evaluate(&input(0, PenaltyClause::Yes, ScopeClarity::High));
        assert_eq!(a.delay_risk, RiskLevel::Low);
    }

    #[test]
    fn test_custom_thresholds() {
        let evaluator = RiskEvaluator::new(
            RiskRules::new()
                .with_medium_delay_after(6)
                .with_high_delay_after(9),
        );
        let a = evaluator.evaluate(&input(8, PenaltyClause::Yes, ScopeClarity::High));
        assert_eq!(a.delay_risk, RiskLevel::Medium);
        let a = evaluator.evaluate(&input(10, PenaltyClause::Yes, ScopeClarity::High));
        assert_eq!(a.delay_risk, RiskLevel::High);
        assert_eq!(a.insights, vec![Insight::LongProjectDuration]);
    }
}
