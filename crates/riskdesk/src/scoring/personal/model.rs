use super::{LoanScenario, PersonalGrade};
use crate::scoring::DecisionTone;

const PROBABILITY_FLOOR: f64 = 0.05;
const PROBABILITY_CEILING: f64 = 0.98;

/// Half-width of the hold band around theta.
const TONE_BAND: f64 = 0.05;

/// Reference annual income that normalizes the income factor.
const INCOME_SCALE: f64 = 120_000_000.0;

/// Approval probability for a loan scenario under a given grade.
///
/// A grade bonus shifts the 0.5 baseline; income, rate, debt-to-income, and
/// term each contribute a bounded adjustment. Output is clamped so the model
/// never claims certainty either way.
pub fn estimate_probability(scenario: &LoanScenario, grade: PersonalGrade) -> f64 {
    let base = 0.5 + grade_bonus(grade);
    let income_factor = (scenario.annual_income / INCOME_SCALE).clamp(0.0, 2.0) - 0.5;
    let rate_penalty = (scenario.annual_rate - 7.0) * 0.015;
    let debt_to_income = (scenario.amount / scenario.annual_income.max(1.0)).clamp(0.0, 1.6);
    let term_bonus = (f64::from(scenario.term_months) / 120.0) * 0.05;

    let score = base + income_factor * 0.1 - rate_penalty - debt_to_income * 0.25 + term_bonus;
    score.clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING)
}

const fn grade_bonus(grade: PersonalGrade) -> f64 {
    match grade {
        PersonalGrade::A => 0.12,
        PersonalGrade::B => 0.08,
        PersonalGrade::C => 0.04,
        PersonalGrade::D => -0.02,
        PersonalGrade::E => -0.08,
    }
}

/// Judge a probability against theta: comfortably above approves, within
/// the band holds, below rejects.
pub fn decide(p_hat: f64, theta: f64) -> DecisionTone {
    if p_hat >= theta + TONE_BAND {
        DecisionTone::Approve
    } else if p_hat >= theta - TONE_BAND {
        DecisionTone::Hold
    } else {
        DecisionTone::Reject
    }
}
