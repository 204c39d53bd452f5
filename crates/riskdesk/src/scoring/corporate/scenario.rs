use super::domain::{MarginMode, RiskGrade, Scenario};
use super::evaluation::{
    decision_tone, derive_grade, pd_review_threshold, CreditTerms, RiskAssessment, PD_CEILING,
    PD_FLOOR,
};
use crate::scoring::DecisionTone;
use serde::{Deserialize, Serialize};

const RATE_FLOOR: f64 = 0.5;
const RATE_CEILING: f64 = 20.0;

/// Result of a what-if recompute, together with the analyst-readable
/// delta summary shown on the scenario panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub probability_of_default: f64,
    pub grade: RiskGrade,
    pub tone: DecisionTone,
    pub terms: CreditTerms,
    pub deltas_summary: Vec<String>,
}

/// Perturb a scored assessment without touching the base inputs.
///
/// The adjustment is applied to the already-scored PD rather than re-running
/// the scorecard, so a zero scenario reproduces the current assessment
/// exactly. The market delta is carried on the panel but does not enter the
/// recompute.
pub(crate) fn apply_scenario(assessment: &RiskAssessment, scenario: &Scenario) -> ScenarioOutcome {
    let margin_factor = match scenario.margin_mode {
        MarginMode::Net => 0.0015,
        MarginMode::Gross => 0.001,
    };

    let pd_adjust = scenario.revenue_delta * -0.002
        + scenario.margin_delta * -margin_factor
        + scenario.debt_delta * 0.0004
        + scenario.base_rate_delta * 0.005
        + scenario.fx_delta * 0.0006;

    let pd_new =
        (assessment.probability_of_default + pd_adjust).clamp(PD_FLOOR, PD_CEILING);
    let grade_new = derive_grade(pd_new);
    let tone_new = decision_tone(pd_new, pd_review_threshold(grade_new));

    let limit_new = (assessment.terms.limit
        * (1.0 + scenario.revenue_delta / 200.0 + scenario.margin_delta / 150.0))
        .round();
    let rate_new = (assessment.terms.rate + scenario.base_rate_delta * 0.4
        - scenario.margin_delta * 0.03
        + scenario.fx_delta * 0.01)
        .clamp(RATE_FLOOR, RATE_CEILING);

    let deltas_summary = summarize_deltas(assessment, pd_new, grade_new, limit_new);

    ScenarioOutcome {
        probability_of_default: pd_new,
        grade: grade_new,
        tone: tone_new,
        terms: CreditTerms {
            limit: limit_new,
            rate: rate_new,
        },
        deltas_summary,
    }
}

fn summarize_deltas(
    assessment: &RiskAssessment,
    pd_new: f64,
    grade_new: RiskGrade,
    limit_new: f64,
) -> Vec<String> {
    let pd_delta_pp = (pd_new - assessment.probability_of_default) * 100.0;
    let pd_line = format!("PD change: {pd_delta_pp:+.1}%p");

    let grade_line = if grade_new == assessment.grade {
        "Grade: no change".to_string()
    } else {
        format!(
            "Grade: {} -> {}",
            assessment.grade.label(),
            grade_new.label()
        )
    };

    let limit_delta = limit_new - assessment.terms.limit;
    let limit_line = if limit_delta == 0.0 {
        "Limit: no change".to_string()
    } else {
        format!("Limit: {limit_delta:+.0}")
    };

    vec![pd_line, grade_line, limit_line]
}
