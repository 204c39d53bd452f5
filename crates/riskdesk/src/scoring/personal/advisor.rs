use super::{LoanScenario, PersonalGrade};

/// Hard ceiling on any recommended principal.
const LIMIT_CAP: f64 = 200_000_000.0;

/// Size a recommended principal from the grade's DSR capacity.
///
/// Monthly capacity times the annuity factor gives the principal a borrower
/// can service over the term; a zero rate degenerates to the term itself.
/// Theta feeds a small certainty adjustment: a stricter threshold shrinks
/// the recommendation.
pub fn recommend_limit(scenario: &LoanScenario, grade: PersonalGrade, theta: f64) -> f64 {
    let monthly_income = scenario.annual_income / 12.0;
    let monthly_capacity = monthly_income * grade.dsr_cap();

    let monthly_rate = scenario.annual_rate / 100.0 / 12.0;
    let annuity_factor = if monthly_rate > 0.0 {
        let discount = (1.0 + monthly_rate).powi(-(scenario.term_months as i32));
        (1.0 - discount) / monthly_rate
    } else {
        f64::from(scenario.term_months)
    };

    let base_principal = monthly_capacity * annuity_factor;
    let certainty = 1.0 + (0.5 - theta) * 0.2;

    (base_principal * grade.limit_boost() * certainty).clamp(0.0, LIMIT_CAP)
}
