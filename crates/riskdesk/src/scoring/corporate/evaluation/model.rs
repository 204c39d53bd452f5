use super::super::domain::{FinancialInputs, Ratios, RiskGrade};
use crate::scoring::DecisionTone;

/// PD is never reported outside this band, whatever the statement says.
pub(crate) const PD_FLOOR: f64 = 0.01;
pub(crate) const PD_CEILING: f64 = 0.99;

/// Half-width of the hold band around the review threshold.
const TONE_BAND: f64 = 0.05;

/// Fixed-weight logistic scorecard. The weights are design constants; no
/// fitting step exists anywhere in the service.
pub(crate) fn probability_of_default(fin: &FinancialInputs, ratios: &Ratios) -> f64 {
    let z = 0.0007 * fin.long_term_debt - 0.001 * fin.retained_earnings - 0.55 * ratios.net_margin
        - 0.25 * ratios.quick_ratio
        + 0.75 * ratios.debt_to_asset
        - 0.000018 * fin.market_value
        + 0.00015 * (fin.inventory - 800.0).max(0.0)
        + 0.4 * ratios.ohlson_o.max(0.0);

    let pd = 1.0 / (1.0 + (-z).exp());
    pd.clamp(PD_FLOOR, PD_CEILING)
}

/// Map a PD onto the grade ladder. Boundaries are half-open on the lower
/// side; the first band that matches wins.
pub(crate) fn derive_grade(pd: f64) -> RiskGrade {
    if pd < 0.03 {
        RiskGrade::A
    } else if pd < 0.06 {
        RiskGrade::AMinus
    } else if pd < 0.10 {
        RiskGrade::BbbPlus
    } else if pd < 0.15 {
        RiskGrade::Bbb
    } else if pd < 0.25 {
        RiskGrade::BbPlus
    } else if pd < 0.35 {
        RiskGrade::Bb
    } else {
        RiskGrade::BPlus
    }
}

/// PD level at which a facility of the given grade goes to manual review.
pub(crate) fn pd_review_threshold(grade: RiskGrade) -> f64 {
    match grade {
        RiskGrade::A => 0.20,
        RiskGrade::AMinus => 0.24,
        RiskGrade::BbbPlus => 0.28,
        RiskGrade::Bbb => 0.32,
        RiskGrade::BbPlus => 0.36,
        RiskGrade::Bb => 0.40,
        RiskGrade::BPlus => 0.45,
    }
}

/// Tone relative to the review threshold: comfortably below approves,
/// within the band holds, above rejects.
pub(crate) fn decision_tone(pd: f64, threshold: f64) -> DecisionTone {
    if pd < threshold - TONE_BAND {
        DecisionTone::Approve
    } else if pd <= threshold + TONE_BAND {
        DecisionTone::Hold
    } else {
        DecisionTone::Reject
    }
}
