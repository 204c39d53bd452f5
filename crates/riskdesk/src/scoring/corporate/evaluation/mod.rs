mod advisor;
mod model;
mod policy;
mod ratios;

pub use advisor::CreditTerms;
pub use policy::{MetricKind, MetricReading, MetricStatus};

pub(crate) use advisor::suggest_terms;
pub(crate) use model::{
    decision_tone, derive_grade, pd_review_threshold, probability_of_default, PD_CEILING, PD_FLOOR,
};
pub(crate) use policy::{policy_flags, rate_metrics};
pub(crate) use ratios::compute_ratios;

use super::domain::{CompanyProfile, PolicyFlag, Ratios, RiskGrade};
use crate::scoring::DecisionTone;
use serde::{Deserialize, Serialize};

/// Covenants attached to every scored facility.
const STANDARD_COVENANTS: [&str; 2] = [
    "Submit audited financial statements annually",
    "Maintain DSCR at or above 1.2",
];

/// Stateless engine running the full corporate pipeline over a profile.
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine;

impl AssessmentEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, profile: &CompanyProfile) -> RiskAssessment {
        let ratios = compute_ratios(&profile.financials);
        let probability_of_default = probability_of_default(&profile.financials, &ratios);
        let grade = derive_grade(probability_of_default);
        let review_threshold = pd_review_threshold(grade);
        let tone = decision_tone(probability_of_default, review_threshold);
        let terms = suggest_terms(probability_of_default, &profile.financials, 0.0);
        let flags = policy_flags(&ratios, profile.meta.industry_code());
        let metrics = rate_metrics(&ratios);

        RiskAssessment {
            probability_of_default,
            grade,
            review_threshold,
            tone,
            ratios,
            terms,
            flags,
            metrics,
            covenants: STANDARD_COVENANTS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Full scoring output for one statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub probability_of_default: f64,
    pub grade: RiskGrade,
    pub review_threshold: f64,
    pub tone: DecisionTone,
    pub ratios: Ratios,
    pub terms: CreditTerms,
    pub flags: Vec<PolicyFlag>,
    pub metrics: Vec<MetricReading>,
    pub covenants: Vec<String>,
}
