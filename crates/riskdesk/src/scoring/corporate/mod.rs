//! Corporate credit assessment: intake, ratio derivation, PD scoring,
//! limit/rate advisory, what-if scenarios, and the HTTP surface.

pub mod domain;
pub mod evaluation;
pub mod repository;
pub mod router;
pub mod scenario;
pub mod service;

pub(crate) mod intake;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentId, AssessmentSubmission, BorrowerMeta, CompanyProfile, FinancialInputs,
    FlagSeverity, MarginMode, PolicyFlag, Ratios, RiskGrade, Scenario,
};
pub use evaluation::{
    AssessmentEngine, CreditTerms, MetricKind, MetricReading, MetricStatus, RiskAssessment,
};
pub use intake::IntakeViolation;
pub use repository::{
    AlertError, AlertPublisher, AssessmentRecord, AssessmentRepository, AssessmentView,
    RepositoryError, ReviewAlert,
};
pub use router::assessment_router;
pub use scenario::ScenarioOutcome;
pub use service::{AssessmentServiceError, PredictionOutcome, RiskAssessmentService};
