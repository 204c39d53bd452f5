use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

use super::domain::{AssessmentId, AssessmentSubmission, FlagSeverity, Scenario};
use super::evaluation::{pd_review_threshold, AssessmentEngine};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{
    AlertError, AlertPublisher, AssessmentRecord, AssessmentRepository, RepositoryError,
    ReviewAlert,
};
use super::scenario::{apply_scenario, ScenarioOutcome};
use crate::scoring::prediction::{ModelGateway, PredictionError};
use crate::scoring::DecisionTone;

/// Scorecard release reported when the gateway does not name its own.
const DEFAULT_MODEL_VERSION: &str = "Corporate-Risk-v0.9";

/// Service composing the intake guard, scoring engine, repository, alert
/// hook, and model gateway.
pub struct RiskAssessmentService<R, A, G> {
    guard: IntakeGuard,
    engine: AssessmentEngine,
    repository: Arc<R>,
    alerts: Arc<A>,
    gateway: Arc<G>,
    model_version: String,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("cra-{id:06}"))
}

impl<R, A, G> RiskAssessmentService<R, A, G>
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
    G: ModelGateway + 'static,
{
    pub fn new(repository: Arc<R>, alerts: Arc<A>, gateway: Arc<G>) -> Self {
        Self {
            guard: IntakeGuard,
            engine: AssessmentEngine::new(),
            repository,
            alerts,
            gateway,
            model_version: DEFAULT_MODEL_VERSION.to_string(),
        }
    }

    pub fn with_model_version(mut self, version: impl Into<String>) -> Self {
        self.model_version = version.into();
        self
    }

    /// Validate, score, and store a new assessment.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let mut profile = self.guard.profile_from_submission(submission)?;
        profile.assessment_id = next_assessment_id();

        let assessment = self.engine.assess(&profile);
        let record = AssessmentRecord {
            profile,
            assessment,
            model_version: self.model_version.clone(),
            what_if_count: 0,
        };

        let stored = self.repository.insert(record)?;
        self.alert_if_flagged(&stored)?;
        Ok(stored)
    }

    /// Fetch an assessment for API responses.
    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Apply a what-if scenario to a stored assessment and persist the
    /// perturbed figures along with the audit counter.
    pub fn what_if(
        &self,
        id: &AssessmentId,
        scenario: &Scenario,
    ) -> Result<ScenarioOutcome, AssessmentServiceError> {
        let mut record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;

        let outcome = apply_scenario(&record.assessment, scenario);

        record.assessment.probability_of_default = outcome.probability_of_default;
        record.assessment.grade = outcome.grade;
        record.assessment.review_threshold = pd_review_threshold(outcome.grade);
        record.assessment.tone = outcome.tone;
        record.assessment.terms = outcome.terms;
        record.what_if_count += 1;

        self.repository.update(record)?;
        Ok(outcome)
    }

    /// Score a submission through the model gateway without persisting it.
    pub fn predict(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<PredictionOutcome, AssessmentServiceError> {
        let profile = self.guard.profile_from_submission(submission)?;
        let response = self.gateway.predict(&profile)?;
        let p_hat = response.resolve_probability()?;

        Ok(PredictionOutcome {
            p_hat,
            model_version: response
                .model_version
                .unwrap_or_else(|| self.model_version.clone()),
        })
    }

    fn alert_if_flagged(&self, record: &AssessmentRecord) -> Result<(), AssessmentServiceError> {
        let mut reasons: Vec<String> = record
            .assessment
            .flags
            .iter()
            .filter(|flag| flag.severity == FlagSeverity::Danger)
            .map(|flag| flag.text.clone())
            .collect();
        if record.assessment.tone == DecisionTone::Reject {
            reasons.push("PD above review threshold".to_string());
        }

        if reasons.is_empty() {
            return Ok(());
        }

        self.alerts.publish(ReviewAlert {
            assessment_id: record.profile.assessment_id.clone(),
            grade: record.assessment.grade.label().to_string(),
            reasons,
        })?;
        Ok(())
    }
}

/// Resolved probability returned by the predict endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionOutcome {
    pub p_hat: f64,
    pub model_version: String,
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}
