use serde::{Deserialize, Serialize};

use super::domain::{AssessmentId, CompanyProfile, PolicyFlag};
use super::evaluation::RiskAssessment;

/// Repository record pairing the sanitized profile with its latest scoring
/// output and audit counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub profile: CompanyProfile,
    pub assessment: RiskAssessment,
    pub model_version: String,
    pub what_if_count: u32,
}

impl AssessmentRecord {
    pub fn summary_view(&self) -> AssessmentView {
        AssessmentView {
            assessment_id: self.profile.assessment_id.clone(),
            company_name: self.profile.meta.company_name.clone(),
            grade: self.assessment.grade.label(),
            tone: self.assessment.tone.label(),
            probability_of_default: self.assessment.probability_of_default,
            recommended_limit: self.assessment.terms.limit,
            recommended_rate: self.assessment.terms.rate,
            flags: self.assessment.flags.clone(),
            model_version: self.model_version.clone(),
            what_if_count: self.what_if_count,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook notifying reviewers when an assessment needs attention.
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: ReviewAlert) -> Result<(), AlertError>;
}

/// Alert payload raised for danger flags and reject tones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAlert {
    pub assessment_id: AssessmentId,
    pub grade: String,
    pub reasons: Vec<String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an assessment for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub assessment_id: AssessmentId,
    pub company_name: String,
    pub grade: &'static str,
    pub tone: &'static str,
    pub probability_of_default: f64,
    pub recommended_limit: f64,
    pub recommended_rate: f64,
    pub flags: Vec<PolicyFlag>,
    pub model_version: String,
    pub what_if_count: u32,
}
