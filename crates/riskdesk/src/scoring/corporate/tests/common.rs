use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::scoring::corporate::domain::{
    AssessmentId, AssessmentSubmission, BorrowerMeta, CompanyProfile, FinancialInputs,
};
use crate::scoring::corporate::evaluation::AssessmentEngine;
use crate::scoring::corporate::intake::IntakeGuard;
use crate::scoring::corporate::repository::{
    AlertError, AlertPublisher, AssessmentRecord, AssessmentRepository, RepositoryError,
    ReviewAlert,
};
use crate::scoring::corporate::{assessment_router, RiskAssessmentService};
use crate::scoring::prediction::{ModelGateway, PredictionError, PredictionResponse};

pub(super) fn meta() -> BorrowerMeta {
    BorrowerMeta {
        company_name: "Hanbit Precision Co.".to_string(),
        reg_no: "123-45-67890".to_string(),
        industry: Some("C26".to_string()),
        fiscal_year: "2024".to_string(),
    }
}

/// The reference statement used across the suite. Chosen so the pipeline
/// lands mid-ladder: PD ~0.414, grade B+, a hold tone, and a single
/// informational flag.
pub(super) fn financials() -> FinancialInputs {
    FinancialInputs {
        net_sales: 5200.0,
        cogs: 3600.0,
        depreciation: 210.0,
        ebit: 430.0,
        net_income: 270.0,
        inventory: 620.0,
        receivables: 830.0,
        current_assets: 3100.0,
        current_liabilities: 1850.0,
        long_term_debt: 1150.0,
        retained_earnings: 950.0,
        market_value: 15200.0,
    }
}

pub(super) fn submission() -> AssessmentSubmission {
    AssessmentSubmission {
        meta: meta(),
        statement_date: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date"),
        financials: financials(),
    }
}

pub(super) fn profile() -> CompanyProfile {
    IntakeGuard
        .profile_from_submission(submission())
        .expect("reference statement passes intake")
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::new()
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.profile.assessment_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<ReviewAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<ReviewAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: ReviewAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

/// Gateway answering every call with one canned response.
#[derive(Clone)]
pub(super) struct StaticGateway {
    pub(super) response: PredictionResponse,
}

impl ModelGateway for StaticGateway {
    fn predict(&self, _profile: &CompanyProfile) -> Result<PredictionResponse, PredictionError> {
        Ok(self.response.clone())
    }
}

pub(super) struct OfflineGateway;

impl ModelGateway for OfflineGateway {
    fn predict(&self, _profile: &CompanyProfile) -> Result<PredictionResponse, PredictionError> {
        Err(PredictionError::Unavailable("connection refused".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn model_raw_gateway() -> StaticGateway {
    StaticGateway {
        response: PredictionResponse {
            p_hat: None,
            model_raw: Some(0.62),
            model_version: Some("Corporate-Risk-v0.9".to_string()),
        },
    }
}

pub(super) fn malformed_gateway() -> StaticGateway {
    StaticGateway {
        response: PredictionResponse::default(),
    }
}

pub(super) type TestService = RiskAssessmentService<MemoryRepository, MemoryAlerts, StaticGateway>;

pub(super) fn build_service() -> (TestService, Arc<MemoryRepository>, Arc<MemoryAlerts>) {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let gateway = Arc::new(model_raw_gateway());
    let service = RiskAssessmentService::new(repository.clone(), alerts.clone(), gateway);
    (service, repository, alerts)
}

pub(super) fn router_with_service(service: TestService) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
