use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use riskdesk::scoring::corporate::{
    AlertError, AlertPublisher, AssessmentEngine, AssessmentId, AssessmentRecord,
    AssessmentRepository, AssessmentSubmission, BorrowerMeta, CompanyProfile, FinancialInputs,
    RepositoryError, ReviewAlert,
};
use riskdesk::scoring::prediction::{ModelGateway, PredictionError, PredictionResponse};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
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
        if guard.contains_key(&record.profile.assessment_id) {
            guard.insert(record.profile.assessment_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAlertPublisher {
    events: Arc<Mutex<Vec<ReviewAlert>>>,
}

impl AlertPublisher for InMemoryAlertPublisher {
    fn publish(&self, alert: ReviewAlert) -> Result<(), AlertError> {
        let mut guard = self.events.lock().expect("alert mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

impl InMemoryAlertPublisher {
    pub(crate) fn events(&self) -> Vec<ReviewAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

/// Gateway backed by the local scorecard. Stands in for the remote model
/// until one is wired up; it reports the repayment probability, so callers
/// exercise the same inversion path the real endpoint needs.
#[derive(Default, Clone)]
pub(crate) struct ScorecardModelGateway {
    engine: AssessmentEngine,
}

impl ModelGateway for ScorecardModelGateway {
    fn predict(&self, profile: &CompanyProfile) -> Result<PredictionResponse, PredictionError> {
        let assessment = self.engine.assess(profile);
        Ok(PredictionResponse {
            p_hat: None,
            model_raw: Some(1.0 - assessment.probability_of_default),
            model_version: Some("Corporate-Risk-v0.9".to_string()),
        })
    }
}

/// Built-in sample company used by the demo command and smoke checks.
pub(crate) fn sample_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        meta: BorrowerMeta {
            company_name: "Hanbit Precision Co.".to_string(),
            reg_no: "123-45-67890".to_string(),
            industry: Some("C26".to_string()),
            fiscal_year: "2024".to_string(),
        },
        statement_date: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date"),
        financials: FinancialInputs {
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
        },
    }
}
