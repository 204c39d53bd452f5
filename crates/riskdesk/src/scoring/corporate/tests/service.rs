use std::sync::Arc;

use super::common::*;
use crate::scoring::corporate::domain::{RiskGrade, Scenario};
use crate::scoring::corporate::repository::AssessmentRepository;
use crate::scoring::corporate::service::AssessmentServiceError;
use crate::scoring::corporate::{IntakeViolation, RiskAssessmentService};
use crate::scoring::prediction::PredictionError;

#[test]
fn submit_scores_and_stores_the_statement() {
    let (service, repository, alerts) = build_service();

    let record = service.submit(submission()).expect("submission scores");

    assert!(record.profile.assessment_id.0.starts_with("cra-"));
    assert_eq!(record.assessment.grade, RiskGrade::BPlus);
    assert_eq!(record.what_if_count, 0);
    assert_eq!(record.model_version, "Corporate-Risk-v0.9");

    let stored = repository
        .fetch(&record.profile.assessment_id)
        .expect("repo fetch")
        .expect("record present");
    assert_eq!(stored.assessment, record.assessment);

    // Hold tone with no danger flags: nobody gets paged.
    assert!(alerts.events().is_empty());
}

#[test]
fn submit_rejects_invalid_statements_without_storing() {
    let (service, repository, _) = build_service();
    let mut bad = submission();
    bad.financials.cogs = bad.financials.net_sales * 2.0;

    match service.submit(bad) {
        Err(AssessmentServiceError::Intake(IntakeViolation::CostExceedsRevenue { .. })) => {}
        other => panic!("expected intake rejection, got {other:?}"),
    }

    assert!(repository.records.lock().expect("lock").is_empty());
}

#[test]
fn distressed_statements_page_the_review_desk() {
    let (service, _, alerts) = build_service();
    let mut distressed = submission();
    distressed.financials.current_assets = 900.0;
    distressed.financials.long_term_debt = 5000.0;
    distressed.financials.retained_earnings = 0.0;
    distressed.financials.market_value = 0.0;

    let record = service.submit(distressed).expect("submission scores");

    let events = alerts.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].assessment_id, record.profile.assessment_id);
    assert!(events[0]
        .reasons
        .iter()
        .any(|reason| reason.contains("current ratio")));
}

#[test]
fn what_if_persists_the_perturbed_assessment() {
    let (service, repository, _) = build_service();
    let record = service.submit(submission()).expect("submission scores");

    let scenario = Scenario {
        revenue_delta: 40.0,
        ..Scenario::default()
    };
    let outcome = service
        .what_if(&record.profile.assessment_id, &scenario)
        .expect("what-if applies");

    let stored = repository
        .fetch(&record.profile.assessment_id)
        .expect("repo fetch")
        .expect("record present");

    assert_eq!(
        stored.assessment.probability_of_default,
        outcome.probability_of_default
    );
    assert_eq!(stored.assessment.grade, outcome.grade);
    assert_eq!(stored.assessment.terms, outcome.terms);
    assert_eq!(stored.what_if_count, 1);
}

#[test]
fn zero_what_if_leaves_the_record_unchanged_except_the_counter() {
    let (service, repository, _) = build_service();
    let record = service.submit(submission()).expect("submission scores");
    let before = record.assessment.clone();

    service
        .what_if(&record.profile.assessment_id, &Scenario::default())
        .expect("what-if applies");

    let stored = repository
        .fetch(&record.profile.assessment_id)
        .expect("repo fetch")
        .expect("record present");
    assert_eq!(stored.assessment, before);
    assert_eq!(stored.what_if_count, 1);
}

#[test]
fn what_if_on_unknown_assessment_reports_not_found() {
    let (service, _, _) = build_service();

    let result = service.what_if(
        &crate::scoring::corporate::AssessmentId("cra-999999".to_string()),
        &Scenario::default(),
    );

    assert!(matches!(
        result,
        Err(AssessmentServiceError::Repository(
            crate::scoring::corporate::RepositoryError::NotFound
        ))
    ));
}

#[test]
fn predict_inverts_model_raw_responses() {
    let (service, _, _) = build_service();

    let outcome = service.predict(submission()).expect("gateway answers");

    assert!((outcome.p_hat - 0.38).abs() < 1e-12);
    assert_eq!(outcome.model_version, "Corporate-Risk-v0.9");
}

#[test]
fn predict_surfaces_gateway_outages() {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service = RiskAssessmentService::new(repository, alerts, Arc::new(OfflineGateway));

    assert!(matches!(
        service.predict(submission()),
        Err(AssessmentServiceError::Prediction(
            PredictionError::Unavailable(_)
        ))
    ));
}

#[test]
fn predict_rejects_malformed_model_responses() {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service = RiskAssessmentService::new(repository, alerts, Arc::new(malformed_gateway()));

    assert!(matches!(
        service.predict(submission()),
        Err(AssessmentServiceError::Prediction(
            PredictionError::MalformedResponse
        ))
    ));
}
