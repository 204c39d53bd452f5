use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::domain::{AssessmentId, AssessmentSubmission, Scenario};
use super::repository::{AlertPublisher, AssessmentRepository, RepositoryError};
use super::service::{AssessmentServiceError, RiskAssessmentService};
use crate::scoring::personal::{self, LoanScenario, PersonalGrade};
use crate::scoring::prediction::ModelGateway;

/// Router builder exposing the assessment and prediction endpoints.
pub fn assessment_router<R, A, G>(service: Arc<RiskAssessmentService<R, A, G>>) -> Router
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
    G: ModelGateway + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_handler::<R, A, G>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(status_handler::<R, A, G>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/what-if",
            post(what_if_handler::<R, A, G>),
        )
        .route(
            "/api/v1/predict/corporate",
            post(predict_corporate_handler::<R, A, G>),
        )
        .route("/api/v1/predict/personal", post(predict_personal_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler<R, A, G>(
    State(service): State<Arc<RiskAssessmentService<R, A, G>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
    G: ModelGateway + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.summary_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "assessment already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, A, G>(
    State(service): State<Arc<RiskAssessmentService<R, A, G>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
    G: ModelGateway + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.summary_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "assessment_id": id.0,
                "error": "assessment not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn what_if_handler<R, A, G>(
    State(service): State<Arc<RiskAssessmentService<R, A, G>>>,
    Path(assessment_id): Path<String>,
    axum::Json(scenario): axum::Json<Scenario>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
    G: ModelGateway + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.what_if(&id, &scenario) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "assessment_id": id.0,
                "error": "assessment not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn predict_corporate_handler<R, A, G>(
    State(service): State<Arc<RiskAssessmentService<R, A, G>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AlertPublisher + 'static,
    G: ModelGateway + 'static,
{
    match service.predict(submission) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(AssessmentServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Prediction(error)) => {
            warn!(%error, "prediction round-trip failed");
            let payload = json!({
                "error": "prediction temporarily unavailable",
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PersonalPredictRequest {
    pub(crate) grade: PersonalGrade,
    #[serde(flatten)]
    pub(crate) scenario: LoanScenario,
}

#[derive(Debug, Serialize)]
pub(crate) struct PersonalPredictResponse {
    pub(crate) p_hat: f64,
    pub(crate) threshold: f64,
    pub(crate) decision: &'static str,
    pub(crate) recommended_limit: f64,
}

pub(crate) async fn predict_personal_handler(
    axum::Json(request): axum::Json<PersonalPredictRequest>,
) -> Response {
    let theta = request.grade.approval_threshold();
    let p_hat = personal::estimate_probability(&request.scenario, request.grade);
    let decision = personal::decide(p_hat, theta);
    let recommended_limit = personal::recommend_limit(&request.scenario, request.grade, theta);

    let response = PersonalPredictResponse {
        p_hat,
        threshold: theta,
        decision: decision.label(),
        recommended_limit,
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}
