use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::compliance::{score_compliance, ComplianceMetrics};
use super::domain::ProjectRecord;
use super::municipality::{briefing, MunicipalityBriefing};
use super::performance::{assess_performance, PerformanceAssessment};
use super::report;
use super::resources::{optimize_resources, ResourceOptimization};
use super::validation::{validate_with_assessment, ValidationResult};

/// Router builder exposing the assessment engine over HTTP.
///
/// Every endpoint is a pure function of the posted draft; there is no
/// request state to carry.
pub fn assessment_router() -> Router {
    Router::new()
        .route("/api/v1/projects/score", post(score_handler))
        .route("/api/v1/projects/assess", post(assess_handler))
        .route("/api/v1/projects/validate", post(validate_handler))
        .route("/api/v1/projects/validate/report", post(validation_report_handler))
        .route("/api/v1/projects/optimize", post(optimize_handler))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssessResponse {
    pub(crate) compliance: ComplianceMetrics,
    pub(crate) performance: PerformanceAssessment,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OptimizeRequest {
    pub(crate) project: ProjectRecord,
    /// Defaults to the project's own municipality field.
    #[serde(default)]
    pub(crate) municipality: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OptimizeResponse {
    pub(crate) optimization: ResourceOptimization,
    pub(crate) briefing: MunicipalityBriefing,
}

pub(crate) async fn score_handler(Json(record): Json<ProjectRecord>) -> Response {
    let metrics = score_compliance(&record);
    (StatusCode::OK, Json(metrics)).into_response()
}

pub(crate) async fn assess_handler(Json(record): Json<ProjectRecord>) -> Response {
    let response = AssessResponse {
        compliance: score_compliance(&record),
        performance: assess_performance(&record),
    };
    (StatusCode::OK, Json(response)).into_response()
}

pub(crate) async fn validate_handler(Json(record): Json<ProjectRecord>) -> Response {
    let assessment = assess_performance(&record);
    let validation: ValidationResult = validate_with_assessment(&record, &assessment);
    (StatusCode::OK, Json(validation)).into_response()
}

pub(crate) async fn validation_report_handler(Json(record): Json<ProjectRecord>) -> Response {
    let assessment = assess_performance(&record);
    let validation = validate_with_assessment(&record, &assessment);
    let text = report::validation_report(&validation, &record);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response()
}

pub(crate) async fn optimize_handler(Json(request): Json<OptimizeRequest>) -> Response {
    let OptimizeRequest {
        project,
        municipality,
    } = request;

    let municipality = municipality.unwrap_or_else(|| project.municipality.clone());
    let response = OptimizeResponse {
        optimization: optimize_resources(&project, &municipality),
        briefing: briefing(&municipality, &project),
    };
    (StatusCode::OK, Json(response)).into_response()
}
