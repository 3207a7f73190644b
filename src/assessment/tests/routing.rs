use super::common::*;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::assessment::domain::ProjectRecord;
use crate::assessment::router::assessment_router;

fn post_json(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request builds")
}

fn record_body(record: &ProjectRecord) -> Vec<u8> {
    serde_json::to_vec(record).expect("record serializes")
}

#[tokio::test]
async fn score_route_returns_section_metrics() {
    let response = assessment_router()
        .oneshot(post_json(
            "/api/v1/projects/score",
            record_body(&solar_rooftop_record()),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["windowId"], json!("window3"));
    assert_eq!(payload["totalScore"], json!(100));
    assert_eq!(payload["sections"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn validate_route_flags_empty_drafts() {
    let response = assessment_router()
        .oneshot(post_json(
            "/api/v1/projects/validate",
            record_body(&empty_record()),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["isValid"], json!(false));
    assert_eq!(payload["complianceLevel"], json!("non-compliant"));
    assert!(!payload["errors"].as_array().expect("errors array").is_empty());
}

#[tokio::test]
async fn assess_route_combines_compliance_and_performance() {
    let response = assessment_router()
        .oneshot(post_json(
            "/api/v1/projects/assess",
            record_body(&solar_rooftop_record()),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["compliance"]["totalScore"], json!(100));
    assert_eq!(payload["performance"]["performanceScore"], json!(90));
}

#[tokio::test]
async fn optimize_route_defaults_to_the_draft_municipality() {
    let body = serde_json::to_vec(&json!({ "project": solar_rooftop_record() }))
        .expect("request serializes");

    let response = assessment_router()
        .oneshot(post_json("/api/v1/projects/optimize", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["briefing"]["profileFound"], json!(true));
    assert!(payload["optimization"]["budget"]["recommendedTotal"]
        .as_f64()
        .expect("total present")
        > 0.0);
}

#[tokio::test]
async fn validation_report_route_renders_plain_text() {
    let response = assessment_router()
        .oneshot(post_json(
            "/api/v1/projects/validate/report",
            record_body(&solar_rooftop_record()),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/plain; charset=utf-8")
    );

    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body is readable");
    let text = String::from_utf8(bytes.to_vec()).expect("body is utf-8");
    assert!(text.contains("IPA III COMPLIANCE VALIDATION REPORT"));
    assert!(text.contains("VALIDATION RESULT: PASS"));
}

#[tokio::test]
async fn malformed_payloads_are_rejected() {
    let response = assessment_router()
        .oneshot(post_json(
            "/api/v1/projects/score",
            b"not a json object".to_vec(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
