//! Validation engine.
//!
//! Runs the ten IPA III rule groups against a draft, folds the outcomes into
//! errors, warnings and recommendations, and derives the discrete compliance
//! level. Failure is always data, never a panic or an `Err`.

mod field;
mod rules;

use serde::Serialize;

use super::domain::ProjectRecord;
use super::performance::{assess_performance, PerformanceAssessment};

pub use field::{quality_band, validate_field, FieldValidation, QualityBand};

/// How strongly a finding blocks the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Submission-blocking.
    Critical,
    /// Compliance-blocking but not submission-blocking.
    Major,
    /// Cosmetic.
    Minor,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    pub field: &'static str,
    pub message: String,
    pub impact: String,
}

/// Discrete compliance verdict derived from the accumulated findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceLevel {
    #[serde(rename = "non-compliant")]
    NonCompliant,
    #[serde(rename = "partially-compliant")]
    PartiallyCompliant,
    #[serde(rename = "compliant")]
    Compliant,
    #[serde(rename = "excellent")]
    Excellent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when no critical error is present.
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
    /// Deduplicated, priority items first.
    pub recommendations: Vec<String>,
    pub compliance_level: ComplianceLevel,
}

impl ValidationResult {
    pub fn critical_count(&self) -> usize {
        self.count_severity(Severity::Critical)
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.errors
            .iter()
            .filter(|error| error.severity == severity)
            .count()
    }
}

/// Accumulator shared by the rule groups.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    pub(crate) errors: Vec<ValidationError>,
    pub(crate) warnings: Vec<ValidationWarning>,
    pub(crate) recommendations: Vec<String>,
}

impl Findings {
    pub(crate) fn error(&mut self, field: &'static str, message: impl Into<String>, severity: Severity) {
        self.errors.push(ValidationError {
            field,
            message: message.into(),
            severity,
        });
    }

    pub(crate) fn warning(
        &mut self,
        field: &'static str,
        message: impl Into<String>,
        impact: impl Into<String>,
    ) {
        self.warnings.push(ValidationWarning {
            field,
            message: message.into(),
            impact: impact.into(),
        });
    }

    pub(crate) fn recommend(&mut self, text: impl Into<String>) {
        self.recommendations.push(text.into());
    }
}

/// Validate a draft against the full IPA III rule set.
pub fn validate(record: &ProjectRecord) -> ValidationResult {
    let assessment = assess_performance(record);
    validate_with_assessment(record, &assessment)
}

/// Variant for callers that already hold a performance assessment.
pub fn validate_with_assessment(
    record: &ProjectRecord,
    assessment: &PerformanceAssessment,
) -> ValidationResult {
    let mut findings = Findings::default();

    rules::mandatory_fields(record, &mut findings);
    rules::window_alignment(record, &mut findings);
    rules::budget_sanity(record, &mut findings);
    rules::performance_criteria(assessment, &mut findings);
    rules::climate_target(assessment, &mut findings);
    rules::cross_cutting_priorities(assessment, &mut findings);
    rules::implementation_readiness(record, &mut findings);
    rules::partnership(record, &mut findings);
    rules::monitoring_framework(record, &mut findings);
    rules::sustainability(record, &mut findings);

    let compliance_level =
        rules::compliance_level(&findings.errors, &findings.warnings, assessment);
    rules::final_recommendations(assessment, &mut findings);

    let recommendations = dedupe_preserving_order(findings.recommendations);
    let is_valid = !findings
        .errors
        .iter()
        .any(|error| error.severity == Severity::Critical);

    ValidationResult {
        is_valid,
        errors: findings.errors,
        warnings: findings.warnings,
        recommendations,
        compliance_level,
    }
}

fn dedupe_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
