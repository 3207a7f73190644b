//! Plain-text report rendering for download/export. External-facing only;
//! the structured results are the authoritative output.

use chrono::{SecondsFormat, Utc};

use super::domain::ProjectRecord;
use super::performance::PerformanceAssessment;
use super::validation::{ComplianceLevel, ValidationResult};

const RULE: &str = "=====================================";

/// Render the full compliance validation report for one draft.
pub fn validation_report(validation: &ValidationResult, record: &ProjectRecord) -> String {
    let title = if record.title.trim().is_empty() {
        "Untitled"
    } else {
        record.title.as_str()
    };
    let municipality = if record.municipality.trim().is_empty() {
        "Not specified"
    } else {
        record.municipality.as_str()
    };
    let window = record
        .ipa_window
        .map(|window| window.id())
        .unwrap_or("Not selected");

    let errors = if validation.errors.is_empty() {
        "No errors found".to_string()
    } else {
        validation
            .errors
            .iter()
            .map(|e| {
                format!(
                    "[{}] {}: {}",
                    format!("{:?}", e.severity).to_uppercase(),
                    e.field,
                    e.message
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let warnings = if validation.warnings.is_empty() {
        "No warnings".to_string()
    } else {
        validation
            .warnings
            .iter()
            .map(|w| format!("{}: {}\n  Impact: {}", w.field, w.message, w.impact))
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    let recommendations = if validation.recommendations.is_empty() {
        "No additional recommendations".to_string()
    } else {
        validation
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}. {}", i + 1, r))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let status = compliance_label(validation.compliance_level);
    let verdict = if validation.is_valid { "PASS" } else { "FAIL" };
    let next_steps = next_steps(validation.compliance_level);
    let generated = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    format!(
        "IPA III COMPLIANCE VALIDATION REPORT\n{RULE}\n\
         Project: {title}\n\
         Municipality: {municipality}\n\
         IPA Window: {window}\n\
         Date: {generated}\n\n\
         COMPLIANCE STATUS: {status}\n\
         VALIDATION RESULT: {verdict}\n\n\
         {RULE}\nERRORS ({})\n{RULE}\n{errors}\n\n\
         {RULE}\nWARNINGS ({})\n{RULE}\n{warnings}\n\n\
         {RULE}\nRECOMMENDATIONS ({})\n{RULE}\n{recommendations}\n\n\
         {RULE}\nNEXT STEPS\n{RULE}\n{next_steps}\n",
        validation.errors.len(),
        validation.warnings.len(),
        validation.recommendations.len(),
    )
}

fn compliance_label(level: ComplianceLevel) -> &'static str {
    match level {
        ComplianceLevel::NonCompliant => "NON-COMPLIANT",
        ComplianceLevel::PartiallyCompliant => "PARTIALLY-COMPLIANT",
        ComplianceLevel::Compliant => "COMPLIANT",
        ComplianceLevel::Excellent => "EXCELLENT",
    }
}

fn next_steps(level: ComplianceLevel) -> &'static str {
    match level {
        ComplianceLevel::NonCompliant => {
            "1. Address all critical and major errors\n\
             2. Strengthen project design based on recommendations\n\
             3. Consider technical assistance for project development"
        }
        ComplianceLevel::PartiallyCompliant => {
            "1. Resolve remaining major errors\n\
             2. Implement key recommendations\n\
             3. Enhance weak areas identified in warnings"
        }
        ComplianceLevel::Compliant => {
            "1. Address any remaining warnings\n\
             2. Consider recommendations for strengthening\n\
             3. Proceed with application submission"
        }
        ComplianceLevel::Excellent => {
            "1. Minor refinements based on recommendations\n\
             2. Prepare for fast-track review\n\
             3. Consider as best practice example"
        }
    }
}

/// Render a compact performance summary for one draft.
pub fn performance_report(assessment: &PerformanceAssessment, record: &ProjectRecord) -> String {
    let title = if record.title.trim().is_empty() {
        "Untitled"
    } else {
        record.title.as_str()
    };
    let generated = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let indicators = assessment
        .indicators
        .iter()
        .map(|i| {
            format!(
                "- {} [{:?}]: target {} {} (baseline {}), verified via {}",
                i.description, i.category, i.target, i.unit, i.baseline, i.verification
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let recommendations = if assessment.recommendations.is_empty() {
        "None".to_string()
    } else {
        assessment
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}. {}", i + 1, r))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let cc = &assessment.cross_cutting;

    format!(
        "IPA III PERFORMANCE ASSESSMENT\n{RULE}\n\
         Project: {title}\n\
         Date: {generated}\n\n\
         Relevance: {}/100\n\
         Maturity: {}/100\n\
         Performance score: {}/100\n\
         Climate contribution: {}% (\u{20ac}{:.0})\n\n\
         Cross-cutting priorities:\n\
         - Gender equality: {}\n\
         - Environmental protection: {}\n\
         - Climate action: {}\n\
         - Digital transformation: {}\n\
         - Good governance: {}\n\
         - Youth inclusion: {}\n\n\
         Indicators:\n{indicators}\n\n\
         Recommendations:\n{recommendations}\n",
        assessment.relevance_score,
        assessment.maturity_score,
        assessment.performance_score,
        assessment.climate_contribution_percent,
        assessment.climate_contribution_amount,
        cc.gender_equality,
        cc.environmental_protection,
        cc.climate_action,
        cc.digital_transformation,
        cc.good_governance,
        cc.youth_inclusion,
    )
}
