//! The ten IPA III rule groups plus compliance-level determination.
//!
//! Messages are part of the UI contract; change them only together with the
//! frontend copy.

use crate::assessment::domain::{filled, present, ProgramWindow, ProjectRecord};
use crate::assessment::performance::{PerformanceAssessment, CLIMATE_TARGET_PERCENT};
use crate::assessment::policy::alignment_keywords;

use super::{Findings, Severity, ValidationError, ValidationWarning};

/// Group 1: mandatory field presence and SMART objective coverage.
pub(super) fn mandatory_fields(record: &ProjectRecord, findings: &mut Findings) {
    let required: [(&'static str, &'static str, bool); 6] = [
        ("title", "Project Title", present(&record.title)),
        ("municipality", "Municipality", present(&record.municipality)),
        ("country", "Country", present(&record.country)),
        ("ipaWindow", "IPA Window", record.ipa_window.is_some()),
        ("description", "Project Description", present(&record.description)),
        ("objectives", "Objectives", present(&record.objectives)),
    ];

    for (field, name, is_present) in required {
        if !is_present {
            findings.error(
                field,
                format!("{name} is mandatory for IPA III applications"),
                Severity::Critical,
            );
        } else if field == "description" && record.description.len() < 50 {
            findings.error(
                field,
                "Project description must be at least 50 characters",
                Severity::Major,
            );
        }
    }

    let filled_smart = record.smart_objectives.filled_count(1);
    if filled_smart == 0 {
        findings.error(
            "smartObjectives",
            "At least one SMART objective must be defined",
            Severity::Major,
        );
    } else if filled_smart < 3 {
        findings.error(
            "smartObjectives",
            "At least 3 SMART objectives should be defined for strong applications",
            Severity::Minor,
        );
    }
}

/// Group 2: declared window must be echoed by the draft's content.
pub(super) fn window_alignment(record: &ProjectRecord, findings: &mut Findings) {
    // A missing window is already a critical mandatory-field error.
    let Some(window) = record.ipa_window else {
        return;
    };

    let text = format!("{} {}", record.description, record.objectives).to_lowercase();
    let matched = alignment_keywords(window)
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count();

    if matched == 0 {
        findings.error(
            "ipaWindow",
            format!("Project content does not align with {} priorities", window.id()),
            Severity::Major,
        );
    } else if matched < 2 {
        findings.warning(
            "ipaWindow",
            format!("Weak alignment with {} priorities", window.id()),
            "May reduce relevance score",
        );
    }
}

/// Group 3: budget envelope and co-financing split sanity.
pub(super) fn budget_sanity(record: &ProjectRecord, findings: &mut Findings) {
    if let Some(budget) = record.budget {
        if budget < 100_000.0 {
            findings.warning(
                "budget",
                "Budget below \u{20ac}100,000 may not meet minimum threshold",
                "Consider combining with other initiatives",
            );
        }
        if budget > 10_000_000.0 {
            findings.warning(
                "budget",
                "Budget above \u{20ac}10M requires enhanced justification",
                "Ensure detailed budget breakdown and clear deliverables",
            );
        }
    }

    if let (Some(eu), Some(partner)) = (record.eu_contribution, record.partner_contribution) {
        let total = eu + partner;
        if total > 0.0 {
            let eu_percentage = (eu / total) * 100.0;

            if eu_percentage > 85.0 {
                findings.error(
                    "euContribution",
                    "EU contribution cannot exceed 85% for IPA III projects",
                    Severity::Critical,
                );
            } else if eu_percentage > 80.0 {
                findings.warning(
                    "euContribution",
                    "EU contribution above 80% requires strong justification",
                    "May affect project approval",
                );
            }

            if eu_percentage < 50.0 {
                findings.warning(
                    "euContribution",
                    "Low EU contribution request",
                    "Consider if IPA III is the appropriate funding source",
                );
            }
        }
    }
}

/// Groups 4 and 5: relevance and maturity score thresholds.
pub(super) fn performance_criteria(assessment: &PerformanceAssessment, findings: &mut Findings) {
    let relevance = assessment.relevance_score;
    if relevance < 50 {
        findings.error(
            "relevance",
            "Project relevance score is critically low",
            Severity::Critical,
        );
    } else if relevance < 65 {
        findings.error(
            "relevance",
            "Project does not meet minimum relevance threshold (65)",
            Severity::Major,
        );
    } else if relevance < 75 {
        findings.warning(
            "relevance",
            "Relevance score is acceptable but could be improved",
            "Strengthen alignment with EU priorities",
        );
    }

    let maturity = assessment.maturity_score;
    if maturity < 45 {
        findings.error(
            "maturity",
            "Project is not ready for implementation",
            Severity::Critical,
        );
    } else if maturity < 60 {
        findings.error(
            "maturity",
            "Project does not meet minimum maturity threshold (60)",
            Severity::Major,
        );
    } else if maturity < 70 {
        findings.warning(
            "maturity",
            "Maturity score indicates implementation risks",
            "Develop detailed implementation plan",
        );
    }
}

/// Group 6: the programme-wide climate spending target.
pub(super) fn climate_target(assessment: &PerformanceAssessment, findings: &mut Findings) {
    let climate = assessment.climate_contribution_percent;

    if climate < 10 {
        findings.warning(
            "climate",
            "Very low climate contribution",
            "Consider adding climate-related activities",
        );
    } else if climate < CLIMATE_TARGET_PERCENT {
        findings.error(
            "climate",
            format!(
                "Climate contribution ({climate}%) below IPA III minimum target ({CLIMATE_TARGET_PERCENT}%)"
            ),
            Severity::Major,
        );
    } else if climate < 20 {
        findings.warning(
            "climate",
            "Climate contribution meets minimum but below 2027 target (20%)",
            "Consider enhancing climate components",
        );
    }
}

/// Group 7: horizontal priority floors.
pub(super) fn cross_cutting_priorities(assessment: &PerformanceAssessment, findings: &mut Findings) {
    let priorities = &assessment.cross_cutting;

    if priorities.gender_equality < 30 {
        findings.warning(
            "gender",
            "Insufficient gender equality integration",
            "Add gender-specific objectives and activities",
        );
        findings.recommend("Include gender impact assessment and women empowerment activities");
    }

    if priorities.digital_transformation < 20 {
        findings.recommend(
            "Consider adding digital transformation components to modernize project delivery",
        );
    }

    if priorities.good_governance < 40 {
        findings.warning(
            "governance",
            "Limited good governance elements",
            "Strengthen transparency and accountability measures",
        );
    }

    if priorities.youth_inclusion < 25 {
        findings.recommend("Include youth participation and capacity building activities");
    }

    if priorities.environmental_protection < 30 {
        findings.warning(
            "environment",
            "Low environmental protection focus",
            "Add environmental safeguards and sustainability measures",
        );
    }
}

/// Group 8: implementation plan presence checks.
pub(super) fn implementation_readiness(record: &ProjectRecord, findings: &mut Findings) {
    if record.methodology.len() < 100 {
        findings.warning(
            "methodology",
            "Implementation methodology is insufficient",
            "Develop detailed implementation approach",
        );
    }

    if !filled(&record.timeline) {
        findings.warning(
            "timeline",
            "No implementation timeline provided",
            "Define clear project phases and milestones",
        );
        findings.recommend("Create a detailed Gantt chart with key milestones");
    }

    if !filled(&record.milestones) {
        findings.warning(
            "milestones",
            "No milestones defined",
            "Set measurable milestones for progress tracking",
        );
    }

    if record.risks.len() < 50 {
        findings.warning(
            "risks",
            "Risk assessment is inadequate",
            "Conduct comprehensive risk analysis",
        );
        findings.recommend("Develop risk register with mitigation strategies");
    }
}

/// Group 9: partnership structure; partners are mandatory for cross-border
/// projects.
pub(super) fn partnership(record: &ProjectRecord, findings: &mut Findings) {
    if !filled(&record.lead_partner) {
        findings.warning(
            "leadPartner",
            "No lead partner identified",
            "Identify organization responsible for implementation",
        );
    }

    if !partners_defined(record) {
        findings.warning(
            "partners",
            "No implementation partners defined",
            "Consider partnerships for enhanced capacity",
        );
    }

    if record.ipa_window == Some(ProgramWindow::TerritorialCooperation) && !partners_defined(record)
    {
        findings.warning(
            "partners",
            "Cross-border projects require multiple country partners",
            "Critical requirement for Window 5",
        );
    }
}

// The form serializes an empty partner list as a literal "[]".
fn partners_defined(record: &ProjectRecord) -> bool {
    filled(&record.partners) && record.partners.as_deref() != Some("[]")
}

/// Group 10a: monitoring and evaluation framework presence.
pub(super) fn monitoring_framework(record: &ProjectRecord, findings: &mut Findings) {
    if !filled(&record.monitoring_plan) {
        findings.warning(
            "monitoringPlan",
            "No monitoring and evaluation framework",
            "Define how progress will be measured",
        );
        findings.recommend("Develop M&E framework with clear indicators and verification methods");
    }

    if !filled(&record.indicators) {
        findings.warning(
            "indicators",
            "No performance indicators defined",
            "Set SMART indicators for result measurement",
        );
    }

    if !filled(&record.evaluation_approach) {
        findings.recommend("Include mid-term and final evaluation plans");
    }
}

/// Group 10b: sustainability plan depth and dimension coverage.
pub(super) fn sustainability(record: &ProjectRecord, findings: &mut Findings) {
    if record.sustainability.len() < 100 {
        findings.warning(
            "sustainability",
            "Sustainability plan is insufficient",
            "Demonstrate long-term viability",
        );
    }

    let text = record.sustainability.to_lowercase();
    if !text.contains("financial") {
        findings.recommend("Address financial sustainability beyond project period");
    }
    if !text.contains("institutional") {
        findings.recommend("Define institutional arrangements for continuation");
    }
    if !text.contains("environmental") {
        findings.recommend("Include environmental sustainability measures");
    }
}

/// Pure function of the accumulated findings and the performance score.
pub(super) fn compliance_level(
    errors: &[ValidationError],
    warnings: &[ValidationWarning],
    assessment: &PerformanceAssessment,
) -> super::ComplianceLevel {
    use super::ComplianceLevel::*;

    let critical = errors.iter().filter(|e| e.severity == Severity::Critical).count();
    let major = errors.iter().filter(|e| e.severity == Severity::Major).count();
    let minor = errors.iter().filter(|e| e.severity == Severity::Minor).count();

    if critical > 0 || major > 2 {
        return NonCompliant;
    }
    if major > 0 || assessment.performance_score < 65 {
        return PartiallyCompliant;
    }
    if assessment.performance_score >= 80 && warnings.len() < 3 && minor == 0 {
        return Excellent;
    }
    Compliant
}

/// Prefix priority items and append performance-based closing advice.
pub(super) fn final_recommendations(assessment: &PerformanceAssessment, findings: &mut Findings) {
    if findings.errors.iter().any(|e| e.field == "relevance") {
        findings.recommendations.insert(
            0,
            "PRIORITY: Strengthen strategic alignment with IPA III objectives and EU acquis"
                .to_string(),
        );
    }
    if findings.errors.iter().any(|e| e.field == "maturity") {
        findings.recommendations.insert(
            0,
            "PRIORITY: Develop comprehensive implementation plan with clear deliverables"
                .to_string(),
        );
    }
    if findings.errors.iter().any(|e| e.field == "climate") {
        findings.recommendations.insert(
            0,
            "PRIORITY: Increase climate-related activities to meet 18% minimum target".to_string(),
        );
    }

    if assessment.performance_score < 70 {
        findings.recommend("Consider technical assistance to strengthen project design");
    }
    if assessment.relevance_score > 75 && assessment.maturity_score < 65 {
        findings.recommend(
            "Focus on implementation readiness - good strategic alignment but needs operational planning",
        );
    }
    if assessment.maturity_score > 75 && assessment.relevance_score < 65 {
        findings.recommend(
            "Enhance strategic narrative - implementation ready but needs stronger EU alignment",
        );
    }
    if (75..80).contains(&assessment.performance_score) {
        findings.recommend(
            "Project is close to excellence level - minor improvements could significantly enhance competitiveness",
        );
    }
}
