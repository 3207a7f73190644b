//! Resource optimizer.
//!
//! Recommends a budget envelope, phased timeline and staffing plan for a
//! draft, from the window's policy tables and the municipality profile,
//! scaled by the complexity signal.

mod budget;
mod complexity;
mod plan;

use serde::Serialize;

use super::domain::ProjectRecord;
use super::municipality::{profile_for, MunicipalityProfile};
use super::synergy::detect_synergies;

pub use budget::{BudgetAlternative, BudgetBreakdown, BudgetPlan, BudgetScenario, CoFinancing};
pub use complexity::{assess_complexity, ComplexityAssessment, ComplexityLevel};
pub use plan::{ProjectPhase, SkillLevel, StaffingPlan, StaffingRole, TimelinePlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Budget,
    Timeline,
    Personnel,
    Technical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskRating {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRisk {
    pub category: RiskCategory,
    pub risk: &'static str,
    pub probability: RiskRating,
    pub impact: RiskRating,
    pub mitigation: &'static str,
}

/// Full resource recommendation for one draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOptimization {
    pub complexity: ComplexityAssessment,
    pub budget: BudgetPlan,
    pub timeline: TimelinePlan,
    pub personnel: StaffingPlan,
    pub risks: Vec<ResourceRisk>,
    pub recommendations: Vec<&'static str>,
    /// Confidence in the recommendation, 0-0.95.
    pub confidence: f64,
}

/// Recommend resources for a draft in the named municipality.
///
/// Uses the declared window's policy tables; when no window is declared the
/// synergy classifier's primary window stands in.
pub fn optimize_resources(record: &ProjectRecord, municipality_name: &str) -> ResourceOptimization {
    let profile = profile_for(municipality_name);
    let window = record
        .ipa_window
        .unwrap_or_else(|| detect_synergies(record).primary_window);

    let complexity = assess_complexity(record);
    let budget = budget::plan_budget(window, profile, &complexity);
    let timeline = plan::plan_timeline(profile, &complexity);
    let personnel = plan::plan_staffing(profile, &complexity);
    let risks = identify_risks(profile, &budget, &timeline);
    let recommendations = resource_recommendations(profile, &budget, &timeline, &personnel);
    let confidence = confidence_score(record, profile, &complexity);

    ResourceOptimization {
        complexity,
        budget,
        timeline,
        personnel,
        risks,
        recommendations,
        confidence,
    }
}

fn identify_risks(
    profile: Option<&MunicipalityProfile>,
    budget: &BudgetPlan,
    timeline: &TimelinePlan,
) -> Vec<ResourceRisk> {
    let mut risks = Vec::new();

    if budget.recommended_total > 2_000_000.0 {
        risks.push(ResourceRisk {
            category: RiskCategory::Budget,
            risk: "High budget may face procurement complexity",
            probability: RiskRating::Medium,
            impact: RiskRating::High,
            mitigation: "Prepare detailed procurement plan with EU compliance expertise",
        });
    }

    if profile.is_some() && budget.co_financing.municipal_contribution > 15 {
        risks.push(ResourceRisk {
            category: RiskCategory::Budget,
            risk: "Municipal co-financing capacity may be limited",
            probability: RiskRating::Medium,
            impact: RiskRating::Medium,
            mitigation: "Secure municipal commitment and explore alternative financing sources",
        });
    }

    if timeline.recommended_duration_months > 30 {
        risks.push(ResourceRisk {
            category: RiskCategory::Timeline,
            risk: "Extended timeline increases implementation risks",
            probability: RiskRating::Medium,
            impact: RiskRating::Medium,
            mitigation: "Implement robust project management and regular milestone reviews",
        });
    }

    if let Some(profile) = profile {
        if profile.eu_compliance_level < 6 {
            risks.push(ResourceRisk {
                category: RiskCategory::Personnel,
                risk: "Limited municipal EU project experience",
                probability: RiskRating::High,
                impact: RiskRating::Medium,
                mitigation: "Include extensive capacity building and external technical assistance",
            });
        }
    }

    risks
}

fn resource_recommendations(
    profile: Option<&MunicipalityProfile>,
    budget: &BudgetPlan,
    timeline: &TimelinePlan,
    personnel: &StaffingPlan,
) -> Vec<&'static str> {
    let mut recommendations = Vec::new();

    if budget.recommended_total > 1_000_000.0 {
        recommendations
            .push("Consider phased implementation approach to manage large budget effectively");
    }
    if timeline.recommended_duration_months > 24 {
        recommendations
            .push("Plan for extended timeline with interim milestones and regular reviews");
    }
    if personnel.total_person_months > 50 {
        recommendations
            .push("Establish strong project management structure with clear role definitions");
    }

    if let Some(profile) = profile {
        if profile.eu_compliance_level < 6 {
            recommendations
                .push("Prioritize capacity building and EU compliance training for municipal staff");
        }
        if profile.gdp_per_capita < 6_000 {
            recommendations
                .push("Leverage higher EU co-financing rates and seek additional support mechanisms");
        }
    }

    recommendations
        .push("Align resource allocation with IPA III assessment criteria for maximum scoring");
    recommendations
        .push("Implement robust monitoring system to track resource utilization and outcomes");

    recommendations
}

fn confidence_score(
    record: &ProjectRecord,
    profile: Option<&MunicipalityProfile>,
    complexity: &ComplexityAssessment,
) -> f64 {
    let mut confidence: f64 = 0.5;

    if !record.title.trim().is_empty() && !record.description.trim().is_empty() {
        confidence += 0.2;
    }
    if profile.is_some() {
        confidence += 0.15;
    }
    if record.budget.is_some() && record.duration_months.is_some() {
        confidence += 0.1;
    }
    if !record.objectives.trim().is_empty() {
        confidence += 0.05;
    }

    match complexity.level {
        ComplexityLevel::Simple => confidence += 0.1,
        ComplexityLevel::VeryComplex => confidence -= 0.05,
        _ => {}
    }

    confidence.min(0.95)
}
