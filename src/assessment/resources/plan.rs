//! Timeline phasing and staffing recommendations.

use serde::Serialize;

use crate::assessment::municipality::MunicipalityProfile;

use super::complexity::{ComplexityAssessment, ComplexityLevel};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPhase {
    pub name: &'static str,
    pub duration_months: u32,
    pub start_month: u32,
    pub activities: &'static [&'static str],
    pub dependencies: &'static [&'static str],
    /// Share of the total budget assigned to this phase, 0-1.
    pub budget_share: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePlan {
    pub recommended_duration_months: u32,
    pub phases: Vec<ProjectPhase>,
    pub critical_path: &'static [&'static str],
    pub seasonal_considerations: &'static [&'static str],
    /// Recommended schedule buffer, percent.
    pub buffer_percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Junior,
    Senior,
    Expert,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffingRole {
    pub role: &'static str,
    pub person_months: u32,
    pub skill_level: SkillLevel,
    /// Monthly cost, EUR.
    pub monthly_cost: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffingPlan {
    pub total_person_months: u32,
    pub key_roles: Vec<StaffingRole>,
    pub skills_needed: &'static [&'static str],
    /// Capacity-building budget, EUR.
    pub training_budget: u32,
}

const CRITICAL_PATH: [&str; 5] = [
    "Project setup and partnership agreements",
    "Procurement processes",
    "Core implementation activities",
    "Quality assurance and testing",
    "Final evaluation and reporting",
];

const SEASONAL_CONSIDERATIONS: [&str; 3] = [
    "Summer months may affect staff availability",
    "End-of-year budget cycles may impact procurement",
    "Holiday periods require activity planning adjustments",
];

const SETUP_ACTIVITIES: [&str; 5] = [
    "Project team establishment",
    "Stakeholder engagement",
    "Detailed planning and design",
    "Procurement preparation",
    "Baseline studies",
];

const IMPLEMENTATION_ACTIVITIES: [&str; 5] = [
    "Main project activities execution",
    "Infrastructure development",
    "Capacity building programs",
    "System deployment",
    "Continuous monitoring",
];

const FINALIZATION_ACTIVITIES: [&str; 5] = [
    "Final testing and quality assurance",
    "Impact evaluation",
    "Sustainability planning",
    "Knowledge transfer",
    "Final reporting",
];

const SKILLS_NEEDED: [&str; 6] = [
    "EU project management",
    "Stakeholder engagement",
    "Technical implementation",
    "Monitoring and evaluation",
    "Financial management",
    "Communication and dissemination",
];

pub(super) fn plan_timeline(
    profile: Option<&MunicipalityProfile>,
    complexity: &ComplexityAssessment,
) -> TimelinePlan {
    let mut duration: i64 = match complexity.level {
        ComplexityLevel::Simple => 18,
        ComplexityLevel::Moderate => 24,
        ComplexityLevel::Complex => 30,
        ComplexityLevel::VeryComplex => 36,
    };

    if let Some(profile) = profile {
        if profile.eu_compliance_level < 5 {
            duration += 6;
        } else if profile.eu_compliance_level > 7 {
            duration -= 3;
        }
    }

    let duration = duration.clamp(12, 48) as u32;

    TimelinePlan {
        recommended_duration_months: duration,
        phases: phases_for(duration),
        critical_path: &CRITICAL_PATH,
        seasonal_considerations: &SEASONAL_CONSIDERATIONS,
        buffer_percent: 15,
    }
}

fn phases_for(duration: u32) -> Vec<ProjectPhase> {
    let setup = ((duration as f64) * 0.2).round() as u32;
    let implementation = ((duration as f64) * 0.6).round() as u32;
    let finalization = duration - setup - implementation;

    vec![
        ProjectPhase {
            name: "Project Setup & Planning",
            duration_months: setup,
            start_month: 1,
            activities: &SETUP_ACTIVITIES,
            dependencies: &[],
            budget_share: 0.15,
        },
        ProjectPhase {
            name: "Core Implementation",
            duration_months: implementation,
            start_month: setup + 1,
            activities: &IMPLEMENTATION_ACTIVITIES,
            dependencies: &["Project Setup & Planning"],
            budget_share: 0.70,
        },
        ProjectPhase {
            name: "Finalization & Evaluation",
            duration_months: finalization,
            start_month: setup + implementation + 1,
            activities: &FINALIZATION_ACTIVITIES,
            dependencies: &["Core Implementation"],
            budget_share: 0.15,
        },
    ]
}

pub(super) fn plan_staffing(
    profile: Option<&MunicipalityProfile>,
    complexity: &ComplexityAssessment,
) -> StaffingPlan {
    let base_person_months = complexity.score * 8.0;

    let adjustment = match profile {
        Some(profile) if profile.population > 200_000 => 1.2,
        Some(profile) if profile.population < 50_000 => 0.8,
        _ => 1.0,
    };

    let total = (base_person_months * adjustment).round() as u32;
    let share = |fraction: f64| ((total as f64) * fraction).round() as u32;

    let key_roles = vec![
        StaffingRole {
            role: "Project Manager",
            person_months: share(0.2),
            skill_level: SkillLevel::Expert,
            monthly_cost: 4_500,
        },
        StaffingRole {
            role: "Technical Expert",
            person_months: share(0.3),
            skill_level: SkillLevel::Senior,
            monthly_cost: 3_500,
        },
        StaffingRole {
            role: "Municipal Liaison",
            person_months: share(0.15),
            skill_level: SkillLevel::Senior,
            monthly_cost: 2_800,
        },
        StaffingRole {
            role: "Administrative Support",
            person_months: share(0.2),
            skill_level: SkillLevel::Junior,
            monthly_cost: 2_000,
        },
        StaffingRole {
            role: "Specialist Consultant",
            person_months: share(0.15),
            skill_level: SkillLevel::Expert,
            monthly_cost: 5_000,
        },
    ];

    StaffingPlan {
        total_person_months: total,
        key_roles,
        skills_needed: &SKILLS_NEEDED,
        training_budget: total * 500,
    }
}
