//! Budget recommendation: total, category breakdown, co-financing split and
//! the three fixed scenario alternatives.

use serde::Serialize;

use crate::assessment::domain::ProgramWindow;
use crate::assessment::municipality::MunicipalityProfile;
use crate::assessment::policy::{breakdown_ratios, budget_range};

use super::complexity::ComplexityAssessment;

/// Fallback attributes for municipalities outside the directory.
const DEFAULT_POPULATION: u32 = 100_000;
const DEFAULT_GDP_PER_CAPITA: u32 = 6_000;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub personnel: f64,
    pub equipment: f64,
    pub services: f64,
    pub travel: f64,
    pub infrastructure: f64,
    pub other: f64,
}

impl BudgetBreakdown {
    pub fn total(&self) -> f64 {
        self.personnel + self.equipment + self.services + self.travel + self.infrastructure
            + self.other
    }
}

/// EU / national / municipal shares, always summing to 100.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoFinancing {
    pub eu_contribution: u8,
    pub national_contribution: u8,
    pub municipal_contribution: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetScenario {
    Minimal,
    Standard,
    Enhanced,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlternative {
    pub scenario: BudgetScenario,
    pub total: f64,
    pub description: &'static str,
    pub impact: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan {
    pub recommended_total: f64,
    pub breakdown: BudgetBreakdown,
    pub co_financing: CoFinancing,
    pub justification: String,
    pub alternatives: Vec<BudgetAlternative>,
}

pub(super) fn plan_budget(
    window: ProgramWindow,
    profile: Option<&MunicipalityProfile>,
    complexity: &ComplexityAssessment,
) -> BudgetPlan {
    let population = profile.map(|p| p.population).unwrap_or(DEFAULT_POPULATION);
    let gdp_per_capita = profile
        .map(|p| p.gdp_per_capita)
        .unwrap_or(DEFAULT_GDP_PER_CAPITA);

    let range = budget_range(window);
    let mut amount = range.avg;

    if population > 500_000 {
        amount *= 1.3;
    } else if population < 50_000 {
        amount *= 0.6;
    }

    amount *= 1.0 + (complexity.score - 3.0) * 0.15;
    amount *= (gdp_per_capita as f64 / 7_000.0).min(1.4);

    let recommended_total = amount.clamp(range.min, range.max).round();

    let breakdown = plan_breakdown(window, recommended_total);
    let co_financing = plan_co_financing(profile);

    let alternatives = vec![
        BudgetAlternative {
            scenario: BudgetScenario::Minimal,
            total: (recommended_total * 0.7).round(),
            description: "Focused on core objectives with reduced scope",
            impact: "Limited reach but achievable with high success probability",
        },
        BudgetAlternative {
            scenario: BudgetScenario::Standard,
            total: recommended_total,
            description: "Balanced approach covering all main objectives",
            impact: "Optimal balance of ambition and feasibility",
        },
        BudgetAlternative {
            scenario: BudgetScenario::Enhanced,
            total: (recommended_total * 1.4).round(),
            description: "Extended scope with innovation and regional impact",
            impact: "Maximum impact potential with higher implementation complexity",
        },
    ];

    let justification = justification_text(recommended_total, &breakdown, profile, window);

    BudgetPlan {
        recommended_total,
        breakdown,
        co_financing,
        justification,
        alternatives,
    }
}

/// The `other` category absorbs rounding remainders so the six categories
/// always sum exactly to the total.
fn plan_breakdown(window: ProgramWindow, total: f64) -> BudgetBreakdown {
    let ratios = breakdown_ratios(window);
    let personnel = (total * ratios.personnel).round();
    let equipment = (total * ratios.equipment).round();
    let services = (total * ratios.services).round();
    let travel = (total * ratios.travel).round();
    let infrastructure = (total * ratios.infrastructure).round();
    let other = total - personnel - equipment - services - travel - infrastructure;

    BudgetBreakdown {
        personnel,
        equipment,
        services,
        travel,
        infrastructure,
        other,
    }
}

/// The municipal share is floored at 5%; the national share gives up the
/// difference so the three rates sum to 100.
fn plan_co_financing(profile: Option<&MunicipalityProfile>) -> CoFinancing {
    let mut eu_rate: u8 = 75;

    if let Some(profile) = profile {
        if profile.gdp_per_capita < 5_000 {
            eu_rate = 85;
        } else if profile.gdp_per_capita > 8_000 {
            eu_rate = 65;
        }
        if profile.eu_compliance_level < 5 {
            eu_rate = (eu_rate + 5).min(85);
        }
    }

    let national_rate = (100 - eu_rate).max(10);
    let municipal_rate = (100u8.saturating_sub(eu_rate + national_rate)).max(5);
    let national_rate = 100 - eu_rate - municipal_rate;

    CoFinancing {
        eu_contribution: eu_rate,
        national_contribution: national_rate,
        municipal_contribution: municipal_rate,
    }
}

fn justification_text(
    total: f64,
    breakdown: &BudgetBreakdown,
    profile: Option<&MunicipalityProfile>,
    window: ProgramWindow,
) -> String {
    let municipality_info = match profile {
        Some(profile) => format!("for {} (population: {})", profile.name, profile.population),
        None => "for this municipality".to_string(),
    };

    let personnel_share = ((breakdown.personnel / total) * 100.0).round() as u32;
    let equipment_services_share =
        (((breakdown.equipment + breakdown.services) / total) * 100.0).round() as u32;

    format!(
        "Budget of \u{20ac}{total:.0} is optimized {municipality_info} based on IPA III {} requirements. \
         Allocation prioritizes personnel ({personnel_share}%) and equipment/services ({equipment_services_share}%) \
         to ensure effective implementation while maintaining cost-efficiency standards for municipal-level EU projects.",
        window.id()
    )
}
