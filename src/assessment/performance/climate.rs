//! Climate-contribution attribution: the share of a project's budget
//! counted towards the programme's climate spending target.

use crate::assessment::domain::{ProgramWindow, ProjectRecord};

/// Activities counted as direct climate action, attributed at 60% of budget.
const DIRECT_CLIMATE_TERMS: [&str; 13] = [
    "renewable energy",
    "solar",
    "wind",
    "hydro",
    "energy efficiency",
    "insulation",
    "green infrastructure",
    "climate adaptation",
    "climate mitigation",
    "carbon reduction",
    "electric vehicle",
    "sustainable transport",
    "cycling infrastructure",
];

/// Activities with indirect climate benefit, attributed at a 40%-counted
/// 30% share (12% of budget).
const INDIRECT_CLIMATE_TERMS: [&str; 9] = [
    "sustainable",
    "circular economy",
    "waste management",
    "water management",
    "biodiversity",
    "forest",
    "agriculture",
    "smart city",
    "digital transformation",
];

const DIRECT_SHARE: f64 = 0.6;
const INDIRECT_SHARE: f64 = 0.3 * 0.4;
const GREEN_WINDOW_FLOOR: f64 = 0.5;

/// Climate attribution for one draft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateContribution {
    /// Budget amount attributed to climate action, EUR.
    pub amount: f64,
    /// Attributed amount as a share of total budget, 0-100.
    pub percent: u8,
}

pub(crate) fn climate_contribution(record: &ProjectRecord) -> ClimateContribution {
    let Some(budget) = record.budget.filter(|value| value.is_finite() && *value > 0.0) else {
        return ClimateContribution {
            amount: 0.0,
            percent: 0,
        };
    };

    let description = record.description_lower();
    let objectives = record.objectives_lower();
    let direct = DIRECT_CLIMATE_TERMS
        .iter()
        .any(|term| description.contains(term) || objectives.contains(term));

    let mut amount = if direct {
        budget * DIRECT_SHARE
    } else if INDIRECT_CLIMATE_TERMS
        .iter()
        .any(|term| description.contains(term))
    {
        budget * INDIRECT_SHARE
    } else {
        0.0
    };

    // Green Agenda projects are floored at half the budget regardless of
    // keyword matches.
    if record.ipa_window == Some(ProgramWindow::GreenAgenda) {
        amount = amount.max(budget * GREEN_WINDOW_FLOOR);
    }

    let percent = ((amount / budget) * 100.0).min(100.0).round() as u8;

    ClimateContribution { amount, percent }
}
