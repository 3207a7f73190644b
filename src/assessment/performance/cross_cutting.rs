//! Cross-cutting priority scoring: the six horizontal policy dimensions
//! every project is assessed on regardless of its window.

use serde::Serialize;

use crate::assessment::domain::ProjectRecord;

use super::climate::ClimateContribution;

const GENDER_TERMS: [&str; 5] = ["gender", "women", "equality", "inclusion", "empowerment"];
const ENVIRONMENT_TERMS: [&str; 5] = [
    "environment",
    "ecosystem",
    "biodiversity",
    "conservation",
    "pollution",
];
const DIGITAL_TERMS: [&str; 6] = ["digital", "ict", "e-governance", "online", "software", "platform"];
const GOVERNANCE_TERMS: [&str; 5] = [
    "transparency",
    "accountability",
    "participation",
    "integrity",
    "efficiency",
];
const YOUTH_TERMS: [&str; 6] = ["youth", "young", "students", "education", "skills", "training"];

/// The six horizontal priority sub-scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossCuttingPriorities {
    pub gender_equality: u8,
    pub environmental_protection: u8,
    pub climate_action: u8,
    pub digital_transformation: u8,
    pub good_governance: u8,
    pub youth_inclusion: u8,
}

fn keyword_score(text: &str, terms: &[&str], baseline: f64, multiplier: f64) -> u8 {
    let hits = terms.iter().filter(|term| text.contains(*term)).count();
    (baseline + hits as f64 * multiplier).clamp(0.0, 100.0) as u8
}

/// Score the six priorities from the description text; climate action reuses
/// the budget-attribution percentage instead of its own keyword scan.
pub(crate) fn cross_cutting_priorities(
    record: &ProjectRecord,
    climate: &ClimateContribution,
) -> CrossCuttingPriorities {
    let description = record.description_lower();

    CrossCuttingPriorities {
        gender_equality: keyword_score(&description, &GENDER_TERMS, 30.0, 20.0),
        environmental_protection: keyword_score(&description, &ENVIRONMENT_TERMS, 30.0, 20.0),
        climate_action: climate.percent,
        digital_transformation: keyword_score(&description, &DIGITAL_TERMS, 20.0, 20.0),
        good_governance: keyword_score(&description, &GOVERNANCE_TERMS, 30.0, 18.0),
        youth_inclusion: keyword_score(&description, &YOUTH_TERMS, 20.0, 20.0),
    }
}
