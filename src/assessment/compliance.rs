//! Section compliance scorer.
//!
//! Walks the checklist sections of the applicable [`PolicyProfile`], applies
//! the profile's weight and threshold overrides, and folds the per-item
//! booleans into per-section percentages and a weighted total. Pure over the
//! input record; the UI progress display consumes the output verbatim.

use serde::Serialize;

use super::domain::{ProgramWindow, ProjectRecord};
use super::policy::{base_sections, profile_for, PolicyProfile, SectionId};

/// Window a record is scored against when the applicant left it unset.
const FALLBACK_WINDOW: ProgramWindow = ProgramWindow::GreenAgenda;

/// Outcome of one checklist item, with the drafting guidance attached so the
/// UI can render a fix-it hint without a second lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResult {
    pub id: &'static str,
    pub label: &'static str,
    pub met: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub guidance: &'static str,
}

/// One scored checklist section after profile overrides.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResult {
    pub id: SectionId,
    pub label: &'static str,
    /// Effective weight after renormalization, sums to 1 across sections.
    pub weight: f64,
    pub threshold: u8,
    /// Share of met items in this section, 0-100.
    pub percentage: u8,
    /// Contribution of this section to the total score, 0-100 points.
    pub weighted_contribution: u8,
    pub meets_threshold: bool,
    pub items: Vec<ItemResult>,
}

/// Full compliance picture for one draft against one window profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceMetrics {
    pub window_id: &'static str,
    pub window_label: &'static str,
    pub window_threshold: u8,
    pub total_score: u8,
    pub meets_window_threshold: bool,
    pub sections: Vec<SectionResult>,
}

/// Score a draft against its declared window's checklist profile.
///
/// Records without a declared window are scored against the
/// [`FALLBACK_WINDOW`] profile so partially filled drafts still get a
/// meaningful progress number.
pub fn score_compliance(record: &ProjectRecord) -> ComplianceMetrics {
    let window = record.ipa_window.unwrap_or(FALLBACK_WINDOW);
    let profile = profile_for(Some(window));
    score_with_profile(record, profile)
}

pub(crate) fn score_with_profile(
    record: &ProjectRecord,
    profile: &PolicyProfile,
) -> ComplianceMetrics {
    let sections = base_sections();

    let effective: Vec<(f64, u8)> = sections
        .iter()
        .map(|section| {
            let override_entry = profile.override_for(section.id);
            let weight = override_entry
                .and_then(|entry| entry.weight)
                .unwrap_or(section.weight);
            let threshold = override_entry
                .and_then(|entry| entry.threshold)
                .unwrap_or(section.threshold);
            (weight, threshold)
        })
        .collect();

    let weight_sum: f64 = effective.iter().map(|(weight, _)| *weight).sum();

    let mut total = 0u32;
    let mut scored_sections = Vec::with_capacity(sections.len());

    for (section, (weight, threshold)) in sections.iter().zip(effective) {
        let normalized_weight = if weight_sum > 0.0 {
            weight / weight_sum
        } else {
            0.0
        };

        let items: Vec<ItemResult> = section
            .items
            .iter()
            .map(|item| {
                let outcome = (item.evaluate)(record);
                ItemResult {
                    id: item.id,
                    label: item.label,
                    met: outcome.met,
                    detail: outcome.detail,
                    guidance: item.guidance,
                }
            })
            .collect();

        let met = items.iter().filter(|item| item.met).count();
        let percentage = if items.is_empty() {
            0
        } else {
            ((met as f64 / items.len() as f64) * 100.0).round() as u8
        };
        let weighted_contribution =
            ((percentage as f64 / 100.0) * normalized_weight * 100.0).round() as u8;

        total += weighted_contribution as u32;

        scored_sections.push(SectionResult {
            id: section.id,
            label: section.label,
            weight: normalized_weight,
            threshold,
            percentage,
            weighted_contribution,
            meets_threshold: percentage >= threshold,
            items,
        });
    }

    let total_score = total.min(100) as u8;

    ComplianceMetrics {
        window_id: profile.window_id(),
        window_label: profile.label,
        window_threshold: profile.window_threshold,
        total_score,
        meets_window_threshold: total_score >= profile.window_threshold,
        sections: scored_sections,
    }
}
