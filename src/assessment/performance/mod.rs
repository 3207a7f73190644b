//! Performance assessment engine.
//!
//! Produces the standardized relevance, maturity, climate, and cross-cutting
//! scores for a draft, together with the window's indicator catalog entries,
//! threshold-driven recommendations, and pass/fail compliance flags.

mod climate;
mod cross_cutting;
mod maturity;
mod relevance;

use serde::Serialize;

use super::domain::ProjectRecord;
use super::policy::{window_indicators, IndicatorCategory, IndicatorSpec, UNIVERSAL_INDICATORS};

pub use climate::ClimateContribution;
pub use cross_cutting::CrossCuttingPriorities;

pub(crate) use climate::climate_contribution;
pub(crate) use maturity::maturity_score;
pub(crate) use relevance::relevance_score;

const RELEVANCE_BLEND: f64 = 0.6;
const MATURITY_BLEND: f64 = 0.4;

/// Minimum climate-contribution percentage expected of every project.
pub const CLIMATE_TARGET_PERCENT: u8 = 18;

/// One monitoring indicator a project is expected to report against.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceIndicator {
    pub id: &'static str,
    pub category: IndicatorCategory,
    pub description: &'static str,
    pub target: f64,
    pub baseline: f64,
    pub unit: &'static str,
    pub verification: &'static str,
}

impl From<&'static IndicatorSpec> for PerformanceIndicator {
    fn from(spec: &'static IndicatorSpec) -> Self {
        Self {
            id: spec.id,
            category: spec.category,
            description: spec.description,
            target: spec.target,
            baseline: spec.baseline,
            unit: spec.unit,
            verification: spec.verification,
        }
    }
}

/// Pass/fail flags derived from the score thresholds.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceFlags {
    pub relevance_aligned: bool,
    pub maturity_ready: bool,
    pub climate_target_met: bool,
    pub overall: bool,
}

/// Full performance picture for one draft.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAssessment {
    pub relevance_score: u8,
    pub maturity_score: u8,
    /// Fixed 60/40 blend of relevance and maturity.
    pub performance_score: u8,
    pub climate_contribution_percent: u8,
    /// Budget amount attributed to climate action, EUR.
    pub climate_contribution_amount: f64,
    pub cross_cutting: CrossCuttingPriorities,
    pub indicators: Vec<PerformanceIndicator>,
    pub recommendations: Vec<String>,
    pub compliance: ComplianceFlags,
}

/// Assess a draft's performance. Pure and deterministic over the record.
pub fn assess_performance(record: &ProjectRecord) -> PerformanceAssessment {
    let relevance = relevance_score(record);
    let maturity = maturity_score(record);
    let performance =
        (RELEVANCE_BLEND * relevance as f64 + MATURITY_BLEND * maturity as f64).round() as u8;

    let climate = climate_contribution(record);
    let cross_cutting = cross_cutting::cross_cutting_priorities(record, &climate);

    let compliance = ComplianceFlags {
        relevance_aligned: relevance >= 65,
        maturity_ready: maturity >= 60,
        climate_target_met: climate.percent >= CLIMATE_TARGET_PERCENT,
        overall: relevance >= 65 && maturity >= 60,
    };

    PerformanceAssessment {
        relevance_score: relevance,
        maturity_score: maturity,
        performance_score: performance,
        climate_contribution_percent: climate.percent,
        climate_contribution_amount: climate.amount,
        cross_cutting,
        indicators: indicator_catalog(record),
        recommendations: score_recommendations(relevance, maturity, &climate, &cross_cutting),
        compliance,
    }
}

/// Window-specific indicator pair (when a window is declared) plus the two
/// universal indicators every project reports.
fn indicator_catalog(record: &ProjectRecord) -> Vec<PerformanceIndicator> {
    let mut indicators = Vec::with_capacity(4);
    if let Some(window) = record.ipa_window {
        indicators.extend(window_indicators(window).iter().map(PerformanceIndicator::from));
    }
    indicators.extend(UNIVERSAL_INDICATORS.iter().map(PerformanceIndicator::from));
    indicators
}

fn score_recommendations(
    relevance: u8,
    maturity: u8,
    climate: &ClimateContribution,
    cross_cutting: &CrossCuttingPriorities,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if relevance < 70 {
        recommendations.push(
            "Strengthen alignment with EU acquis chapters relevant to your window".to_string(),
        );
        recommendations
            .push("Reference national and sectoral strategies in the project description".to_string());
    }
    if relevance < 50 {
        recommendations.push(
            "CRITICAL: Project relevance is too low for IPA III funding - rework objectives around the selected window's priorities"
                .to_string(),
        );
    }

    if maturity < 70 {
        recommendations
            .push("Complete the implementation plan with activities, deliverables and milestones".to_string());
        recommendations
            .push("Document partner capacity and a monitoring framework with indicators".to_string());
    }
    if maturity < 50 {
        recommendations.push(
            "CRITICAL: Project maturity is insufficient - the application needs substantial preparation before submission"
                .to_string(),
        );
    }

    if climate.percent < CLIMATE_TARGET_PERCENT {
        recommendations.push(format!(
            "IMPORTANT: Climate contribution is {}%, below the {}% IPA III target - add climate-relevant activities",
            climate.percent, CLIMATE_TARGET_PERCENT
        ));
    }

    if cross_cutting.gender_equality < 40 {
        recommendations
            .push("Integrate gender equality measures into project activities".to_string());
    }
    if cross_cutting.digital_transformation < 30 {
        recommendations.push("Consider digital components to modernize delivery".to_string());
    }
    if cross_cutting.youth_inclusion < 30 {
        recommendations.push("Include youth engagement or skills development elements".to_string());
    }

    recommendations
}
