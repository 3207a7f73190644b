//! Maturity scoring: how implementation-ready a draft is. Seven weighted
//! completeness factors over structured and free-text fields.

use crate::assessment::domain::{filled, present, ProjectRecord};

const IMPLEMENTATION_WEIGHT: f64 = 0.20;
const BUDGET_WEIGHT: f64 = 0.15;
const PARTNER_WEIGHT: f64 = 0.15;
const RISK_WEIGHT: f64 = 0.15;
const MONITORING_WEIGHT: f64 = 0.10;
const TIMELINE_WEIGHT: f64 = 0.10;
const TECHNICAL_WEIGHT: f64 = 0.15;

fn implementation_plan(record: &ProjectRecord) -> f64 {
    let mut score = 0.0;
    if present(&record.methodology) {
        score += 20.0;
    }
    // Short methodologies still earn the length bonus's floor value.
    score += if record.methodology.len() > 200 { 15.0 } else { 5.0 };
    if filled(&record.activities) {
        score += 15.0;
    }
    if filled(&record.deliverables) {
        score += 15.0;
    }
    if filled(&record.timeline) {
        score += 15.0;
    }
    if filled(&record.milestones) {
        score += 20.0;
    }
    score
}

fn budget_clarity(record: &ProjectRecord) -> f64 {
    let mut score = 0.0;
    if record.budget.is_some() {
        score += 30.0;
    }
    if record.eu_contribution.is_some() {
        score += 20.0;
    }
    if record.partner_contribution.is_some() {
        score += 20.0;
    }
    if filled(&record.budget_breakdown) {
        score += 30.0;
    }
    score
}

fn partner_capacity(record: &ProjectRecord) -> f64 {
    let mut score = 0.0;
    if filled(&record.lead_partner) {
        score += 25.0;
    }
    if filled(&record.partners) {
        score += 25.0;
    }
    if filled(&record.partner_experience) {
        score += 25.0;
    }
    if filled(&record.partner_roles) {
        score += 25.0;
    }
    score
}

fn risk_management(record: &ProjectRecord) -> f64 {
    let mut score = 0.0;
    if present(&record.risks) {
        score += 30.0;
    }
    let risks = record.risks.to_lowercase();
    if risks.contains("technical") {
        score += 15.0;
    }
    if risks.contains("financial") {
        score += 15.0;
    }
    if risks.contains("organizational") {
        score += 15.0;
    }
    if filled(&record.mitigation) {
        score += 25.0;
    }
    score
}

fn monitoring_framework(record: &ProjectRecord) -> f64 {
    let mut score = 0.0;
    if filled(&record.indicators) {
        score += 40.0;
    }
    if filled(&record.monitoring_plan) {
        score += 30.0;
    }
    if filled(&record.evaluation_approach) {
        score += 30.0;
    }
    score
}

fn timeline_realism(record: &ProjectRecord) -> f64 {
    let mut score = 0.0;
    if record.duration_months.is_some() {
        score += 30.0;
    }
    // Durations inside the typical 12-36 month band score higher; the lower
    // award also applies when no duration is given at all.
    score += match record.duration_months {
        Some(months) if (12..=36).contains(&months) => 40.0,
        _ => 20.0,
    };
    if filled(&record.phases) {
        score += 30.0;
    }
    score
}

fn technical_readiness(record: &ProjectRecord) -> f64 {
    let mut score = 0.0;
    if filled(&record.technical_specifications) {
        score += 35.0;
    }
    if filled(&record.feasibility_study) {
        score += 35.0;
    }
    if filled(&record.preparatory_work) {
        score += 30.0;
    }
    score
}

/// Maturity score 0-100 per the weighted seven-factor model.
pub(crate) fn maturity_score(record: &ProjectRecord) -> u8 {
    let weighted = implementation_plan(record) * IMPLEMENTATION_WEIGHT
        + budget_clarity(record) * BUDGET_WEIGHT
        + partner_capacity(record) * PARTNER_WEIGHT
        + risk_management(record) * RISK_WEIGHT
        + monitoring_framework(record) * MONITORING_WEIGHT
        + timeline_realism(record) * TIMELINE_WEIGHT
        + technical_readiness(record) * TECHNICAL_WEIGHT;

    weighted.clamp(0.0, 100.0).round() as u8
}
