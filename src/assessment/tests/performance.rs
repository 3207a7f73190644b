use super::common::*;

use crate::assessment::domain::{ProgramWindow, ProjectRecord};
use crate::assessment::performance::assess_performance;

#[test]
fn blended_score_is_the_sixty_forty_mix() {
    let mut partial = solar_rooftop_record();
    partial.methodology.clear();
    partial.milestones = None;
    partial.budget_breakdown = None;

    for record in [empty_record(), partial, solar_rooftop_record()] {
        let assessment = assess_performance(&record);
        let expected = (0.6 * assessment.relevance_score as f64
            + 0.4 * assessment.maturity_score as f64)
            .round() as u8;
        assert_eq!(assessment.performance_score, expected);
    }
}

#[test]
fn empty_draft_baseline_scores() {
    let assessment = assess_performance(&empty_record());

    assert_eq!(assessment.relevance_score, 32);
    assert_eq!(assessment.maturity_score, 3);
    assert_eq!(assessment.performance_score, 20);
    assert_eq!(assessment.climate_contribution_percent, 0);
    assert_eq!(assessment.climate_contribution_amount, 0.0);

    assert!(!assessment.compliance.relevance_aligned);
    assert!(!assessment.compliance.maturity_ready);
    assert!(!assessment.compliance.climate_target_met);
    assert!(!assessment.compliance.overall);
}

#[test]
fn complete_green_agenda_draft_scores() {
    let assessment = assess_performance(&solar_rooftop_record());

    assert_eq!(assessment.relevance_score, 84);
    assert_eq!(assessment.maturity_score, 100);
    assert_eq!(assessment.performance_score, 90);

    // Direct climate keywords attribute 60% of the EUR 1m budget.
    assert_eq!(assessment.climate_contribution_percent, 60);
    assert_eq!(assessment.climate_contribution_amount, 600_000.0);

    assert!(assessment.compliance.relevance_aligned);
    assert!(assessment.compliance.maturity_ready);
    assert!(assessment.compliance.climate_target_met);
    assert!(assessment.compliance.overall);
}

#[test]
fn indirect_climate_terms_attribute_twelve_percent() {
    let record = ProjectRecord {
        ipa_window: Some(ProgramWindow::Competitiveness),
        description: "Improved waste management services for the metropolitan district."
            .to_string(),
        budget: Some(200_000.0),
        ..ProjectRecord::default()
    };

    let assessment = assess_performance(&record);
    assert_eq!(assessment.climate_contribution_percent, 12);
    assert_eq!(assessment.climate_contribution_amount, 24_000.0);
}

#[test]
fn green_agenda_floor_applies_without_climate_keywords() {
    let record = ProjectRecord {
        ipa_window: Some(ProgramWindow::GreenAgenda),
        description: "Administrative reform of the municipal permit office.".to_string(),
        budget: Some(400_000.0),
        ..ProjectRecord::default()
    };

    let assessment = assess_performance(&record);
    assert_eq!(assessment.climate_contribution_percent, 50);
    assert_eq!(assessment.climate_contribution_amount, 200_000.0);
}

#[test]
fn missing_budget_yields_zero_climate_attribution() {
    let mut record = solar_rooftop_record();
    record.budget = None;

    let assessment = assess_performance(&record);
    assert_eq!(assessment.climate_contribution_percent, 0);
    assert_eq!(assessment.climate_contribution_amount, 0.0);
}

#[test]
fn indicator_catalog_pairs_window_and_universal_entries() {
    let assessment = assess_performance(&solar_rooftop_record());
    let ids: Vec<&str> = assessment
        .indicators
        .iter()
        .map(|indicator| indicator.id)
        .collect();
    assert_eq!(
        ids,
        [
            "w3_co2_reduction",
            "w3_renewable_capacity",
            "common_budget_execution",
            "common_beneficiaries",
        ]
    );

    let no_window = assess_performance(&empty_record());
    let ids: Vec<&str> = no_window
        .indicators
        .iter()
        .map(|indicator| indicator.id)
        .collect();
    assert_eq!(ids, ["common_budget_execution", "common_beneficiaries"]);
}

#[test]
fn assessment_is_deterministic() {
    let record = solar_rooftop_record();
    let first = serde_json::to_value(assess_performance(&record)).expect("serializes");
    let second = serde_json::to_value(assess_performance(&record)).expect("serializes");
    assert_eq!(first, second);
}

#[test]
fn low_scores_trigger_critical_recommendations() {
    let assessment = assess_performance(&empty_record());
    let recommendations = &assessment.recommendations;

    assert!(recommendations
        .iter()
        .any(|r| r.starts_with("CRITICAL: Project relevance is too low")));
    assert!(recommendations
        .iter()
        .any(|r| r.starts_with("CRITICAL: Project maturity is insufficient")));
    assert!(recommendations
        .iter()
        .any(|r| r.contains("Climate contribution is 0%, below the 18% IPA III target")));
}

#[test]
fn strong_draft_keeps_recommendations_short() {
    let assessment = assess_performance(&solar_rooftop_record());

    // Only the gender-equality nudge remains for this draft.
    assert_eq!(assessment.recommendations.len(), 1);
    assert!(assessment.recommendations[0].contains("gender equality"));
}
