//! Relevance scoring: how strongly a draft aligns with EU strategic
//! priorities. Six weighted keyword factors over the free-text fields.

use crate::assessment::domain::{present, ProgramWindow, ProjectRecord};

const WINDOW_WEIGHT: f64 = 0.25;
const ACQUIS_WEIGHT: f64 = 0.20;
const NATIONAL_WEIGHT: f64 = 0.15;
const REGIONAL_WEIGHT: f64 = 0.15;
const INNOVATION_WEIGHT: f64 = 0.10;
const SUSTAINABILITY_WEIGHT: f64 = 0.15;

/// EU acquis chapter reference terms checked for coverage.
const ACQUIS_CHAPTERS: [&str; 16] = [
    "judiciary",
    "anti-corruption",
    "public procurement",
    "statistics",
    "financial control",
    "economic criteria",
    "public administration",
    "transport",
    "energy",
    "environment",
    "climate",
    "digital",
    "competitiveness",
    "social policy",
    "education",
    "culture",
];

const NATIONAL_PRIORITY_TERMS: [&str; 6] = [
    "national strategy",
    "government priority",
    "national development",
    "country strategy",
    "national action plan",
    "sectoral strategy",
];

const REGIONAL_TERMS: [&str; 7] = [
    "regional",
    "cross-border",
    "multi-country",
    "western balkans",
    "neighboring",
    "transnational",
    "interregional",
];

const INNOVATION_TERMS: [&str; 9] = [
    "innovative",
    "pilot",
    "first",
    "novel",
    "cutting-edge",
    "state-of-the-art",
    "transformation",
    "modernization",
    "digitalization",
];

fn matched(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| text.contains(*term)).count()
}

/// Strategic-window alignment: a per-window base score raised when the
/// objectives echo the window's headline themes.
fn window_alignment(record: &ProjectRecord) -> f64 {
    let Some(window) = record.ipa_window else {
        return 50.0;
    };

    let (terms, hit, base): (&[&str], f64, f64) = match window {
        ProgramWindow::RuleOfLaw => (&["rule of law", "judicial", "corruption"], 90.0, 60.0),
        ProgramWindow::Governance => (&["governance", "democracy", "civil society"], 90.0, 60.0),
        ProgramWindow::GreenAgenda => (
            &["green", "climate", "sustainable", "environment"],
            95.0,
            65.0,
        ),
        ProgramWindow::Competitiveness => {
            (&["digital", "innovation", "competitiveness"], 90.0, 60.0)
        }
        ProgramWindow::TerritorialCooperation => {
            (&["cross-border", "territorial", "cooperation"], 85.0, 60.0)
        }
    };

    let objectives = record.objectives_lower();
    if matched(&objectives, terms) > 0 {
        hit
    } else {
        base
    }
}

fn acquis_coverage(record: &ProjectRecord) -> f64 {
    let text = format!("{} {}", record.objectives_lower(), record.description_lower());
    let hits = matched(&text, &ACQUIS_CHAPTERS);
    ((hits as f64 / ACQUIS_CHAPTERS.len() as f64) * 200.0).min(100.0)
}

fn national_priority(record: &ProjectRecord) -> f64 {
    let description = record.description_lower();
    if matched(&description, &NATIONAL_PRIORITY_TERMS) > 0 {
        85.0
    } else {
        55.0
    }
}

fn regional_cooperation(record: &ProjectRecord) -> f64 {
    let description = record.description_lower();
    let hits = matched(&description, &REGIONAL_TERMS);
    (50.0 + 10.0 * hits as f64).min(100.0)
}

fn innovation(record: &ProjectRecord) -> f64 {
    let description = record.description_lower();
    let hits = matched(&description, &INNOVATION_TERMS);
    (40.0 + 15.0 * hits as f64).min(100.0)
}

fn sustainability_completeness(record: &ProjectRecord) -> f64 {
    if !present(&record.sustainability) {
        return 0.0;
    }
    let text = record.sustainability.to_lowercase();
    let mut score: f64 = 30.0;
    if text.contains("financial") {
        score += 20.0;
    }
    if text.contains("institutional") {
        score += 20.0;
    }
    if text.contains("environmental") {
        score += 30.0;
    }
    score.min(100.0)
}

/// Relevance score 0-100 per the weighted six-factor model.
pub(crate) fn relevance_score(record: &ProjectRecord) -> u8 {
    let weighted = window_alignment(record) * WINDOW_WEIGHT
        + acquis_coverage(record) * ACQUIS_WEIGHT
        + national_priority(record) * NATIONAL_WEIGHT
        + regional_cooperation(record) * REGIONAL_WEIGHT
        + innovation(record) * INNOVATION_WEIGHT
        + sustainability_completeness(record) * SUSTAINABILITY_WEIGHT;

    weighted.clamp(0.0, 100.0).round() as u8
}
