//! Synergy detection: which programme windows a draft's text resonates
//! with beyond its declared primary window.
//!
//! The keyword heuristic is deliberately isolated behind [`WindowClassifier`]
//! so a smarter classifier can replace it without touching callers.

use serde::Serialize;

use super::domain::{ProgramWindow, ProjectRecord};
use super::policy::synergy_keywords;

/// Minimum keyword hits for a non-primary window to count as a synergy.
const SYNERGY_HIT_THRESHOLD: usize = 2;
const MAX_SYNERGY_WINDOWS: usize = 2;

/// Fixed order in which synergy recommendations are emitted, independent of
/// the hit ranking used for `synergy_windows`.
const RECOMMENDATION_ORDER: [ProgramWindow; 5] = [
    ProgramWindow::GreenAgenda,
    ProgramWindow::Competitiveness,
    ProgramWindow::Governance,
    ProgramWindow::RuleOfLaw,
    ProgramWindow::TerritorialCooperation,
];

/// Outcome of classifying one draft's window resonance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynergyResult {
    /// Declared window, or the highest-scoring one when none is declared.
    pub primary_window: ProgramWindow,
    /// Secondary windows the text resonates with, strongest first, max 2.
    pub synergy_windows: Vec<ProgramWindow>,
    /// Normalized overall resonance, 0 when no synergy window qualifies.
    pub synergy_score: f64,
    pub recommendations: Vec<String>,
}

/// Maps a draft's text content onto the programme windows.
pub trait WindowClassifier {
    fn classify(&self, record: &ProjectRecord) -> SynergyResult;
}

/// Substring-count classifier over the per-window keyword tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    fn window_hits(text: &str) -> [(ProgramWindow, usize); 5] {
        ProgramWindow::ALL.map(|window| {
            let hits = synergy_keywords(window)
                .iter()
                .map(|keyword| text.matches(keyword).count())
                .sum();
            (window, hits)
        })
    }
}

impl WindowClassifier for KeywordClassifier {
    fn classify(&self, record: &ProjectRecord) -> SynergyResult {
        let text = record.narrative();
        let scores = Self::window_hits(&text);

        let primary_window = record.ipa_window.unwrap_or_else(|| {
            scores
                .iter()
                .max_by_key(|(_, hits)| *hits)
                .map(|(window, _)| *window)
                .unwrap_or(ProgramWindow::GreenAgenda)
        });

        let mut candidates: Vec<(ProgramWindow, usize)> = scores
            .iter()
            .copied()
            .filter(|(window, hits)| *window != primary_window && *hits >= SYNERGY_HIT_THRESHOLD)
            .collect();
        // Stable sort keeps catalog order for equal hit counts.
        candidates.sort_by(|a, b| b.1.cmp(&a.1));
        candidates.truncate(MAX_SYNERGY_WINDOWS);

        let synergy_windows: Vec<ProgramWindow> =
            candidates.iter().map(|(window, _)| *window).collect();

        let total_hits: usize = scores.iter().map(|(_, hits)| hits).sum();
        let synergy_score = if synergy_windows.is_empty() {
            0.0
        } else {
            (total_hits as f64 / 10.0).min(1.0)
        };

        let recommendations = RECOMMENDATION_ORDER
            .iter()
            .filter(|window| synergy_windows.contains(window))
            .map(|window| synergy_recommendation(*window))
            .collect();

        SynergyResult {
            primary_window,
            synergy_windows,
            synergy_score,
            recommendations,
        }
    }
}

fn synergy_recommendation(window: ProgramWindow) -> String {
    let hint = match window {
        ProgramWindow::RuleOfLaw => {
            "highlight transparency and integrity safeguards to tap rule-of-law co-funding"
        }
        ProgramWindow::Governance => {
            "involve citizen participation and public administration partners"
        }
        ProgramWindow::GreenAgenda => {
            "quantify environmental benefits to strengthen the green dimension"
        }
        ProgramWindow::Competitiveness => {
            "add digital or innovation components attractive to competitiveness calls"
        }
        ProgramWindow::TerritorialCooperation => {
            "consider a cross-border partner to unlock territorial cooperation funds"
        }
    };
    format!(
        "Synergy with {}: {}",
        window.title(),
        hint
    )
}

/// Classify with the default keyword classifier.
pub fn detect_synergies(record: &ProjectRecord) -> SynergyResult {
    KeywordClassifier.classify(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(description: &str, window: Option<ProgramWindow>) -> ProjectRecord {
        ProjectRecord {
            title: "Municipal modernization".to_string(),
            description: description.to_string(),
            ipa_window: window,
            ..ProjectRecord::default()
        }
    }

    #[test]
    fn declared_window_stays_primary() {
        let record = record_with(
            "digital innovation technology smart business",
            Some(ProgramWindow::GreenAgenda),
        );
        let result = detect_synergies(&record);
        assert_eq!(result.primary_window, ProgramWindow::GreenAgenda);
        assert!(result
            .synergy_windows
            .contains(&ProgramWindow::Competitiveness));
    }

    #[test]
    fn undeclared_window_inferred_from_text() {
        let record = record_with("renewable energy and climate action with waste reduction", None);
        let result = detect_synergies(&record);
        assert_eq!(result.primary_window, ProgramWindow::GreenAgenda);
    }

    #[test]
    fn no_resonance_yields_zero_score() {
        let record = record_with("", Some(ProgramWindow::RuleOfLaw));
        let result = detect_synergies(&record);
        assert!(result.synergy_windows.is_empty());
        assert_eq!(result.synergy_score, 0.0);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn recommendations_follow_the_fixed_window_order() {
        // Governance scores more hits than Green Agenda, so the windows are
        // ranked Governance first, but the recommendation list still leads
        // with the green hint.
        let record = record_with(
            "citizen participation in municipal public services alongside climate and energy upgrades",
            Some(ProgramWindow::RuleOfLaw),
        );
        let result = detect_synergies(&record);
        assert_eq!(
            result.synergy_windows,
            vec![ProgramWindow::Governance, ProgramWindow::GreenAgenda]
        );
        assert_eq!(result.recommendations.len(), 2);
        assert!(result.recommendations[0].contains(ProgramWindow::GreenAgenda.title()));
        assert!(result.recommendations[1].contains(ProgramWindow::Governance.title()));
    }

    #[test]
    fn at_most_two_synergy_windows() {
        let record = record_with(
            "digital innovation smart governance participation citizen services cooperation cross-border regional climate energy renewable",
            Some(ProgramWindow::RuleOfLaw),
        );
        let result = detect_synergies(&record);
        assert!(result.synergy_windows.len() <= 2);
        assert!(result.synergy_score > 0.0 && result.synergy_score <= 1.0);
    }
}
