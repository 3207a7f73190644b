//! Complexity signal feeding budget, timeline and staffing decisions.

use serde::Serialize;

use crate::assessment::domain::ProjectRecord;

const TECH_TERMS: [&str; 6] = ["digital", "smart", "iot", "ai", "blockchain", "system integration"];
const STAKEHOLDER_TERMS: [&str; 4] = ["partnership", "cooperation", "cross-border", "multi"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

/// A draft's estimated delivery complexity on a 1-10 scale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityAssessment {
    pub score: f64,
    pub level: ComplexityLevel,
    pub factors: Vec<String>,
}

pub fn assess_complexity(record: &ProjectRecord) -> ComplexityAssessment {
    let content = record.narrative();
    let mut score = 3.0;
    let mut factors = Vec::new();

    let tech_matches: Vec<&str> = TECH_TERMS
        .iter()
        .filter(|term| content.contains(*term))
        .copied()
        .collect();
    if !tech_matches.is_empty() {
        score += (tech_matches.len() as f64 * 0.8).min(2.0);
        factors.push(format!("Technical complexity: {}", tech_matches.join(", ")));
    }

    if content.contains("infrastructure") || content.contains("construction") {
        score += 1.5;
        factors.push("Infrastructure development required".to_string());
    }

    if STAKEHOLDER_TERMS.iter().any(|term| content.contains(term)) {
        score += 1.0;
        factors.push("Multi-stakeholder coordination required".to_string());
    }

    if content.contains("legal") || content.contains("regulation") || content.contains("compliance")
    {
        score += 1.0;
        factors.push("Regulatory/legal complexity".to_string());
    }

    if content.contains("innovative") || content.contains("pilot") || content.contains("first") {
        score += 1.5;
        factors.push("Innovation/pilot project complexity".to_string());
    }

    let score = score.min(10.0);
    let level = if score <= 4.0 {
        ComplexityLevel::Simple
    } else if score <= 6.0 {
        ComplexityLevel::Moderate
    } else if score <= 8.0 {
        ComplexityLevel::Complex
    } else {
        ComplexityLevel::VeryComplex
    };

    ComplexityAssessment {
        score,
        level,
        factors,
    }
}
