//! Quick single-field validation used by the form UI while typing.
//!
//! Note: the length bands here deliberately differ from the full-project
//! rules (for example the description cutoffs). The two paths are kept
//! separate on purpose; do not unify them without checking the form UX.

use serde::Serialize;

/// A non-blocking issue found on one field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldIssue {
    pub field: String,
    pub message: &'static str,
    pub suggestion: &'static str,
}

/// Outcome of validating one field value in isolation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    pub is_valid: bool,
    pub issues: Vec<FieldIssue>,
    pub suggestions: Vec<&'static str>,
    /// Quality score 0-100 for the field in isolation.
    pub score: u8,
}

/// Coarse quality banding of a field score for UI colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityBand {
    Excellent,
    Good,
    NeedsImprovement,
    Critical,
}

pub fn quality_band(score: u8) -> QualityBand {
    match score {
        85.. => QualityBand::Excellent,
        70..=84 => QualityBand::Good,
        50..=69 => QualityBand::NeedsImprovement,
        _ => QualityBand::Critical,
    }
}

/// Validate a single field value as the user edits it.
pub fn validate_field(field_name: &str, value: &str) -> FieldValidation {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = 0u8;

    if value.trim().is_empty() {
        return FieldValidation {
            is_valid: false,
            issues,
            suggestions,
            score: 0,
        };
    }

    match field_name {
        "title" => {
            if value.len() < 10 {
                issues.push(FieldIssue {
                    field: field_name.to_string(),
                    message: "Title seems too brief",
                    suggestion: "Consider a more descriptive title (10-100 characters)",
                });
            } else if value.len() > 100 {
                issues.push(FieldIssue {
                    field: field_name.to_string(),
                    message: "Title is very long",
                    suggestion: "Consider shortening for better readability",
                });
            } else {
                score = 85;
            }
        }
        "description" => {
            if value.len() < 500 {
                suggestions.push("Expand description to 800-1500 words for EU standards");
                score = 40;
            } else if value.len() < 800 {
                suggestions.push("Consider adding more detail for comprehensive coverage");
                score = 70;
            } else {
                score = 90;
            }
        }
        "budget" => {
            if let Some(amount) = leading_amount(value) {
                if amount < 100_000.0 {
                    suggestions.push("Consider if budget is sufficient for project scope");
                    score = 60;
                } else if amount > 10_000_000.0 {
                    suggestions.push("Very high budget may require additional justification");
                    score = 70;
                } else {
                    score = 90;
                }
            }
        }
        _ => {
            score = if value.len() > 50 { 85 } else { 60 };
        }
    }

    FieldValidation {
        is_valid: issues.is_empty(),
        issues,
        suggestions,
        score,
    }
}

/// First run of digits (ignoring thousand separators) in a free-text amount.
fn leading_amount(value: &str) -> Option<f64> {
    let digits: String = value
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        None
    } else {
        digits.parse::<f64>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_invalid_with_zero_score() {
        let result = validate_field("description", "   ");
        assert!(!result.is_valid);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn short_title_flags_an_issue() {
        let result = validate_field("title", "Short");
        assert!(!result.is_valid);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn description_bands_differ_from_full_validation() {
        assert_eq!(validate_field("description", &"x".repeat(400)).score, 40);
        assert_eq!(validate_field("description", &"x".repeat(600)).score, 70);
        assert_eq!(validate_field("description", &"x".repeat(900)).score, 90);
    }

    #[test]
    fn budget_amount_parses_thousand_separators() {
        let result = validate_field("budget", "EUR 1,500,000 total");
        assert!(result.is_valid);
        assert_eq!(result.score, 90);
    }

    #[test]
    fn quality_bands_cover_all_scores() {
        assert_eq!(quality_band(90), QualityBand::Excellent);
        assert_eq!(quality_band(70), QualityBand::Good);
        assert_eq!(quality_band(55), QualityBand::NeedsImprovement);
        assert_eq!(quality_band(10), QualityBand::Critical);
    }
}
