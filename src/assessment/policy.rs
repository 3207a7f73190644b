//! Declarative policy catalog for the IPA III programme windows.
//!
//! Every window-specific table the engine consumes lives here: checklist
//! sections and their profile overrides, alignment and synergy keyword sets,
//! budget ranges, breakdown ratios, and the performance indicator catalog.
//! The scorer, validator, and optimizer all read the same tables so the
//! numbers cannot drift apart.

use serde::{Deserialize, Serialize};

use super::domain::{present, ProgramWindow, ProjectRecord};

/// Identifier of a checklist section shared across all window profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    BasicInfo,
    StrategicAlignment,
    Implementation,
    RiskSustainability,
    BudgetTimeline,
}

/// Result of evaluating one checklist item against a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub met: bool,
    pub detail: Option<String>,
}

impl CheckOutcome {
    fn met(detail: Option<String>) -> Self {
        Self { met: true, detail }
    }

    fn unmet(detail: Option<String>) -> Self {
        Self { met: false, detail }
    }
}

/// A single boolean completeness check with drafting guidance.
pub struct CheckItem {
    pub id: &'static str,
    pub label: &'static str,
    pub guidance: &'static str,
    pub evaluate: fn(&ProjectRecord) -> CheckOutcome,
}

/// A named group of checklist items with its base weight and pass threshold.
pub struct SectionDefinition {
    pub id: SectionId,
    pub label: &'static str,
    /// Base contribution to the total score, renormalized at scoring time.
    pub weight: f64,
    /// Minimum section percentage for `meets_threshold`.
    pub threshold: u8,
    pub items: &'static [CheckItem],
}

/// Per-window weight/threshold override for one section.
#[derive(Debug, Clone, Copy)]
pub struct SectionOverride {
    pub weight: Option<f64>,
    pub threshold: Option<u8>,
}

/// Pass/fail profile of one programme window (or the general fallback).
pub struct PolicyProfile {
    pub window: Option<ProgramWindow>,
    pub label: &'static str,
    pub window_threshold: u8,
    pub overrides: &'static [(SectionId, SectionOverride)],
}

const fn weight_override(weight: f64) -> SectionOverride {
    SectionOverride {
        weight: Some(weight),
        threshold: None,
    }
}

const fn threshold_override(threshold: u8) -> SectionOverride {
    SectionOverride {
        weight: None,
        threshold: Some(threshold),
    }
}

const fn full_override(weight: f64, threshold: u8) -> SectionOverride {
    SectionOverride {
        weight: Some(weight),
        threshold: Some(threshold),
    }
}

// --- checklist predicates ------------------------------------------------

fn check_title(record: &ProjectRecord) -> CheckOutcome {
    let length = record.title.trim().len();
    let detail = Some(format!("{length} characters"));
    if length >= 10 {
        CheckOutcome::met(detail)
    } else {
        CheckOutcome::unmet(detail)
    }
}

fn check_municipality(record: &ProjectRecord) -> CheckOutcome {
    if present(&record.municipality) {
        CheckOutcome::met(None)
    } else {
        CheckOutcome::unmet(None)
    }
}

fn check_country(record: &ProjectRecord) -> CheckOutcome {
    if present(&record.country) {
        CheckOutcome::met(None)
    } else {
        CheckOutcome::unmet(None)
    }
}

fn check_window(record: &ProjectRecord) -> CheckOutcome {
    if record.ipa_window.is_some() {
        CheckOutcome::met(None)
    } else {
        CheckOutcome::unmet(None)
    }
}

fn text_depth_check(text: &str, min_len: usize) -> CheckOutcome {
    let length = text.trim().len();
    let detail = Some(format!("{length} characters"));
    if length >= min_len {
        CheckOutcome::met(detail)
    } else {
        CheckOutcome::unmet(detail)
    }
}

fn check_description_depth(record: &ProjectRecord) -> CheckOutcome {
    text_depth_check(&record.description, 250)
}

fn check_objectives_depth(record: &ProjectRecord) -> CheckOutcome {
    text_depth_check(&record.objectives, 200)
}

fn check_methodology_depth(record: &ProjectRecord) -> CheckOutcome {
    text_depth_check(&record.methodology, 220)
}

fn check_smart_coverage(record: &ProjectRecord) -> CheckOutcome {
    let count = record.smart_objectives.filled_count(80);
    let detail = Some(format!("{count} SMART elements with 80+ characters"));
    if count >= 4 {
        CheckOutcome::met(detail)
    } else {
        CheckOutcome::unmet(detail)
    }
}

fn check_risks_depth(record: &ProjectRecord) -> CheckOutcome {
    text_depth_check(&record.risks, 180)
}

fn check_sustainability_depth(record: &ProjectRecord) -> CheckOutcome {
    text_depth_check(&record.sustainability, 180)
}

const MAX_ELIGIBLE_BUDGET: f64 = 10_500_000.0;

fn check_budget_range(record: &ProjectRecord) -> CheckOutcome {
    match record.budget {
        Some(amount) if amount.is_finite() && amount > 0.0 && amount <= MAX_ELIGIBLE_BUDGET => {
            CheckOutcome::met(Some(format!("EUR {amount:.0}")))
        }
        _ => CheckOutcome::unmet(Some("budget missing or out of range".to_string())),
    }
}

fn check_duration_defined(record: &ProjectRecord) -> CheckOutcome {
    match record.duration_months {
        Some(months) if months >= 6 => CheckOutcome::met(Some(format!("{months} months"))),
        Some(months) => CheckOutcome::unmet(Some(format!("{months} months"))),
        None => CheckOutcome::unmet(Some("not provided".to_string())),
    }
}

// --- checklist tables ----------------------------------------------------

static BASIC_INFO_ITEMS: [CheckItem; 4] = [
    CheckItem {
        id: "title",
        label: "Project title is descriptive (>= 10 characters)",
        guidance: "Provide a descriptive title with at least 10 characters.",
        evaluate: check_title,
    },
    CheckItem {
        id: "municipality",
        label: "Municipality selected",
        guidance: "Specify the implementing municipality.",
        evaluate: check_municipality,
    },
    CheckItem {
        id: "country",
        label: "Country selected",
        guidance: "Select the project country to confirm eligibility.",
        evaluate: check_country,
    },
    CheckItem {
        id: "ipaWindow",
        label: "IPA III window selected",
        guidance: "Choose the primary IPA III window for alignment.",
        evaluate: check_window,
    },
];

static STRATEGIC_ALIGNMENT_ITEMS: [CheckItem; 2] = [
    CheckItem {
        id: "description-depth",
        label: "Project description depth (>= 250 characters)",
        guidance: "Expand the project description to at least 250 characters to cover context and rationale.",
        evaluate: check_description_depth,
    },
    CheckItem {
        id: "objectives-depth",
        label: "Objectives cover EU alignment (>= 200 characters)",
        guidance: "Elaborate objectives with at least 200 characters referencing IPA priorities.",
        evaluate: check_objectives_depth,
    },
];

static IMPLEMENTATION_ITEMS: [CheckItem; 2] = [
    CheckItem {
        id: "methodology-depth",
        label: "Implementation methodology detailed (>= 220 characters)",
        guidance: "Describe methodology with at least 220 characters covering phases and partners.",
        evaluate: check_methodology_depth,
    },
    CheckItem {
        id: "smart-coverage",
        label: "SMART objectives mostly completed (>= 4 entries with 80+ characters)",
        guidance: "Ensure at least four SMART statements have 80+ characters explaining the target.",
        evaluate: check_smart_coverage,
    },
];

static RISK_SUSTAINABILITY_ITEMS: [CheckItem; 2] = [
    CheckItem {
        id: "risks-depth",
        label: "Risk mitigation analysed (>= 180 characters)",
        guidance: "Provide at least 180 characters on key risks and mitigations.",
        evaluate: check_risks_depth,
    },
    CheckItem {
        id: "sustainability-depth",
        label: "Sustainability plan detailed (>= 180 characters)",
        guidance: "Detail sustainability actions with at least 180 characters.",
        evaluate: check_sustainability_depth,
    },
];

static BUDGET_TIMELINE_ITEMS: [CheckItem; 2] = [
    CheckItem {
        id: "budget-range",
        label: "Budget defined and within EU co-financing limits",
        guidance: "Enter a total budget (<= EUR 10.5m) to match IPA co-financing expectations.",
        evaluate: check_budget_range,
    },
    CheckItem {
        id: "duration-defined",
        label: "Project duration specified (>= 6 months)",
        guidance: "Define a project duration of at least 6 months to fulfil IPA design norms.",
        evaluate: check_duration_defined,
    },
];

static BASE_SECTIONS: [SectionDefinition; 5] = [
    SectionDefinition {
        id: SectionId::BasicInfo,
        label: "Basic Information",
        weight: 0.20,
        threshold: 60,
        items: &BASIC_INFO_ITEMS,
    },
    SectionDefinition {
        id: SectionId::StrategicAlignment,
        label: "Strategic Alignment",
        weight: 0.25,
        threshold: 65,
        items: &STRATEGIC_ALIGNMENT_ITEMS,
    },
    SectionDefinition {
        id: SectionId::Implementation,
        label: "Implementation & SMART Logic",
        weight: 0.25,
        threshold: 70,
        items: &IMPLEMENTATION_ITEMS,
    },
    SectionDefinition {
        id: SectionId::RiskSustainability,
        label: "Risk & Sustainability",
        weight: 0.15,
        threshold: 60,
        items: &RISK_SUSTAINABILITY_ITEMS,
    },
    SectionDefinition {
        id: SectionId::BudgetTimeline,
        label: "Budget & Timeline",
        weight: 0.15,
        threshold: 55,
        items: &BUDGET_TIMELINE_ITEMS,
    },
];

/// The checklist sections before profile overrides and renormalization.
pub fn base_sections() -> &'static [SectionDefinition] {
    &BASE_SECTIONS
}

// --- window profiles -----------------------------------------------------

static DEFAULT_PROFILE: PolicyProfile = PolicyProfile {
    window: None,
    label: "General IPA Alignment",
    window_threshold: 70,
    overrides: &[],
};

static WINDOW_PROFILES: [PolicyProfile; 5] = [
    PolicyProfile {
        window: Some(ProgramWindow::RuleOfLaw),
        label: ProgramWindow::RuleOfLaw.title(),
        window_threshold: 82,
        overrides: &[
            (SectionId::Implementation, threshold_override(75)),
            (SectionId::RiskSustainability, full_override(0.20, 70)),
        ],
    },
    PolicyProfile {
        window: Some(ProgramWindow::Governance),
        label: ProgramWindow::Governance.title(),
        window_threshold: 78,
        overrides: &[(SectionId::StrategicAlignment, full_override(0.30, 70))],
    },
    PolicyProfile {
        window: Some(ProgramWindow::GreenAgenda),
        label: ProgramWindow::GreenAgenda.title(),
        window_threshold: 76,
        overrides: &[(SectionId::RiskSustainability, full_override(0.20, 72))],
    },
    PolicyProfile {
        window: Some(ProgramWindow::Competitiveness),
        label: ProgramWindow::Competitiveness.title(),
        window_threshold: 77,
        overrides: &[
            (SectionId::Implementation, weight_override(0.28)),
            (SectionId::StrategicAlignment, threshold_override(68)),
        ],
    },
    PolicyProfile {
        window: Some(ProgramWindow::TerritorialCooperation),
        label: ProgramWindow::TerritorialCooperation.title(),
        window_threshold: 74,
        overrides: &[
            (SectionId::BasicInfo, threshold_override(65)),
            (SectionId::Implementation, threshold_override(68)),
        ],
    },
];

/// Look up the policy profile for a window, or the general fallback profile.
pub fn profile_for(window: Option<ProgramWindow>) -> &'static PolicyProfile {
    match window {
        Some(window) => WINDOW_PROFILES
            .iter()
            .find(|profile| profile.window == Some(window))
            .unwrap_or(&DEFAULT_PROFILE),
        None => &DEFAULT_PROFILE,
    }
}

impl PolicyProfile {
    pub fn override_for(&self, section: SectionId) -> Option<SectionOverride> {
        self.overrides
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, value)| *value)
    }

    /// Wire identifier of this profile ("window1".."window5", or "default").
    pub fn window_id(&self) -> &'static str {
        self.window.map(ProgramWindow::id).unwrap_or("default")
    }
}

// --- keyword tables ------------------------------------------------------

/// Keywords the validator expects a draft to echo for its declared window.
pub fn alignment_keywords(window: ProgramWindow) -> &'static [&'static str] {
    match window {
        ProgramWindow::RuleOfLaw => &[
            "rule of law",
            "judicial",
            "corruption",
            "fundamental rights",
            "justice",
        ],
        ProgramWindow::Governance => &[
            "governance",
            "democracy",
            "civil society",
            "public administration",
            "transparency",
        ],
        ProgramWindow::GreenAgenda => &[
            "green",
            "climate",
            "environment",
            "sustainable",
            "renewable",
            "energy",
        ],
        ProgramWindow::Competitiveness => &[
            "digital",
            "innovation",
            "competitiveness",
            "sme",
            "entrepreneurship",
            "economic",
        ],
        ProgramWindow::TerritorialCooperation => &[
            "cross-border",
            "territorial",
            "cooperation",
            "regional",
            "partnership",
        ],
    }
}

/// Broader per-window keyword sets used by the synergy classifier.
pub fn synergy_keywords(window: ProgramWindow) -> &'static [&'static str] {
    match window {
        ProgramWindow::RuleOfLaw => &[
            "justice",
            "corruption",
            "transparency",
            "legal",
            "court",
            "police",
            "rights",
            "judicial",
            "reform",
            "governance",
            "integrity",
            "accountability",
        ],
        ProgramWindow::Governance => &[
            "democracy",
            "governance",
            "administration",
            "public",
            "citizen",
            "participation",
            "civic",
            "electoral",
            "municipal",
            "services",
            "decentralization",
            "institution",
        ],
        ProgramWindow::GreenAgenda => &[
            "green",
            "environment",
            "climate",
            "energy",
            "renewable",
            "waste",
            "sustainability",
            "carbon",
            "emission",
            "circular",
            "transport",
            "biodiversity",
            "pollution",
        ],
        ProgramWindow::Competitiveness => &[
            "digital",
            "innovation",
            "technology",
            "smart",
            "competitiveness",
            "skills",
            "education",
            "sme",
            "business",
            "connectivity",
            "research",
            "development",
        ],
        ProgramWindow::TerritorialCooperation => &[
            "cooperation",
            "cross-border",
            "regional",
            "partnership",
            "territorial",
            "transnational",
            "integration",
            "connectivity",
            "joint",
            "network",
        ],
    }
}

// --- budget tables -------------------------------------------------------

/// Typical project budget envelope for one window, in EUR.
#[derive(Debug, Clone, Copy)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

pub fn budget_range(window: ProgramWindow) -> BudgetRange {
    match window {
        ProgramWindow::RuleOfLaw => BudgetRange {
            min: 300_000.0,
            max: 8_000_000.0,
            avg: 2_000_000.0,
        },
        ProgramWindow::Governance => BudgetRange {
            min: 250_000.0,
            max: 6_000_000.0,
            avg: 1_500_000.0,
        },
        ProgramWindow::GreenAgenda => BudgetRange {
            min: 500_000.0,
            max: 12_000_000.0,
            avg: 3_000_000.0,
        },
        ProgramWindow::Competitiveness => BudgetRange {
            min: 400_000.0,
            max: 10_000_000.0,
            avg: 2_500_000.0,
        },
        ProgramWindow::TerritorialCooperation => BudgetRange {
            min: 200_000.0,
            max: 5_000_000.0,
            avg: 1_200_000.0,
        },
    }
}

/// Fixed per-window cost-category ratios; each row sums to 1.
#[derive(Debug, Clone, Copy)]
pub struct BreakdownRatios {
    pub personnel: f64,
    pub equipment: f64,
    pub services: f64,
    pub travel: f64,
    pub infrastructure: f64,
    pub other: f64,
}

pub fn breakdown_ratios(window: ProgramWindow) -> BreakdownRatios {
    match window {
        ProgramWindow::RuleOfLaw => BreakdownRatios {
            personnel: 0.35,
            equipment: 0.15,
            services: 0.25,
            travel: 0.05,
            infrastructure: 0.10,
            other: 0.10,
        },
        ProgramWindow::Governance => BreakdownRatios {
            personnel: 0.40,
            equipment: 0.10,
            services: 0.30,
            travel: 0.08,
            infrastructure: 0.07,
            other: 0.05,
        },
        ProgramWindow::GreenAgenda => BreakdownRatios {
            personnel: 0.25,
            equipment: 0.30,
            services: 0.20,
            travel: 0.03,
            infrastructure: 0.15,
            other: 0.07,
        },
        ProgramWindow::Competitiveness => BreakdownRatios {
            personnel: 0.30,
            equipment: 0.35,
            services: 0.20,
            travel: 0.05,
            infrastructure: 0.05,
            other: 0.05,
        },
        ProgramWindow::TerritorialCooperation => BreakdownRatios {
            personnel: 0.35,
            equipment: 0.15,
            services: 0.25,
            travel: 0.15,
            infrastructure: 0.05,
            other: 0.05,
        },
    }
}

// --- indicator catalog ---------------------------------------------------

/// Result-chain category of a performance indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorCategory {
    Output,
    Result,
    Impact,
}

/// Static definition of one catalog indicator.
pub struct IndicatorSpec {
    pub id: &'static str,
    pub category: IndicatorCategory,
    pub description: &'static str,
    pub target: f64,
    pub baseline: f64,
    pub unit: &'static str,
    pub verification: &'static str,
}

/// The two indicators every project reports regardless of window.
pub static UNIVERSAL_INDICATORS: [IndicatorSpec; 2] = [
    IndicatorSpec {
        id: "common_budget_execution",
        category: IndicatorCategory::Output,
        description: "Budget execution rate",
        target: 95.0,
        baseline: 0.0,
        unit: "%",
        verification: "Financial reports",
    },
    IndicatorSpec {
        id: "common_beneficiaries",
        category: IndicatorCategory::Result,
        description: "Direct beneficiaries reached",
        target: 1000.0,
        baseline: 0.0,
        unit: "persons",
        verification: "Beneficiary database",
    },
];

/// Window-specific indicator pair from the programme catalog.
pub fn window_indicators(window: ProgramWindow) -> &'static [IndicatorSpec; 2] {
    match window {
        ProgramWindow::RuleOfLaw => &[
            IndicatorSpec {
                id: "w1_judicial_efficiency",
                category: IndicatorCategory::Result,
                description: "Reduction in case backlog",
                target: 30.0,
                baseline: 0.0,
                unit: "%",
                verification: "Court statistics",
            },
            IndicatorSpec {
                id: "w1_corruption_perception",
                category: IndicatorCategory::Impact,
                description: "Improvement in corruption perception index",
                target: 5.0,
                baseline: 0.0,
                unit: "points",
                verification: "Transparency International CPI",
            },
        ],
        ProgramWindow::Governance => &[
            IndicatorSpec {
                id: "w2_public_services",
                category: IndicatorCategory::Output,
                description: "Public services digitalized",
                target: 10.0,
                baseline: 0.0,
                unit: "services",
                verification: "Government reports",
            },
            IndicatorSpec {
                id: "w2_citizen_satisfaction",
                category: IndicatorCategory::Result,
                description: "Citizen satisfaction with public services",
                target: 75.0,
                baseline: 50.0,
                unit: "%",
                verification: "Citizen surveys",
            },
        ],
        ProgramWindow::GreenAgenda => &[
            IndicatorSpec {
                id: "w3_co2_reduction",
                category: IndicatorCategory::Impact,
                description: "CO2 emissions reduced",
                target: 1000.0,
                baseline: 0.0,
                unit: "tons/year",
                verification: "Environmental monitoring",
            },
            IndicatorSpec {
                id: "w3_renewable_capacity",
                category: IndicatorCategory::Output,
                description: "Renewable energy capacity installed",
                target: 5.0,
                baseline: 0.0,
                unit: "MW",
                verification: "Energy authority data",
            },
        ],
        ProgramWindow::Competitiveness => &[
            IndicatorSpec {
                id: "w4_jobs_created",
                category: IndicatorCategory::Result,
                description: "New jobs created",
                target: 100.0,
                baseline: 0.0,
                unit: "jobs",
                verification: "Employment records",
            },
            IndicatorSpec {
                id: "w4_smes_supported",
                category: IndicatorCategory::Output,
                description: "SMEs receiving support",
                target: 50.0,
                baseline: 0.0,
                unit: "enterprises",
                verification: "Programme records",
            },
        ],
        ProgramWindow::TerritorialCooperation => &[
            IndicatorSpec {
                id: "w5_cross_border",
                category: IndicatorCategory::Output,
                description: "Cross-border partnerships established",
                target: 5.0,
                baseline: 0.0,
                unit: "partnerships",
                verification: "Partnership agreements",
            },
            IndicatorSpec {
                id: "w5_people_exchanges",
                category: IndicatorCategory::Result,
                description: "People participating in exchanges",
                target: 500.0,
                baseline: 0.0,
                unit: "persons",
                verification: "Participation records",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_section_weights_sum_to_one() {
        let total: f64 = base_sections().iter().map(|section| section.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn every_window_has_a_profile_and_tables() {
        for window in ProgramWindow::ALL {
            let profile = profile_for(Some(window));
            assert_eq!(profile.window, Some(window));
            assert!(profile.window_threshold >= 70);
            assert!(!alignment_keywords(window).is_empty());
            assert!(synergy_keywords(window).len() >= 10);

            let range = budget_range(window);
            assert!(range.min < range.avg && range.avg < range.max);

            let ratios = breakdown_ratios(window);
            let sum = ratios.personnel
                + ratios.equipment
                + ratios.services
                + ratios.travel
                + ratios.infrastructure
                + ratios.other;
            assert!((sum - 1.0).abs() < 1e-9, "{window:?} ratios sum to {sum}");
        }
    }

    #[test]
    fn fallback_profile_covers_missing_window() {
        let profile = profile_for(None);
        assert_eq!(profile.window, None);
        assert_eq!(profile.window_id(), "default");
        assert_eq!(profile.window_threshold, 70);
        assert!(profile.overrides.is_empty());
    }
}
