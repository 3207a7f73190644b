use serde::{Deserialize, Serialize};

/// Thematic priority tracks of the IPA III pre-accession programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProgramWindow {
    #[serde(rename = "window1")]
    RuleOfLaw,
    #[serde(rename = "window2")]
    Governance,
    #[serde(rename = "window3")]
    GreenAgenda,
    #[serde(rename = "window4")]
    Competitiveness,
    #[serde(rename = "window5")]
    TerritorialCooperation,
}

impl ProgramWindow {
    pub const ALL: [ProgramWindow; 5] = [
        ProgramWindow::RuleOfLaw,
        ProgramWindow::Governance,
        ProgramWindow::GreenAgenda,
        ProgramWindow::Competitiveness,
        ProgramWindow::TerritorialCooperation,
    ];

    /// Stable wire identifier shared with the form UI.
    pub const fn id(self) -> &'static str {
        match self {
            ProgramWindow::RuleOfLaw => "window1",
            ProgramWindow::Governance => "window2",
            ProgramWindow::GreenAgenda => "window3",
            ProgramWindow::Competitiveness => "window4",
            ProgramWindow::TerritorialCooperation => "window5",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            ProgramWindow::RuleOfLaw => "Rule of Law & Fundamental Rights",
            ProgramWindow::Governance => "Democracy, Governance & Public Administration",
            ProgramWindow::GreenAgenda => "Green Agenda & Sustainable Connectivity",
            ProgramWindow::Competitiveness => "Competitiveness & Innovation",
            ProgramWindow::TerritorialCooperation => {
                "Territorial Cooperation & Good Neighbourly Relations"
            }
        }
    }
}

/// The five SMART objective statements captured by the draft form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmartObjectives {
    pub specific: String,
    pub measurable: String,
    pub achievable: String,
    pub relevant: String,
    pub time_bound: String,
}

impl SmartObjectives {
    pub fn entries(&self) -> [&str; 5] {
        [
            &self.specific,
            &self.measurable,
            &self.achievable,
            &self.relevant,
            &self.time_bound,
        ]
    }

    /// Count of statements with at least `min_len` non-whitespace-trimmed characters.
    pub fn filled_count(&self, min_len: usize) -> usize {
        self.entries()
            .iter()
            .filter(|entry| entry.trim().len() >= min_len.max(1))
            .count()
    }
}

/// A draft grant application as edited by the (external) form UI.
///
/// The engine only reads this record; every assessment returns derived data
/// alongside it and never writes back. Field names follow the UI's JSON
/// contract, hence camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    pub title: String,
    pub municipality: String,
    pub country: String,
    pub ipa_window: Option<ProgramWindow>,
    pub description: String,
    pub objectives: String,
    pub methodology: String,
    pub risks: String,
    pub sustainability: String,
    pub smart_objectives: SmartObjectives,
    /// Total budget in EUR.
    pub budget: Option<f64>,
    pub duration_months: Option<u32>,
    /// Requested EU co-financing in EUR.
    pub eu_contribution: Option<f64>,
    /// Partner co-financing in EUR.
    pub partner_contribution: Option<f64>,

    // Extended drafting fields, all optional free text.
    pub lead_partner: Option<String>,
    pub partners: Option<String>,
    pub partner_experience: Option<String>,
    pub partner_roles: Option<String>,
    pub activities: Option<String>,
    pub deliverables: Option<String>,
    pub timeline: Option<String>,
    pub milestones: Option<String>,
    pub phases: Option<String>,
    pub indicators: Option<String>,
    pub monitoring_plan: Option<String>,
    pub evaluation_approach: Option<String>,
    pub mitigation: Option<String>,
    pub budget_breakdown: Option<String>,
    pub technical_specifications: Option<String>,
    pub feasibility_study: Option<String>,
    pub preparatory_work: Option<String>,
}

impl ProjectRecord {
    /// Concatenated lowercase title, description and objectives used by the
    /// keyword classifiers.
    pub fn narrative(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.objectives).to_lowercase()
    }

    pub(crate) fn description_lower(&self) -> String {
        self.description.to_lowercase()
    }

    pub(crate) fn objectives_lower(&self) -> String {
        self.objectives.to_lowercase()
    }
}

/// True when an optional free-text field carries non-whitespace content.
pub(crate) fn filled(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(|text| !text.trim().is_empty())
        .unwrap_or(false)
}

/// True when a required free-text field carries non-whitespace content.
pub(crate) fn present(value: &str) -> bool {
    !value.trim().is_empty()
}
