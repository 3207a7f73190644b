//! Compliance and performance assessment engine for IPA III draft
//! applications.
//!
//! Every component is a pure, synchronous function over an immutable
//! [`ProjectRecord`]: results depend only on the record (plus the static
//! policy and municipality tables), so drafts can be scored concurrently
//! with no coordination and results are safe to cache by content hash.

pub mod compliance;
pub mod domain;
pub mod municipality;
pub mod performance;
pub mod policy;
pub mod report;
pub mod resources;
pub mod router;
pub mod synergy;
pub mod validation;

#[cfg(test)]
mod tests;

pub use compliance::{score_compliance, ComplianceMetrics};
pub use domain::{ProgramWindow, ProjectRecord, SmartObjectives};
pub use municipality::{briefing, MunicipalityBriefing, MunicipalityProfile};
pub use performance::{assess_performance, PerformanceAssessment};
pub use resources::{optimize_resources, ResourceOptimization};
pub use router::assessment_router;
pub use synergy::{detect_synergies, KeywordClassifier, SynergyResult, WindowClassifier};
pub use validation::{validate, ComplianceLevel, ValidationResult};
