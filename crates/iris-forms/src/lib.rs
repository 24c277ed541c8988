//! iris-forms
//!
//! Conditional exam-form engine. Pure data and pure functions — no I/O.
//! Defines the per-section field rules (visibility, requirement,
//! clearing, wire naming) and the evaluation pass that applies them to
//! in-memory form state.

pub mod completion;
pub mod error;
pub mod evaluate;
pub mod ranges;
pub mod rules;
pub mod sections;
pub mod state;
pub mod stepper;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use iris_core::models::ExamKind;
use rules::FieldRule;

/// The exam sections the engine knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SectionId {
    Technique,
    Clinique,
    Binoculaire,
    Conclusion,
    EnfantGeneral,
}

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Technique => "technique",
            SectionId::Clinique => "clinique",
            SectionId::Binoculaire => "binoculaire",
            SectionId::Conclusion => "conclusion",
            SectionId::EnfantGeneral => "enfant_general",
        }
    }

    /// The sections an exam of the given kind goes through, in order.
    pub fn for_kind(kind: ExamKind) -> &'static [SectionId] {
        match kind {
            ExamKind::Adulte => &[
                SectionId::Technique,
                SectionId::Clinique,
                SectionId::Binoculaire,
                SectionId::Conclusion,
            ],
            ExamKind::Enfant => &[
                SectionId::EnfantGeneral,
                SectionId::Technique,
                SectionId::Binoculaire,
                SectionId::Clinique,
            ],
        }
    }
}

/// Trait implemented by each exam section.
pub trait Section: Send + Sync {
    fn id(&self) -> SectionId;

    /// Human-readable name (e.g., "Données techniques").
    fn name(&self) -> &str;

    /// The section's rule table. One entry per field; drives
    /// visibility, requirement, clearing, and wire mapping alike.
    fn rules(&self) -> &[FieldRule];
}

/// Return all registered sections.
pub fn all_sections() -> Vec<Box<dyn Section>> {
    vec![
        Box::new(sections::technique::Technique),
        Box::new(sections::clinique::Clinique),
        Box::new(sections::binoculaire::Binoculaire),
        Box::new(sections::conclusion::Conclusion),
        Box::new(sections::enfant::EnfantGeneral),
    ]
}

/// Look up a section by ID.
pub fn get_section(id: SectionId) -> Box<dyn Section> {
    match id {
        SectionId::Technique => Box::new(sections::technique::Technique),
        SectionId::Clinique => Box::new(sections::clinique::Clinique),
        SectionId::Binoculaire => Box::new(sections::binoculaire::Binoculaire),
        SectionId::Conclusion => Box::new(sections::conclusion::Conclusion),
        SectionId::EnfantGeneral => Box::new(sections::enfant::EnfantGeneral),
    }
}
