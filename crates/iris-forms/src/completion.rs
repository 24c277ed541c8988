//! Adult-exam completion tracking.
//!
//! Adult sections persist independently, each through its own save
//! action; the exam can only be marked complete once the mandatory
//! sections have all been saved. Binocular vision is optional — not
//! every screening site is equipped for it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CompletionError;
use crate::SectionId;

pub const REQUIRED_FOR_COMPLETION: [SectionId; 3] = [
    SectionId::Technique,
    SectionId::Clinique,
    SectionId::Conclusion,
];

/// Which sections of an adult exam have been saved server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExamProgress {
    saved: BTreeSet<SectionId>,
}

impl ExamProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_saved(&mut self, id: SectionId) {
        self.saved.insert(id);
    }

    pub fn is_saved(&self, id: SectionId) -> bool {
        self.saved.contains(&id)
    }

    /// Mandatory sections not yet saved, in workflow order.
    pub fn missing(&self) -> Vec<SectionId> {
        REQUIRED_FOR_COMPLETION
            .iter()
            .copied()
            .filter(|id| !self.saved.contains(id))
            .collect()
    }

    pub fn can_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn ensure_can_complete(&self) -> Result<(), CompletionError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CompletionError::MissingSections(missing))
        }
    }
}
