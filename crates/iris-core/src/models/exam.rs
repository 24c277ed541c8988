use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Which exam workflow applies. Adult exams save each section
/// independently; child exams go through the linear stepper and submit
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExamKind {
    Adulte,
    Enfant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExamStatus {
    EnCours,
    Termine,
}

/// A screening exam for one patient.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Exam {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub kind: ExamKind,
    pub status: ExamStatus,
    pub date_examen: jiff::civil::Date,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Exam {
    /// Mark the exam completed. Completion is one-way.
    pub fn complete(&mut self, at: jiff::Timestamp) -> Result<(), CoreError> {
        if self.status == ExamStatus::Termine {
            return Err(CoreError::ExamAlreadyCompleted(self.id));
        }
        self.status = ExamStatus::Termine;
        self.updated_at = at;
        Ok(())
    }
}
