//! Child-exam step navigation.
//!
//! Child exams have no per-section save: the staff walks a fixed
//! ordered list of steps and submits once at the end. Progression is
//! strictly linear — one step forward or back, never a skip.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::StepperError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Step {
    General,
    Technique,
    Binoculaire,
    Clinique,
    Recapitulatif,
}

impl Step {
    pub const ORDER: [Step; 5] = [
        Step::General,
        Step::Technique,
        Step::Binoculaire,
        Step::Clinique,
        Step::Recapitulatif,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Stepper {
    index: usize,
}

impl Stepper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Step {
        Step::ORDER[self.index]
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == Step::ORDER.len() - 1
    }

    /// Advance one step. Fails on the last step.
    pub fn next(&mut self) -> Result<Step, StepperError> {
        if self.is_last() {
            return Err(StepperError::AtLastStep);
        }
        self.index += 1;
        Ok(self.current())
    }

    /// Go back one step. Fails on the first step.
    pub fn previous(&mut self) -> Result<Step, StepperError> {
        if self.is_first() {
            return Err(StepperError::AtFirstStep);
        }
        self.index -= 1;
        Ok(self.current())
    }

    /// Submission is only offered on the review step.
    pub fn can_submit(&self) -> bool {
        self.current() == Step::Recapitulatif
    }
}
