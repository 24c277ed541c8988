use thiserror::Error;

use crate::SectionId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepperError {
    #[error("already at the first step")]
    AtFirstStep,

    #[error("already at the last step")]
    AtLastStep,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("cannot complete exam: {} section(s) not yet saved", .0.len())]
    MissingSections(Vec<SectionId>),
}
