pub mod exam;
pub mod patient;

pub use exam::{Exam, ExamKind, ExamStatus};
pub use patient::{Patient, Sexe};
