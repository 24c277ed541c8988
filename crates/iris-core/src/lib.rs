//! iris-core
//!
//! Pure domain types: field identifiers, clinical value vocabulary, and
//! patient/exam records. No I/O — this is the shared vocabulary of the
//! IRIS screening system.

pub mod error;
pub mod field;
pub mod models;
pub mod vocab;
