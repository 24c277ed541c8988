//! The save gate.
//!
//! What the UI calls when the staff hits save: validate, then
//! serialize. A blocked submit returns the field-level errors and
//! nothing reaches the network. Expects the caller to have applied
//! clears on every change (`evaluate` + `apply`).

use serde_json::Value;

use iris_core::models::ExamKind;
use iris_forms::evaluate::validate;
use iris_forms::ranges::check_ranges;
use iris_forms::state::FormState;
use iris_forms::{get_section, Section, SectionId};

use crate::error::WireError;
use crate::serialize::{serialize, serialize_enfant};

/// Validate and serialize one adult section for its save endpoint.
pub fn submit_payload(state: &FormState, section: &dyn Section) -> Result<Value, WireError> {
    let errors = validate(state, section);
    if !errors.is_empty() {
        return Err(WireError::Validation(errors));
    }
    let out_of_range = check_ranges(state);
    if !out_of_range.is_empty() {
        return Err(WireError::OutOfRange(out_of_range));
    }
    Ok(serialize(state, section))
}

/// Validate every child-exam section and serialize the single combined
/// submit payload.
pub fn submit_payload_enfant(state: &FormState) -> Result<Value, WireError> {
    let mut errors = Vec::new();
    for id in SectionId::for_kind(ExamKind::Enfant) {
        errors.extend(validate(state, get_section(*id).as_ref()));
    }
    if !errors.is_empty() {
        return Err(WireError::Validation(errors));
    }
    let out_of_range = check_ranges(state);
    if !out_of_range.is_empty() {
        return Err(WireError::OutOfRange(out_of_range));
    }
    Ok(serialize_enfant(state))
}
