//! The evaluation pass.
//!
//! Runs on every field change. Pure and total: every field in the
//! section's table gets a decision, and an unknown governing value
//! defaults to "not visible, not required".

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use iris_core::field::FieldPath;

use crate::state::FormState;
use crate::Section;

/// The outcome of one evaluation pass, consumed by the rendering
/// layer. `clears` lists fields whose governing condition no longer
/// holds but which still carry a value; apply them with [`apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Decision {
    pub visible: BTreeSet<FieldPath>,
    pub required: BTreeSet<FieldPath>,
    pub clears: Vec<FieldPath>,
}

/// Evaluate every rule of the section against current state.
///
/// Rules are evaluated independently and the clear set is a union, so
/// there is no ordering dependency: a detail field's rule carries the
/// full governing chain and guards against stale values even when its
/// parent is cleared in the same pass.
pub fn evaluate(state: &FormState, section: &dyn Section) -> Decision {
    let mut decision = Decision::default();
    for rule in section.rules() {
        if rule.is_active(state) {
            decision.visible.insert(rule.field);
            if rule.required_when.eval(state) {
                decision.required.insert(rule.field);
            }
        } else if !state.is_blank(rule.field) {
            decision.clears.push(rule.field);
        }
    }
    decision
}

/// Apply the decision's clear-operations to the state. After this,
/// re-evaluating the same state yields an empty clear list.
pub fn apply(state: &mut FormState, decision: &Decision) {
    for path in &decision.clears {
        state.clear(*path);
    }
}

/// A required field is empty at submit time. Surfaced inline next to
/// the field; submission is blocked while any remain.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FieldPath,
    pub message: String,
}

/// The submit gate: every currently-required field that is blank.
/// Expects clears to have been applied (the UI runs [`evaluate`] +
/// [`apply`] on every change).
pub fn validate(state: &FormState, section: &dyn Section) -> Vec<ValidationError> {
    section
        .rules()
        .iter()
        .filter(|rule| rule.is_required(state) && state.is_blank(rule.field))
        .map(|rule| ValidationError {
            field: rule.field,
            message: format!("{}: required value is missing", rule.field),
        })
        .collect()
}
