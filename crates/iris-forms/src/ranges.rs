//! Scalar bounds for measurement fields.
//!
//! Kept apart from the rule engine: conditional logic never looks at
//! numeric values, and the declared bounds are presentation-layer
//! constraints checked once more at submit time.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use iris_core::field::{FieldId, FieldPath};

use crate::state::FormState;

/// Defines the valid range for a measurement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ValueRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// The declared bounds for a measurement field, if it has any.
pub fn declared_range(id: FieldId) -> Option<ValueRange> {
    match id {
        FieldId::Avsc | FieldId::Avac => Some(ValueRange {
            min: 0.0,
            max: 1.2,
            step: None,
        }),
        FieldId::Sphere => Some(ValueRange {
            min: -20.0,
            max: 15.0,
            step: Some(0.25),
        }),
        FieldId::Cylindre => Some(ValueRange {
            min: -10.0,
            max: 10.0,
            step: Some(0.25),
        }),
        FieldId::Axe => Some(ValueRange {
            min: 0.0,
            max: 180.0,
            step: Some(1.0),
        }),
        FieldId::Tonus => Some(ValueRange {
            min: 0.0,
            max: 60.0,
            step: Some(1.0),
        }),
        FieldId::CdRatio => Some(ValueRange {
            min: 0.0,
            max: 1.0,
            step: None,
        }),
        _ => None,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct RangeError {
    pub field: FieldPath,
    pub value: f64,
    pub expected: ValueRange,
    pub message: String,
}

/// Check every measurement in the state against its declared bounds.
pub fn check_ranges(state: &FormState) -> Vec<RangeError> {
    let mut errors = Vec::new();
    for (path, value) in state.iter() {
        if let Some(v) = value.as_number()
            && let Some(range) = declared_range(path.id)
            && !range.contains(v)
        {
            errors.push(RangeError {
                field: *path,
                value: v,
                expected: range,
                message: format!(
                    "{}: value {} is outside range [{}, {}]",
                    path, v, range.min, range.max
                ),
            });
        }
    }
    errors
}
