use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use iris_core::field::FieldPath;

/// A single field's value. Blank text counts as unset for rule
/// purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldValue {
    /// One token out of the field's vocabulary.
    Choice(String),
    /// Free text.
    Text(String),
    /// Scalar measurement.
    Number(f64),
}

impl FieldValue {
    pub fn choice(token: impl Into<String>) -> Self {
        FieldValue::Choice(token.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        FieldValue::Text(text.into())
    }

    pub fn number(value: f64) -> Self {
        FieldValue::Number(value)
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Choice(s) | FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(_) => false,
        }
    }

    pub fn as_token(&self) -> Option<&str> {
        match self {
            FieldValue::Choice(s) if !s.trim().is_empty() => Some(s.trim()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// The in-memory value tree for one exam screen. Created fresh per
/// screen, hydrated from the fetched record when editing, discarded on
/// navigation. One logical owner — the active screen — holds it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    fields: BTreeMap<FieldPath, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, path: FieldPath, value: FieldValue) {
        self.fields.insert(path, value);
    }

    /// Reset a field to unset.
    pub fn clear(&mut self, path: FieldPath) {
        self.fields.remove(&path);
    }

    pub fn get(&self, path: FieldPath) -> Option<&FieldValue> {
        self.fields.get(&path)
    }

    /// The field's choice token, if it holds a non-blank one.
    pub fn token(&self, path: FieldPath) -> Option<&str> {
        self.fields.get(&path).and_then(FieldValue::as_token)
    }

    pub fn number(&self, path: FieldPath) -> Option<f64> {
        self.fields.get(&path).and_then(FieldValue::as_number)
    }

    /// Unset or blank both count as "null" for the rules.
    pub fn is_blank(&self, path: FieldPath) -> bool {
        self.fields.get(&path).is_none_or(FieldValue::is_blank)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &FieldValue)> {
        self.fields.iter()
    }

    /// Absorb another state's fields (used when assembling a child exam
    /// from its per-step records).
    pub fn merge(&mut self, other: FormState) {
        self.fields.extend(other.fields);
    }
}
