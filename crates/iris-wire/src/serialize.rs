//! Submit serialization.
//!
//! Transforms form state into the payload a section endpoint expects:
//! fields are renamed to their wire keys, per-eye fields are prefixed
//! or regrouped, and a field whose governing condition does not hold is
//! omitted — never sent as null.

use serde_json::{Map, Value};

use iris_forms::sections::{
    binoculaire::Binoculaire, clinique::Clinique, enfant::EnfantGeneral, technique::Technique,
};
use iris_forms::state::{FieldValue, FormState};
use iris_forms::Section;

/// Wire name of a biomicroscopy group; the `bp_` prefix is a form-side
/// artifact the backend never sees.
pub(crate) fn wire_group(group: &str) -> &str {
    group.strip_prefix("bp_").unwrap_or(group)
}

pub(crate) fn eye_prefixed(eye: &str, wire_key: &str) -> String {
    format!("{eye}_{wire_key}")
}

fn json_value(value: &FieldValue) -> Option<Value> {
    match value {
        FieldValue::Choice(s) | FieldValue::Text(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| Value::String(s.to_string()))
        }
        FieldValue::Number(n) => serde_json::Number::from_f64(*n).map(Value::Number),
    }
}

fn nested<'a>(root: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    let slot = root
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    slot.as_object_mut().expect("slot was just made an object")
}

/// Serialize one section's active fields into its endpoint payload.
pub fn serialize(state: &FormState, section: &dyn Section) -> Value {
    let mut root = Map::new();
    for rule in section.rules() {
        if !rule.is_active(state) {
            continue;
        }
        let Some(value) = state.get(rule.field).and_then(json_value) else {
            continue;
        };
        match (rule.field.eye, rule.field.id.group()) {
            (Some(eye), Some(group)) => {
                nested(nested(&mut root, eye.as_str()), wire_group(group))
                    .insert(rule.wire_key.to_string(), value);
            }
            (Some(eye), None) => {
                root.insert(eye_prefixed(eye.as_str(), rule.wire_key), value);
            }
            (None, _) => {
                root.insert(rule.wire_key.to_string(), value);
            }
        }
    }
    Value::Object(root)
}

/// The single child-exam submit payload: general fields at the root,
/// the shared sections nested under their own keys. Child exams have
/// no per-section save.
pub fn serialize_enfant(state: &FormState) -> Value {
    let mut root = match serialize(state, &EnfantGeneral) {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    root.insert("technique".to_string(), serialize(state, &Technique));
    root.insert("binoculaire".to_string(), serialize(state, &Binoculaire));
    root.insert("clinique".to_string(), serialize(state, &Clinique));
    Value::Object(root)
}
