//! Response hydration.
//!
//! Builds form state from a fetched exam record when editing an
//! existing exam. The inverse of serialization, driven by the same
//! rule tables. Anomalies degrade gracefully: a field with an
//! unexpected shape falls back to unset and is logged — hydration
//! never fails.

use serde_json::{Map, Value};
use tracing::warn;

use iris_core::field::FieldKind;
use iris_forms::rules::FieldRule;
use iris_forms::sections::{
    binoculaire::Binoculaire, clinique::Clinique, enfant::EnfantGeneral, technique::Technique,
};
use iris_forms::state::{FieldValue, FormState};
use iris_forms::Section;

use crate::serialize::{eye_prefixed, wire_group};

fn locate<'a>(root: &'a Map<String, Value>, rule: &FieldRule) -> Option<&'a Value> {
    let value = match (rule.field.eye, rule.field.id.group()) {
        (Some(eye), Some(group)) => root
            .get(eye.as_str())?
            .as_object()?
            .get(wire_group(group))?
            .as_object()?
            .get(rule.wire_key)?,
        (Some(eye), None) => root.get(&eye_prefixed(eye.as_str(), rule.wire_key))?,
        (None, _) => root.get(rule.wire_key)?,
    };
    (!value.is_null()).then_some(value)
}

fn field_value(raw: &Value, kind: FieldKind) -> Option<FieldValue> {
    match (kind, raw) {
        (FieldKind::Choice, Value::String(s)) => Some(FieldValue::Choice(s.clone())),
        (FieldKind::Text, Value::String(s)) => Some(FieldValue::Text(s.clone())),
        (FieldKind::Number, Value::Number(n)) => n.as_f64().map(FieldValue::Number),
        // Older records stored some measurements as strings.
        (FieldKind::Number, Value::String(s)) => s.trim().parse().ok().map(FieldValue::Number),
        _ => None,
    }
}

/// Build form state for one section from a fetched exam record.
pub fn hydrate(record: &Value, section: &dyn Section) -> FormState {
    let mut state = FormState::new();
    let Some(root) = record.as_object() else {
        warn!(
            section = section.id().as_str(),
            "exam record is not an object; starting from an empty form"
        );
        return state;
    };
    for rule in section.rules() {
        let Some(raw) = locate(root, rule) else {
            continue;
        };
        match field_value(raw, rule.field.id.kind()) {
            Some(value) => state.set(rule.field, value),
            None => warn!(
                field = %rule.field,
                "unexpected value shape in exam record; using empty default"
            ),
        }
    }
    state
}

/// Build the full child-exam form state from its combined record.
pub fn hydrate_enfant(record: &Value) -> FormState {
    let mut state = hydrate(record, &EnfantGeneral);
    let sections: [(&str, &dyn Section); 3] = [
        ("technique", &Technique),
        ("binoculaire", &Binoculaire),
        ("clinique", &Clinique),
    ];
    for (key, section) in sections {
        if let Some(sub) = record.get(key) {
            state.merge(hydrate(sub, section));
        }
    }
    state
}
