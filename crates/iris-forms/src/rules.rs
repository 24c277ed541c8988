//! The declarative rule vocabulary.
//!
//! One [`FieldRule`] per field per section drives everything that was
//! historically spread over separate validation and serialization
//! layers: activation (`depends_on`), mandatoriness (`required_when`),
//! clearing (the complement of activation), and the backend field name
//! (`wire_key`). A single table means the layers cannot drift.

use iris_core::field::FieldPath;

use crate::state::FormState;

/// A condition over current form state. Evaluation is total: an unset
/// or unknown governing value makes every comparison false.
#[derive(Debug, Clone)]
pub enum Condition {
    Always,
    Never,
    /// The field holds any non-blank value.
    IsSet(FieldPath),
    /// The field holds exactly this choice token.
    Equals(FieldPath, &'static str),
    /// The field holds one of these choice tokens.
    OneOf(FieldPath, &'static [&'static str]),
    Not(Box<Condition>),
    All(Vec<Condition>),
    Any(Vec<Condition>),
}

impl Condition {
    pub fn not(inner: Condition) -> Condition {
        Condition::Not(Box::new(inner))
    }

    pub fn eval(&self, state: &FormState) -> bool {
        match self {
            Condition::Always => true,
            Condition::Never => false,
            Condition::IsSet(path) => !state.is_blank(*path),
            Condition::Equals(path, token) => state.token(*path) == Some(*token),
            Condition::OneOf(path, tokens) => {
                state.token(*path).is_some_and(|t| tokens.contains(&t))
            }
            Condition::Not(inner) => !inner.eval(state),
            Condition::All(conds) => conds.iter().all(|c| c.eval(state)),
            Condition::Any(conds) => conds.iter().any(|c| c.eval(state)),
        }
    }
}

/// One field's rule. A field whose `depends_on` does not hold is
/// inactive: hidden, never required, cleared if it still holds a value,
/// and omitted from the wire payload.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: FieldPath,
    pub depends_on: Condition,
    /// Additional condition for mandatoriness; the effective
    /// requirement is `depends_on` AND `required_when`.
    pub required_when: Condition,
    /// Backend name for this field (leaf name; eye prefixes and
    /// segment groups are derived from the path).
    pub wire_key: &'static str,
}

impl FieldRule {
    /// A field that is required whenever it is active.
    pub fn new(field: FieldPath, wire_key: &'static str, depends_on: Condition) -> Self {
        Self {
            field,
            depends_on,
            required_when: Condition::Always,
            wire_key,
        }
    }

    /// Mark the field as never mandatory.
    pub fn optional(mut self) -> Self {
        self.required_when = Condition::Never;
        self
    }

    pub fn is_active(&self, state: &FormState) -> bool {
        self.depends_on.eval(state)
    }

    pub fn is_required(&self, state: &FormState) -> bool {
        self.is_active(state) && self.required_when.eval(state)
    }
}
