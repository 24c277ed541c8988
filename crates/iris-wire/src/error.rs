use thiserror::Error;

use iris_forms::evaluate::ValidationError;
use iris_forms::ranges::RangeError;

#[derive(Debug, Error)]
pub enum WireError {
    /// A required field is empty; nothing was serialized or sent.
    #[error("validation failed: {} required field(s) missing", .0.len())]
    Validation(Vec<ValidationError>),

    /// A measurement is outside its declared bounds.
    #[error("{} value(s) out of range", .0.len())]
    OutOfRange(Vec<RangeError>),
}
