//! iris-wire
//!
//! Mapping between form state and the backend's JSON shapes: submit
//! serialization (rename, regroup, omit) and response hydration
//! (graceful degradation). Pure functions driven by the same rule
//! tables as the form engine; transport belongs to the API client.

pub mod error;
pub mod hydrate;
pub mod serialize;
pub mod submit;
