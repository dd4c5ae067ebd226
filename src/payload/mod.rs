//! Form payloads and their boundary validation

mod types;
mod validation;

pub use types::{coalesce, present, ClauseToggles, FormPayload};
