//! Error types for contract drafting
//!
//! Composition itself has a single failure mode (unknown template). Payload
//! problems are reported by the validator before composition runs. Catalog
//! override files fail with `Catalog`, which is an operator error.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for drafting
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Template not found: '{contract_type}'")]
    TemplateNotFound { contract_type: String },

    #[error("Invalid payload: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Template catalog error in {path:?}: {message}")]
    Catalog { path: PathBuf, message: String },
}

impl DraftError {
    /// True when the caller supplied bad input (maps to a client error)
    pub fn is_client_error(&self) -> bool {
        match self {
            DraftError::TemplateNotFound { .. } | DraftError::Validation(_) => true,
            DraftError::Catalog { .. } => false,
        }
    }

    pub(crate) fn catalog(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        DraftError::Catalog {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// A single rejected payload field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field (e.g. "partyOneName")
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field error found in one payload, in field order
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// True if `field` has at least one error
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}
