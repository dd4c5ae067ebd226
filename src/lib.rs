//! Contract Drafter
//!
//! Template-driven contract assembly. A validated form payload and a
//! template resolve to a clause-ordered document:
//!
//! 1. Registry lookup by contract type
//! 2. The clause pipeline picks the applicable clauses in a fixed order
//! 3. Each clause renders as heading, plain-English summary and body
//! 4. Blocks are joined and closed with a signature block
//!
//! # Example
//!
//! ```
//! use contract_drafter::{generate, FormPayload};
//!
//! let payload = FormPayload {
//!     contract_type: "residential-lease".into(),
//!     party_one_name: "Oakview Homes LLC".into(),
//!     party_two_name: "Jordan Ellis".into(),
//!     effective_date: "2026-03-01".into(),
//!     governing_law: "OR".into(),
//!     relationship_summary: "Twelve month lease of a townhouse".into(),
//!     property_address: Some("214 Oakview Dr".into()),
//!     ..Default::default()
//! };
//!
//! let doc = generate("residential-lease", &payload).unwrap();
//! assert!(doc.content.contains("PROPERTY DETAILS"));
//! ```

pub mod clauses;
pub mod composer;
pub mod config;
pub mod error;
pub mod jurisdiction;
pub mod payload;
pub mod record;
pub mod templates;

pub use clauses::Clause;
pub use composer::{
    compose, compose_clauses, generate, generate_with, validate_and_generate, validate_and_plan,
    GeneratedDocument,
};
pub use config::{DrafterConfig, OutputFormat};
pub use error::{DraftError, FieldError, ValidationErrors};
pub use payload::{ClauseToggles, FormPayload};
pub use record::DraftRecord;
pub use templates::{Category, ContractType, Template, TemplateRegistry};
