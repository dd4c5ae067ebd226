//! Document Composer
//!
//! Resolves the template, runs the clause pipeline and joins the rendered
//! blocks. Composition is a single pure computation: it either returns the
//! whole document or fails before producing any text.

pub mod pipeline;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clauses::Clause;
use crate::error::DraftError;
use crate::payload::FormPayload;
use crate::templates::{ContractType, Template, TemplateRegistry};

pub use pipeline::{ClauseStep, DraftContext, PIPELINE};

/// Composed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    /// Template label
    pub title: String,
    pub content: String,
    /// Template the document was drafted from
    pub template: ContractType,
}

/// Generate a document from the built-in registry
pub fn generate(
    contract_type: &str,
    payload: &FormPayload,
) -> Result<GeneratedDocument, DraftError> {
    generate_with(TemplateRegistry::builtin(), contract_type, payload)
}

/// Generate a document using `registry` for template metadata
pub fn generate_with(
    registry: &TemplateRegistry,
    contract_type: &str,
    payload: &FormPayload,
) -> Result<GeneratedDocument, DraftError> {
    let template = registry.lookup(contract_type)?;
    Ok(compose(template, payload))
}

/// Validate the payload, then generate using its own contract type
pub fn validate_and_generate(
    registry: &TemplateRegistry,
    payload: &FormPayload,
) -> Result<GeneratedDocument, DraftError> {
    payload.validate()?;
    generate_with(registry, &payload.contract_type, payload)
}

/// Validate the payload and name the pipeline steps that would fire
pub fn validate_and_plan(
    registry: &TemplateRegistry,
    payload: &FormPayload,
) -> Result<Vec<&'static str>, DraftError> {
    payload.validate()?;
    let template = registry.lookup(&payload.contract_type)?;
    Ok(pipeline::plan(&DraftContext { payload, template }))
}

/// Ordered clauses for an already-resolved template
pub fn compose_clauses(template: &Template, payload: &FormPayload) -> Vec<Clause> {
    pipeline::run(&DraftContext { payload, template })
}

/// Compose the full document for an already-resolved template
pub fn compose(template: &Template, payload: &FormPayload) -> GeneratedDocument {
    let blocks: Vec<String> = compose_clauses(template, payload)
        .iter()
        .map(Clause::render)
        .filter(|block| !block.trim().is_empty())
        .collect();

    debug!(
        contract_type = %template.id,
        category = %template.category,
        blocks = blocks.len(),
        "composed contract"
    );

    GeneratedDocument {
        title: template.label.clone(),
        content: blocks.join("\n"),
        template: template.id,
    }
}
