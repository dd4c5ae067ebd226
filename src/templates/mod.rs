//! Contract Templates
//!
//! A template is the static metadata for one contract type: label,
//! description, preparation checklist and the category that decides which
//! category-specific clauses the composer renders.
//!
//! Categories:
//! - service, employment - scope, deliverables, milestones and guarantees
//! - finance - interest, repayment and collateral
//! - real-estate, transaction - property, price and deposit
//! - policy, intellectual - a policy statement

mod catalog;
mod definition;
mod registry;

pub use catalog::TemplateOverride;
pub use definition::{
    Category, ContractType, ParseCategoryError, ParseContractTypeError, Template,
};
pub use registry::TemplateRegistry;
