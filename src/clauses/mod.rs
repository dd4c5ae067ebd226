//! Clause Library
//!
//! Every clause in a generated document has the same three parts: an
//! upper-case heading, a one-line plain-English summary and the operative
//! body. Generators here are pure; missing optional fields fall back to
//! placeholder text rather than failing.

mod boilerplate;
mod library;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use boilerplate::{
    confidentiality, entire_agreement, indemnification, liability_cap, non_solicitation,
    notices, representations, severability, signatures, termination,
};
pub use library::{
    additional_notes, arbitration, business_terms, category_clauses, custom_clauses,
    deliverables, financial_terms, governing_law, ip_ownership, milestones, overview,
    policy_statement, property_details, revisions, scope_of_work, service_guarantees, warranty,
};

/// One heading + summary + body block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub heading: String,
    pub summary: String,
    pub body: String,
}

impl Clause {
    pub fn new(
        heading: impl Into<String>,
        summary: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            summary: summary.into(),
            body: body.into(),
        }
    }

    /// Text block as it appears in the document
    ///
    /// `\nHEADING\nSummary: <summary>\n\n<body>\n`
    pub fn render(&self) -> String {
        format!(
            "\n{}\nSummary: {}\n\n{}\n",
            self.heading.to_uppercase(),
            self.summary.trim(),
            self.body.trim()
        )
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
