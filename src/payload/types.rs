//! Form Payload Types
//!
//! The answers collected by the guided form. Field names on the wire are
//! camelCase (`partyOneName`, `includeConfidentiality`, ...).

use serde::{Deserialize, Serialize};

/// Caller-supplied answers driving document generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPayload {
    /// Template identifier (e.g. "residential-lease")
    #[serde(default)]
    pub contract_type: String,

    /// Party A
    #[serde(default)]
    pub party_one_name: String,
    #[serde(default)]
    pub party_one_address: Option<String>,

    /// Party B
    #[serde(default)]
    pub party_two_name: String,
    #[serde(default)]
    pub party_two_address: Option<String>,

    /// Free-text date, not parsed
    #[serde(default)]
    pub effective_date: String,
    #[serde(default)]
    pub term_start: Option<String>,
    #[serde(default)]
    pub term_end: Option<String>,

    /// Two-letter U.S. state code
    #[serde(default)]
    pub governing_law: String,

    #[serde(default)]
    pub relationship_summary: String,

    #[serde(default)]
    pub plain_english_intro: Option<String>,

    // Business terms
    #[serde(default)]
    pub payment_details: Option<String>,
    #[serde(default)]
    pub payment_terms: Option<String>,

    // Service and employment
    #[serde(default)]
    pub scope_of_work: Option<String>,
    #[serde(default)]
    pub deliverables: Option<String>,
    #[serde(default)]
    pub milestones: Option<String>,
    #[serde(default)]
    pub warranties: Option<String>,
    #[serde(default)]
    pub revisions: Option<String>,
    #[serde(default)]
    pub service_guarantees: Option<String>,

    // Real estate and transactions
    #[serde(default)]
    pub property_address: Option<String>,
    #[serde(default)]
    pub purchase_price: Option<String>,
    #[serde(default)]
    pub deposit_amount: Option<String>,

    // Finance
    #[serde(default)]
    pub interest_rate: Option<String>,
    #[serde(default)]
    pub repayment_schedule: Option<String>,
    #[serde(default)]
    pub collateral: Option<String>,
    #[serde(default)]
    pub late_fees: Option<String>,
    #[serde(default)]
    pub penalties: Option<String>,

    /// Explicit IP ownership terms; replaces the work-for-hire default
    #[serde(default)]
    pub ownership_details: Option<String>,

    #[serde(flatten)]
    pub toggles: ClauseToggles,

    /// Each entry becomes its own numbered custom clause
    #[serde(default)]
    pub optional_clauses: Vec<String>,

    #[serde(default)]
    pub custom_notes: Option<String>,
}

impl Default for FormPayload {
    fn default() -> Self {
        Self {
            contract_type: String::new(),
            party_one_name: String::new(),
            party_one_address: None,
            party_two_name: String::new(),
            party_two_address: None,
            effective_date: String::new(),
            term_start: None,
            term_end: None,
            governing_law: String::new(),
            relationship_summary: String::new(),
            plain_english_intro: None,
            payment_details: None,
            payment_terms: None,
            scope_of_work: None,
            deliverables: None,
            milestones: None,
            warranties: None,
            revisions: None,
            service_guarantees: None,
            property_address: None,
            purchase_price: None,
            deposit_amount: None,
            interest_rate: None,
            repayment_schedule: None,
            collateral: None,
            late_fees: None,
            penalties: None,
            ownership_details: None,
            toggles: ClauseToggles::default(),
            optional_clauses: Vec::new(),
            custom_notes: None,
        }
    }
}

/// Inclusion switches for the optional legal clauses (all on by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseToggles {
    #[serde(default = "default_true")]
    pub include_confidentiality: bool,
    #[serde(default = "default_true")]
    pub include_indemnification: bool,
    #[serde(default = "default_true")]
    pub include_liability_cap: bool,
    #[serde(default = "default_true")]
    pub include_non_solicitation: bool,
    #[serde(default = "default_true")]
    pub include_arbitration: bool,
    #[serde(default = "default_true")]
    pub include_ip_ownership: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ClauseToggles {
    fn default() -> Self {
        Self::all(true)
    }
}

impl ClauseToggles {
    /// Every toggle set to `value`
    pub fn all(value: bool) -> Self {
        Self {
            include_confidentiality: value,
            include_indemnification: value,
            include_liability_cap: value,
            include_non_solicitation: value,
            include_arbitration: value,
            include_ip_ownership: value,
        }
    }
}

/// Trimmed value of an optional field, `None` when absent or blank
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// First present value in order of precedence
pub fn coalesce<'a>(values: &[&'a Option<String>]) -> Option<&'a str> {
    values.iter().find_map(|v| present(*v))
}
