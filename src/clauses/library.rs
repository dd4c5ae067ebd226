//! Payload-driven clause generators

use super::Clause;
use crate::jurisdiction::state_name;
use crate::payload::{coalesce, present, FormPayload};
use crate::templates::{Category, Template};

const COMPENSATION_FALLBACK: &str = "As described in the attached schedule";
const TERM_END_FALLBACK: &str = "until completion";
const AS_AGREED: &str = "As agreed";
const SEE_SCHEDULE: &str = "See schedule";
const NONE_STATED: &str = "None";

/// Plain-English Overview - always first
pub fn overview(payload: &FormPayload, template: &Template) -> Clause {
    let summary = present(&payload.plain_english_intro)
        .map(str::to_string)
        .or_else(|| {
            let summary = payload.relationship_summary.trim();
            (!summary.is_empty()).then(|| summary.to_string())
        })
        .unwrap_or_else(|| {
            format!(
                "{} and {} are entering into this agreement.",
                payload.party_one_name.trim(),
                payload.party_two_name.trim()
            )
        });

    let body = format!(
        "{}\n\nThis agreement is effective as of {} and is made between {} (\"Party A\") and {} (\"Party B\").",
        template.description.trim(),
        payload.effective_date.trim(),
        payload.party_one_name.trim(),
        payload.party_two_name.trim()
    );

    Clause::new("Plain-English Overview", summary, body)
}

/// Business Terms - compensation and term span
pub fn business_terms(payload: &FormPayload) -> Clause {
    let compensation = coalesce(&[&payload.payment_details, &payload.payment_terms]);

    let summary = compensation.map(str::to_string).unwrap_or_else(|| {
        "How and when payment is made, and how long this agreement runs.".to_string()
    });

    let start = present(&payload.term_start).unwrap_or_else(|| payload.effective_date.trim());
    let end = present(&payload.term_end).unwrap_or(TERM_END_FALLBACK);

    let body = format!(
        "Compensation: {}.\nTerm: This agreement runs from {} through {}.",
        compensation
            .unwrap_or(COMPENSATION_FALLBACK)
            .trim_end_matches('.'),
        start,
        end
    );

    Clause::new("Business Terms", summary, body)
}

/// Category-specific clauses for the template's category
pub fn category_clauses(payload: &FormPayload, template: &Template) -> Vec<Clause> {
    match template.category {
        Category::Service | Category::Employment => [
            scope_of_work(payload),
            deliverables(payload),
            milestones(payload),
            warranty(payload),
            revisions(payload),
            service_guarantees(payload),
        ]
        .into_iter()
        .flatten()
        .collect(),
        Category::Finance => financial_terms(payload).into_iter().collect(),
        Category::RealEstate | Category::Transaction => {
            property_details(payload).into_iter().collect()
        }
        Category::Policy | Category::Intellectual => vec![policy_statement(template)],
    }
}

fn field_clause(value: &Option<String>, heading: &str, summary: &str) -> Option<Clause> {
    present(value).map(|body| Clause::new(heading, summary, body))
}

pub fn scope_of_work(payload: &FormPayload) -> Option<Clause> {
    field_clause(
        &payload.scope_of_work,
        "Scope of Work",
        "The work Party A will perform for Party B.",
    )
}

pub fn deliverables(payload: &FormPayload) -> Option<Clause> {
    field_clause(
        &payload.deliverables,
        "Deliverables",
        "What Party A will hand over when the work is done.",
    )
}

pub fn milestones(payload: &FormPayload) -> Option<Clause> {
    field_clause(
        &payload.milestones,
        "Milestones",
        "The key checkpoints and dates for the work.",
    )
}

pub fn warranty(payload: &FormPayload) -> Option<Clause> {
    field_clause(
        &payload.warranties,
        "Warranty",
        "The promises Party A makes about the quality of the work.",
    )
}

pub fn revisions(payload: &FormPayload) -> Option<Clause> {
    field_clause(
        &payload.revisions,
        "Revisions",
        "How requests for changes are handled.",
    )
}

pub fn service_guarantees(payload: &FormPayload) -> Option<Clause> {
    field_clause(
        &payload.service_guarantees,
        "Service Guarantees",
        "The service levels Party A commits to and what happens if they are missed.",
    )
}

/// Financial Terms - omitted when interest, repayment and collateral are all empty
pub fn financial_terms(payload: &FormPayload) -> Option<Clause> {
    let interest = present(&payload.interest_rate);
    let repayment = present(&payload.repayment_schedule);
    let collateral = present(&payload.collateral);

    if interest.is_none() && repayment.is_none() && collateral.is_none() {
        return None;
    }

    let mut body = format!(
        "Interest Rate: {}\nRepayment Schedule: {}\nCollateral: {}\nLate Fees: {}",
        interest.unwrap_or(AS_AGREED),
        repayment.unwrap_or(SEE_SCHEDULE),
        collateral.unwrap_or(NONE_STATED),
        present(&payload.late_fees).unwrap_or(AS_AGREED)
    );
    if let Some(penalties) = present(&payload.penalties) {
        body.push_str(&format!("\nPenalties: {}", penalties));
    }

    Some(Clause::new(
        "Financial Terms",
        "How much is owed, what it costs and how it is paid back.",
        body,
    ))
}

/// Property Details - omitted when property address and price are both empty
pub fn property_details(payload: &FormPayload) -> Option<Clause> {
    let address = present(&payload.property_address);
    let price = present(&payload.purchase_price);

    if address.is_none() && price.is_none() {
        return None;
    }

    let body = format!(
        "Property Address: {}\nPrice / Rent: {}\nDeposit: {}",
        address.unwrap_or(SEE_SCHEDULE),
        price.unwrap_or(AS_AGREED),
        present(&payload.deposit_amount).unwrap_or(NONE_STATED)
    );

    Some(Clause::new(
        "Property Details",
        "The property covered by this agreement and the money involved.",
        body,
    ))
}

/// Policy Statement - always emitted for policy and intellectual templates
pub fn policy_statement(template: &Template) -> Clause {
    let body = format!(
        "{}\n\nParty A may update this policy from time to time by giving Party B notice of the changes. Continued use after notice means Party B accepts the updated terms.",
        template.description.trim()
    );

    Clause::new(
        "Policy Statement",
        "What this document covers and how it can be changed.",
        body,
    )
}

/// Intellectual Property - work-for-hire unless ownership details are supplied
pub fn ip_ownership(payload: &FormPayload) -> Clause {
    let body = match present(&payload.ownership_details) {
        Some(details) => details.to_string(),
        None => "All work product created by Party A under this agreement is a work made for hire for Party B. To the extent any work product does not qualify as a work made for hire, Party A assigns all right, title and interest in it to Party B upon full payment.".to_string(),
    };

    Clause::new(
        "Intellectual Property",
        "Who owns the work created under this agreement.",
        body,
    )
}

/// Arbitration - administered in the governing-law state
pub fn arbitration(payload: &FormPayload) -> Clause {
    let state = state_name(&payload.governing_law);
    let body = format!(
        "Any dispute arising out of or relating to this agreement will be resolved by binding arbitration administered in {state}. The arbitrator's decision is final and may be entered as a judgment in any court of competent jurisdiction. Each party bears its own costs unless the arbitrator decides otherwise."
    );

    Clause::new(
        "Arbitration",
        format!("Disputes go to a private arbitrator in {} instead of court.", state),
        body,
    )
}

/// Governing Law - always present
pub fn governing_law(payload: &FormPayload) -> Clause {
    let state = state_name(&payload.governing_law);
    let body = format!(
        "This agreement is governed by and interpreted under the laws of {state}, without regard to its conflict-of-law rules."
    );

    Clause::new(
        "Governing Law",
        format!("The laws of {} apply to this agreement.", state),
        body,
    )
}

/// Additional Notes - only when custom notes were supplied
pub fn additional_notes(payload: &FormPayload) -> Option<Clause> {
    field_clause(
        &payload.custom_notes,
        "Additional Notes",
        "Extra context the parties asked to include.",
    )
}

/// One numbered clause per custom clause entry, in order
pub fn custom_clauses(payload: &FormPayload) -> Vec<Clause> {
    payload
        .optional_clauses
        .iter()
        .enumerate()
        .map(|(i, text)| {
            Clause::new(
                format!("Custom Clause {}", i + 1),
                "Added by the contract creator.",
                text.as_str(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{ContractType, TemplateRegistry};

    fn template(t: ContractType) -> Template {
        TemplateRegistry::builtin().get(t).cloned().unwrap()
    }

    fn parties() -> FormPayload {
        FormPayload {
            party_one_name: "Oakview Homes LLC".into(),
            party_two_name: "Jordan Ellis".into(),
            effective_date: "March 1, 2026".into(),
            governing_law: "OR".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_overview_summary_precedence() {
        let lease = template(ContractType::ResidentialLease);
        let mut payload = parties();

        assert_eq!(
            overview(&payload, &lease).summary,
            "Oakview Homes LLC and Jordan Ellis are entering into this agreement."
        );

        payload.relationship_summary = "Twelve month lease of a townhouse".into();
        assert_eq!(
            overview(&payload, &lease).summary,
            "Twelve month lease of a townhouse"
        );

        payload.plain_english_intro = Some("Jordan rents the townhouse from Oakview.".into());
        assert_eq!(
            overview(&payload, &lease).summary,
            "Jordan rents the townhouse from Oakview."
        );
    }

    #[test]
    fn test_overview_body_binds_parties() {
        let lease = template(ContractType::ResidentialLease);
        let body = overview(&parties(), &lease).body;
        assert!(body.starts_with(&lease.description));
        assert!(body.contains(
            "effective as of March 1, 2026 and is made between Oakview Homes LLC (\"Party A\") and Jordan Ellis (\"Party B\")"
        ));
    }

    #[test]
    fn test_business_terms_fallbacks() {
        let clause = business_terms(&parties());
        assert_eq!(
            clause.summary,
            "How and when payment is made, and how long this agreement runs."
        );
        assert!(clause
            .body
            .contains("Compensation: As described in the attached schedule."));
        assert!(clause
            .body
            .contains("runs from March 1, 2026 through until completion."));
    }

    #[test]
    fn test_business_terms_prefers_details_then_terms() {
        let mut payload = parties();
        payload.payment_terms = Some("Net 30".into());
        payload.term_start = Some("April 1, 2026".into());
        payload.term_end = Some("March 31, 2027".into());
        let clause = business_terms(&payload);
        assert_eq!(clause.summary, "Net 30");
        assert!(clause.body.contains("Compensation: Net 30."));
        assert!(clause.body.contains("from April 1, 2026 through March 31, 2027."));

        payload.payment_details = Some("$2,150 per month".into());
        assert_eq!(business_terms(&payload).summary, "$2,150 per month");
    }

    #[test]
    fn test_financial_terms_gating_and_penalties() {
        let mut payload = parties();
        payload.late_fees = Some("5% after 10 days".into());
        assert!(financial_terms(&payload).is_none());

        payload.collateral = Some("2019 Ford F-150".into());
        let clause = financial_terms(&payload).unwrap();
        assert!(clause.body.contains("Interest Rate: As agreed"));
        assert!(clause.body.contains("Repayment Schedule: See schedule"));
        assert!(clause.body.contains("Collateral: 2019 Ford F-150"));
        assert!(clause.body.contains("Late Fees: 5% after 10 days"));
        assert!(!clause.body.contains("Penalties:"));

        payload.penalties = Some("Acceleration of the full balance".into());
        let clause = financial_terms(&payload).unwrap();
        assert!(clause.body.ends_with("Penalties: Acceleration of the full balance"));
    }

    #[test]
    fn test_property_details_gating() {
        let mut payload = parties();
        payload.deposit_amount = Some("$2,150".into());
        assert!(property_details(&payload).is_none());

        payload.purchase_price = Some("$2150/mo".into());
        let clause = property_details(&payload).unwrap();
        assert!(clause.body.contains("Property Address: See schedule"));
        assert!(clause.body.contains("Price / Rent: $2150/mo"));
        assert!(clause.body.contains("Deposit: $2,150"));
    }

    #[test]
    fn test_service_clauses_skip_blank_fields() {
        let mut payload = parties();
        payload.scope_of_work = Some("Design and build a marketing site".into());
        payload.milestones = Some("   ".into());
        payload.revisions = Some("Two rounds included".into());

        let headings: Vec<String> =
            category_clauses(&payload, &template(ContractType::FreelanceContract))
                .into_iter()
                .map(|c| c.heading)
                .collect();
        assert_eq!(headings, vec!["Scope of Work", "Revisions"]);
    }

    #[test]
    fn test_policy_statement_always_emitted() {
        let policy = template(ContractType::PrivacyPolicy);
        let clauses = category_clauses(&FormPayload::default(), &policy);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].heading, "Policy Statement");
        assert!(clauses[0].body.contains("Party A may update this policy"));
    }

    #[test]
    fn test_ip_ownership_default_and_override() {
        let mut payload = parties();
        assert!(ip_ownership(&payload).body.contains("work made for hire for Party B"));

        payload.ownership_details =
            Some("Party A retains all rights and licenses them to Party B.".into());
        assert_eq!(
            ip_ownership(&payload).body,
            "Party A retains all rights and licenses them to Party B."
        );
    }

    #[test]
    fn test_state_name_substituted() {
        let payload = parties();
        assert!(arbitration(&payload).body.contains("administered in Oregon."));
        assert!(governing_law(&payload).body.contains("the laws of Oregon,"));
    }

    #[test]
    fn test_custom_clauses_numbered_in_order() {
        let mut payload = parties();
        payload.optional_clauses = vec!["Clause text A".into(), "Clause text B".into()];
        let clauses = custom_clauses(&payload);
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].heading, "Custom Clause 1");
        assert_eq!(clauses[1].body, "Clause text B");
        assert_eq!(clauses[1].summary, "Added by the contract creator.");
    }

    #[test]
    fn test_additional_notes_only_when_present() {
        let mut payload = parties();
        assert!(additional_notes(&payload).is_none());
        payload.custom_notes = Some("".into());
        assert!(additional_notes(&payload).is_none());
        payload.custom_notes = Some("Pets allowed with approval.".into());
        assert_eq!(additional_notes(&payload).unwrap().body, "Pets allowed with approval.");
    }
}
