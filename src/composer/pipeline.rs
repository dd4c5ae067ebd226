//! Clause pipeline
//!
//! The document order lives in one declarative table. Each step pairs a
//! predicate with a renderer; steps run top to bottom and a step that does
//! not apply (or renders nothing) leaves no trace in the output.

use crate::clauses::{self, Clause};
use crate::payload::FormPayload;
use crate::templates::Template;

/// Inputs every step reads
#[derive(Debug, Clone, Copy)]
pub struct DraftContext<'a> {
    pub payload: &'a FormPayload,
    pub template: &'a Template,
}

/// One entry of the clause pipeline
pub struct ClauseStep {
    /// Stable step name, used in logs and the CLI plan output
    pub name: &'static str,
    pub applies: fn(&DraftContext<'_>) -> bool,
    pub render: fn(&DraftContext<'_>) -> Vec<Clause>,
}

impl ClauseStep {
    fn run(&self, ctx: &DraftContext<'_>) -> Vec<Clause> {
        if (self.applies)(ctx) {
            (self.render)(ctx)
        } else {
            Vec::new()
        }
    }
}

/// Document order, first to last
#[rustfmt::skip]
pub static PIPELINE: &[ClauseStep] = &[
    ClauseStep { name: "overview", applies: always, render: overview },
    ClauseStep { name: "business-terms", applies: always, render: business_terms },
    ClauseStep { name: "category", applies: always, render: category },
    ClauseStep { name: "confidentiality", applies: wants_confidentiality, render: confidentiality },
    ClauseStep { name: "ip-ownership", applies: wants_ip_ownership, render: ip_ownership },
    ClauseStep {
        name: "non-solicitation",
        applies: wants_non_solicitation,
        render: non_solicitation,
    },
    ClauseStep { name: "arbitration", applies: wants_arbitration, render: arbitration },
    ClauseStep { name: "indemnification", applies: wants_indemnification, render: indemnification },
    ClauseStep { name: "liability-cap", applies: wants_liability_cap, render: liability_cap },
    ClauseStep { name: "representations", applies: always, render: representations },
    ClauseStep { name: "termination", applies: always, render: termination },
    ClauseStep { name: "notices", applies: always, render: notices },
    ClauseStep { name: "entire-agreement", applies: always, render: entire_agreement },
    ClauseStep { name: "severability", applies: always, render: severability },
    ClauseStep { name: "governing-law", applies: always, render: governing_law },
    ClauseStep { name: "additional-notes", applies: always, render: additional_notes },
    ClauseStep { name: "custom-clauses", applies: always, render: custom_clauses },
    ClauseStep { name: "signatures", applies: always, render: signatures },
];

/// Run every step in order
pub fn run(ctx: &DraftContext<'_>) -> Vec<Clause> {
    PIPELINE.iter().flat_map(|step| step.run(ctx)).collect()
}

/// Names of the steps that produce at least one clause for `ctx`
pub fn plan(ctx: &DraftContext<'_>) -> Vec<&'static str> {
    PIPELINE
        .iter()
        .filter(|step| !step.run(ctx).is_empty())
        .map(|step| step.name)
        .collect()
}

// Predicates

fn always(_: &DraftContext<'_>) -> bool {
    true
}

fn wants_confidentiality(ctx: &DraftContext<'_>) -> bool {
    ctx.payload.toggles.include_confidentiality
}

fn wants_ip_ownership(ctx: &DraftContext<'_>) -> bool {
    ctx.payload.toggles.include_ip_ownership
}

fn wants_non_solicitation(ctx: &DraftContext<'_>) -> bool {
    ctx.payload.toggles.include_non_solicitation
}

fn wants_arbitration(ctx: &DraftContext<'_>) -> bool {
    ctx.payload.toggles.include_arbitration
}

fn wants_indemnification(ctx: &DraftContext<'_>) -> bool {
    ctx.payload.toggles.include_indemnification
}

fn wants_liability_cap(ctx: &DraftContext<'_>) -> bool {
    ctx.payload.toggles.include_liability_cap
}

// Renderers

fn overview(ctx: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::overview(ctx.payload, ctx.template)]
}

fn business_terms(ctx: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::business_terms(ctx.payload)]
}

fn category(ctx: &DraftContext<'_>) -> Vec<Clause> {
    clauses::category_clauses(ctx.payload, ctx.template)
}

fn confidentiality(_: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::confidentiality()]
}

fn ip_ownership(ctx: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::ip_ownership(ctx.payload)]
}

fn non_solicitation(_: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::non_solicitation()]
}

fn arbitration(ctx: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::arbitration(ctx.payload)]
}

fn indemnification(_: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::indemnification()]
}

fn liability_cap(_: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::liability_cap()]
}

fn representations(ctx: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::representations(ctx.payload)]
}

fn termination(_: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::termination()]
}

fn notices(_: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::notices()]
}

fn entire_agreement(_: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::entire_agreement()]
}

fn severability(_: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::severability()]
}

fn governing_law(ctx: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::governing_law(ctx.payload)]
}

fn additional_notes(ctx: &DraftContext<'_>) -> Vec<Clause> {
    clauses::additional_notes(ctx.payload).into_iter().collect()
}

fn custom_clauses(ctx: &DraftContext<'_>) -> Vec<Clause> {
    clauses::custom_clauses(ctx.payload)
}

fn signatures(_: &DraftContext<'_>) -> Vec<Clause> {
    vec![clauses::signatures()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::ClauseToggles;
    use crate::templates::{ContractType, TemplateRegistry};

    #[test]
    fn test_signatures_is_last_step() {
        assert_eq!(PIPELINE.last().map(|s| s.name), Some("signatures"));
    }

    #[test]
    fn test_step_names_unique() {
        let mut names: Vec<_> = PIPELINE.iter().map(|s| s.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PIPELINE.len());
    }

    #[test]
    fn test_plan_skips_disabled_and_empty_steps() {
        let template = TemplateRegistry::builtin()
            .get(ContractType::LoanAgreement)
            .unwrap();
        let payload = FormPayload {
            party_one_name: "First Plains Credit".into(),
            party_two_name: "Sam Ortiz".into(),
            effective_date: "2026-05-01".into(),
            governing_law: "NE".into(),
            toggles: ClauseToggles::all(false),
            ..Default::default()
        };
        let ctx = DraftContext {
            payload: &payload,
            template,
        };

        assert_eq!(
            plan(&ctx),
            vec![
                "overview",
                "business-terms",
                "representations",
                "termination",
                "notices",
                "entire-agreement",
                "severability",
                "governing-law",
                "signatures",
            ]
        );
    }
}
