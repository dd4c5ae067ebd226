//! Fixed boilerplate clauses
//!
//! Toggle-controlled legal clauses, the standard closing clauses and the
//! signature block. Text is fixed; only party names are interpolated.

use super::Clause;
use crate::payload::FormPayload;

pub fn confidentiality() -> Clause {
    Clause::new(
        "Confidentiality",
        "Both parties keep each other's private information secret.",
        "Each party will hold the other party's confidential information in confidence, using at least the same degree of care it uses to protect its own confidential information and no less than reasonable care. Confidential information may be used only to perform this agreement and may be disclosed only to those who need to know it and are bound by similar obligations. These obligations do not apply to information that is public through no fault of the receiving party or that must be disclosed by law.",
    )
}

pub fn non_solicitation() -> Clause {
    Clause::new(
        "Non-Solicitation",
        "Neither party poaches the other's employees or clients for a year.",
        "During the term of this agreement and for 12 months after it ends, neither party will directly or indirectly solicit or hire the other party's employees or contractors, or solicit the other party's clients introduced through this agreement, without prior written consent.",
    )
}

pub fn indemnification() -> Clause {
    Clause::new(
        "Indemnification",
        "Each party covers the other for claims caused by its own breach or misconduct.",
        "Each party will defend, indemnify and hold harmless the other party from third-party claims, losses and expenses, including reasonable attorneys' fees, arising from its breach of this agreement, its negligence or its willful misconduct.",
    )
}

pub fn liability_cap() -> Clause {
    Clause::new(
        "Limitation of Liability",
        "Damages are capped at the fees paid over the last 12 months.",
        "Except for fraud or intentional misconduct, each party's total liability arising out of this agreement will not exceed the fees paid under this agreement in the 12 months before the event giving rise to the claim. Neither party is liable for indirect, incidental or consequential damages.",
    )
}

pub fn representations(payload: &FormPayload) -> Clause {
    let body = format!(
        "{} and {} each represent that they have full authority to enter into this agreement, that doing so does not violate any other agreement they are bound by, and that they will comply with all applicable laws in performing it.",
        payload.party_one_name.trim(),
        payload.party_two_name.trim()
    );

    Clause::new(
        "Representations & Warranties",
        "Both parties confirm they are allowed to sign and will follow the law.",
        body,
    )
}

pub fn termination() -> Clause {
    Clause::new(
        "Termination",
        "Either party can end the agreement if the other breaks it and does not fix it within 10 days.",
        "Either party may terminate this agreement by written notice if the other party materially breaches it and fails to cure the breach within 10 days after receiving notice of it. Sections covering payment, confidentiality, indemnity and dispute resolution survive termination.",
    )
}

pub fn notices() -> Clause {
    Clause::new(
        "Notices",
        "Formal notices must be sent in writing to the addresses on file.",
        "All notices under this agreement must be in writing and delivered by certified mail, by nationally recognized courier, or by email with confirmation of receipt, to the address most recently provided by the receiving party.",
    )
}

pub fn entire_agreement() -> Clause {
    Clause::new(
        "Entire Agreement",
        "This document is the whole deal; changes must be in writing.",
        "This agreement is the entire agreement between the parties and supersedes all prior discussions, proposals and agreements on its subject. Any amendment must be in writing and signed by both parties.",
    )
}

pub fn severability() -> Clause {
    Clause::new(
        "Severability",
        "If one part is invalid, the rest still applies.",
        "If any provision of this agreement is held invalid or unenforceable, that provision will be severed and replaced with a valid provision that comes closest to the parties' original intent, and the remaining provisions stay in full effect.",
    )
}

/// Signature block - always the last block
pub fn signatures() -> Clause {
    Clause::new(
        "Signatures",
        "Both parties sign below to make this agreement binding.",
        "Party A Signature: ____________________________  Date: ______________\nParty B Signature: ____________________________  Date: ______________",
    )
}
