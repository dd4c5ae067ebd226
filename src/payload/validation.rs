//! Payload validation
//!
//! Runs at the boundary before composition. The composer assumes these
//! checks passed and never repeats them.

use crate::error::ValidationErrors;
use crate::jurisdiction::UsState;
use crate::templates::ContractType;

use super::types::FormPayload;

const MIN_PARTY_NAME: usize = 2;
const MIN_ADDRESS: usize = 5;
const MIN_EFFECTIVE_DATE: usize = 4;
const MIN_RELATIONSHIP_SUMMARY: usize = 10;

impl FormPayload {
    /// Check required fields, collecting every failure
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.contract_type.trim().is_empty() {
            errors.push("contractType", "is required");
        } else if let Err(e) = self.contract_type.parse::<ContractType>() {
            errors.push("contractType", e.to_string());
        }

        check_min_len(&mut errors, "partyOneName", &self.party_one_name, MIN_PARTY_NAME);
        check_min_len(
            &mut errors,
            "partyOneAddress",
            self.party_one_address.as_deref().unwrap_or(""),
            MIN_ADDRESS,
        );
        check_min_len(&mut errors, "partyTwoName", &self.party_two_name, MIN_PARTY_NAME);
        check_min_len(
            &mut errors,
            "partyTwoAddress",
            self.party_two_address.as_deref().unwrap_or(""),
            MIN_ADDRESS,
        );
        check_min_len(&mut errors, "effectiveDate", &self.effective_date, MIN_EFFECTIVE_DATE);

        if let Err(e) = self.governing_law.parse::<UsState>() {
            errors.push("governingLaw", e.to_string());
        }

        check_min_len(
            &mut errors,
            "relationshipSummary",
            &self.relationship_summary,
            MIN_RELATIONSHIP_SUMMARY,
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_min_len(errors: &mut ValidationErrors, field: &'static str, value: &str, min: usize) {
    if value.trim().chars().count() < min {
        errors.push(field, format!("must be at least {} characters", min));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> FormPayload {
        FormPayload {
            contract_type: "consulting-agreement".into(),
            party_one_name: "Northwind Advisory".into(),
            party_one_address: Some("12 Pine St, Denver".into()),
            party_two_name: "Harlow Foods".into(),
            party_two_address: Some("400 Market Ave".into()),
            effective_date: "2026-01-15".into(),
            governing_law: "CO".into(),
            relationship_summary: "Quarterly supply-chain advisory retainer".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let payload = FormPayload {
            contract_type: String::new(),
            party_one_name: "A".into(),
            party_two_address: None,
            effective_date: "26".into(),
            governing_law: "ZZ".into(),
            relationship_summary: "short".into(),
            ..valid_payload()
        };

        let errors = payload.validate().unwrap_err();
        for field in [
            "contractType",
            "partyOneName",
            "partyTwoAddress",
            "effectiveDate",
            "governingLaw",
            "relationshipSummary",
        ] {
            assert!(errors.has(field), "expected error for {}", field);
        }
        assert!(!errors.has("partyTwoName"));
        assert!(!errors.has("partyOneAddress"));
    }

    #[test]
    fn test_unknown_contract_type_rejected() {
        let payload = FormPayload {
            contract_type: "not-a-real-type".into(),
            ..valid_payload()
        };
        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.errors.len(), 1);
        assert_eq!(errors.errors[0].field, "contractType");
    }

    #[test]
    fn test_lowercase_state_code_accepted() {
        let payload = FormPayload {
            governing_law: "co".into(),
            ..valid_payload()
        };
        assert!(payload.validate().is_ok());
    }
}
