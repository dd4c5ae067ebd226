//! Template Definition Types
//!
//! Closed sets of contract types and categories, plus the immutable
//! template metadata the composer reads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Contract types known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractType {
    ServiceAgreement,
    ConsultingAgreement,
    FreelanceContract,
    MaintenanceAgreement,
    EmploymentAgreement,
    IndependentContractor,
    InternshipAgreement,
    LoanAgreement,
    PromissoryNote,
    SecurityDeposit,
    PersonalGuarantee,
    PrivacyPolicy,
    TermsOfService,
    RefundPolicy,
    AcceptableUsePolicy,
    ResidentialLease,
    CommercialLease,
    RoommateAgreement,
    BillOfSale,
    PurchaseAgreement,
    AssetPurchase,
    NonDisclosure,
    LicenseAgreement,
    IpAssignment,
}

impl ContractType {
    pub fn all() -> &'static [ContractType] {
        &[
            ContractType::ServiceAgreement,
            ContractType::ConsultingAgreement,
            ContractType::FreelanceContract,
            ContractType::MaintenanceAgreement,
            ContractType::EmploymentAgreement,
            ContractType::IndependentContractor,
            ContractType::InternshipAgreement,
            ContractType::LoanAgreement,
            ContractType::PromissoryNote,
            ContractType::SecurityDeposit,
            ContractType::PersonalGuarantee,
            ContractType::PrivacyPolicy,
            ContractType::TermsOfService,
            ContractType::RefundPolicy,
            ContractType::AcceptableUsePolicy,
            ContractType::ResidentialLease,
            ContractType::CommercialLease,
            ContractType::RoommateAgreement,
            ContractType::BillOfSale,
            ContractType::PurchaseAgreement,
            ContractType::AssetPurchase,
            ContractType::NonDisclosure,
            ContractType::LicenseAgreement,
            ContractType::IpAssignment,
        ]
    }

    /// Wire identifier (e.g. "residential-lease")
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::ServiceAgreement => "service-agreement",
            ContractType::ConsultingAgreement => "consulting-agreement",
            ContractType::FreelanceContract => "freelance-contract",
            ContractType::MaintenanceAgreement => "maintenance-agreement",
            ContractType::EmploymentAgreement => "employment-agreement",
            ContractType::IndependentContractor => "independent-contractor",
            ContractType::InternshipAgreement => "internship-agreement",
            ContractType::LoanAgreement => "loan-agreement",
            ContractType::PromissoryNote => "promissory-note",
            ContractType::SecurityDeposit => "security-deposit",
            ContractType::PersonalGuarantee => "personal-guarantee",
            ContractType::PrivacyPolicy => "privacy-policy",
            ContractType::TermsOfService => "terms-of-service",
            ContractType::RefundPolicy => "refund-policy",
            ContractType::AcceptableUsePolicy => "acceptable-use-policy",
            ContractType::ResidentialLease => "residential-lease",
            ContractType::CommercialLease => "commercial-lease",
            ContractType::RoommateAgreement => "roommate-agreement",
            ContractType::BillOfSale => "bill-of-sale",
            ContractType::PurchaseAgreement => "purchase-agreement",
            ContractType::AssetPurchase => "asset-purchase",
            ContractType::NonDisclosure => "non-disclosure",
            ContractType::LicenseAgreement => "license-agreement",
            ContractType::IpAssignment => "ip-assignment",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing ContractType
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown contract type '{0}'")]
pub struct ParseContractTypeError(pub String);

impl FromStr for ContractType {
    type Err = ParseContractTypeError;

    /// Exact wire identifiers only, no trimming or case folding
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseContractTypeError(s.to_string()))
    }
}

/// Template category - selects the category-specific clause block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Service,
    Finance,
    Policy,
    RealEstate,
    Employment,
    Transaction,
    Intellectual,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Service,
            Category::Finance,
            Category::Policy,
            Category::RealEstate,
            Category::Employment,
            Category::Transaction,
            Category::Intellectual,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Service => "service",
            Category::Finance => "finance",
            Category::Policy => "policy",
            Category::RealEstate => "real-estate",
            Category::Employment => "employment",
            Category::Transaction => "transaction",
            Category::Intellectual => "intellectual",
        }
    }

    /// Human label shown next to templates in the catalog
    pub fn label(&self) -> &'static str {
        match self {
            Category::Service => "Services & Projects",
            Category::Finance => "Deposits & Guarantees",
            Category::Policy => "Policies & Terms",
            Category::RealEstate => "Real Estate & Rentals",
            Category::Employment => "Employment & Staffing",
            Category::Transaction => "Sales & Transactions",
            Category::Intellectual => "IP & Confidentiality",
        }
    }

    /// Checklist used by templates that do not define their own
    pub fn default_checklist(&self) -> [&'static str; 3] {
        match self {
            Category::Service => [
                "Describe the scope of work and deliverables",
                "Agree on payment amount and schedule",
                "Set milestones and a revision policy",
            ],
            Category::Finance => [
                "State the principal, deposit or guaranteed amount",
                "Set the interest rate and repayment schedule",
                "Identify collateral and late-fee terms",
            ],
            Category::Policy => [
                "Summarize what the policy covers",
                "Explain how users are notified of changes",
                "Provide a contact for questions",
            ],
            Category::RealEstate => [
                "Confirm the property address",
                "State the rent or purchase price and deposit",
                "Set the term start and end dates",
            ],
            Category::Employment => [
                "Define the role and responsibilities",
                "State compensation and pay schedule",
                "Confirm start date and any probation period",
            ],
            Category::Transaction => [
                "Describe the item or asset being sold",
                "State the price and payment method",
                "Set the transfer or delivery date",
            ],
            Category::Intellectual => [
                "Identify the protected information or work",
                "Define permitted uses and ownership",
                "Set the duration of the obligations",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing Category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Unknown category '{0}'. Valid values: service, finance, policy, real-estate, employment, \
     transaction, intellectual"
)]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Same policy as `ContractType`: exact kebab-case identifiers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Immutable template metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Contract type this template drafts
    pub id: ContractType,

    /// Display label, also the generated document title
    pub label: String,

    /// Page title used by the catalog front-end
    pub seo_title: String,

    /// Description restated in the overview clause
    pub description: String,

    /// Short preparation checklist shown before drafting
    pub checklist: Vec<String>,

    pub category: Category,

    pub category_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_type_round_trips_through_str() {
        for t in ContractType::all() {
            assert_eq!(t.as_str().parse::<ContractType>().unwrap(), *t);
        }
        assert!("not-a-real-type".parse::<ContractType>().is_err());
    }

    #[test]
    fn test_identifiers_must_match_exactly() {
        assert!(" residential-lease ".parse::<ContractType>().is_err());
        assert!("Residential-Lease".parse::<ContractType>().is_err());
        assert!("Real-Estate".parse::<Category>().is_err());
        assert!(" finance".parse::<Category>().is_err());
        assert_eq!("real-estate".parse::<Category>().unwrap(), Category::RealEstate);
    }

    #[test]
    fn test_contract_type_serde_matches_as_str() {
        let json = serde_json::to_string(&ContractType::ResidentialLease).unwrap();
        assert_eq!(json, "\"residential-lease\"");
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Finance.label(), "Deposits & Guarantees");
        for c in Category::all() {
            assert_eq!(c.default_checklist().len(), 3);
        }
    }
}
