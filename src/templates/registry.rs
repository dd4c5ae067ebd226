//! Template Registry - Built-in contract templates

use std::collections::HashMap;
use std::sync::LazyLock;

use super::definition::{Category, ContractType, Template};
use crate::error::DraftError;

static BUILTIN: LazyLock<TemplateRegistry> = LazyLock::new(TemplateRegistry::new);

/// Literal per-type data the registry is built from
struct TemplateSeed {
    id: ContractType,
    category: Category,
    label: &'static str,
    seo_title: &'static str,
    description: &'static str,
    checklist: Option<&'static [&'static str]>,
}

/// Lookup table from contract type to template metadata
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: HashMap<ContractType, Template>,
}

impl TemplateRegistry {
    /// Build a registry holding every built-in template
    pub fn new() -> Self {
        let mut registry = Self {
            templates: HashMap::new(),
        };
        registry.register_builtins();
        registry
    }

    /// Shared process-wide registry of built-in templates
    pub fn builtin() -> &'static TemplateRegistry {
        &BUILTIN
    }

    /// Resolve a wire identifier to its template
    pub fn lookup(&self, contract_type: &str) -> Result<&Template, DraftError> {
        contract_type
            .parse::<ContractType>()
            .ok()
            .and_then(|t| self.templates.get(&t))
            .ok_or_else(|| DraftError::TemplateNotFound {
                contract_type: contract_type.to_string(),
            })
    }

    pub fn get(&self, contract_type: ContractType) -> Option<&Template> {
        self.templates.get(&contract_type)
    }

    /// All templates in declaration order
    pub fn list(&self) -> Vec<&Template> {
        ContractType::all()
            .iter()
            .filter_map(|t| self.templates.get(t))
            .collect()
    }

    pub fn list_by_category(&self, category: Category) -> Vec<&Template> {
        self.list()
            .into_iter()
            .filter(|t| t.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub(super) fn get_mut(&mut self, contract_type: ContractType) -> Option<&mut Template> {
        self.templates.get_mut(&contract_type)
    }

    fn register(&mut self, seed: TemplateSeed) {
        let checklist = match seed.checklist {
            Some(lines) => lines.iter().map(|s| s.to_string()).collect(),
            None => seed
                .category
                .default_checklist()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        let template = Template {
            id: seed.id,
            label: seed.label.into(),
            seo_title: seed.seo_title.into(),
            description: seed.description.into(),
            checklist,
            category: seed.category,
            category_label: seed.category.label().into(),
        };
        self.templates.insert(template.id, template);
    }

    fn register_builtins(&mut self) {
        for seed in Self::service_seeds()
            .into_iter()
            .chain(Self::employment_seeds())
            .chain(Self::finance_seeds())
            .chain(Self::policy_seeds())
            .chain(Self::real_estate_seeds())
            .chain(Self::transaction_seeds())
            .chain(Self::intellectual_seeds())
        {
            self.register(seed);
        }
    }

    // =========================================================================
    // Services & Projects
    // =========================================================================

    fn service_seeds() -> Vec<TemplateSeed> {
        vec![
            TemplateSeed {
                id: ContractType::ServiceAgreement,
                category: Category::Service,
                label: "Service Agreement",
                seo_title: "Service Agreement Template | Free Contract Generator",
                description: "This Service Agreement sets out the terms under which Party A will provide services to Party B.",
                checklist: Some(&[
                    "List the services and any exclusions",
                    "Agree on fees, invoicing and payment timing",
                    "Decide how changes to the scope are approved",
                ]),
            },
            TemplateSeed {
                id: ContractType::ConsultingAgreement,
                category: Category::Service,
                label: "Consulting Agreement",
                seo_title: "Consulting Agreement Template | Free Contract Generator",
                description: "This Consulting Agreement governs advisory services provided by Party A to Party B.",
                checklist: None,
            },
            TemplateSeed {
                id: ContractType::FreelanceContract,
                category: Category::Service,
                label: "Freelance Contract",
                seo_title: "Freelance Contract Template | Free Contract Generator",
                description: "This Freelance Contract covers project work delivered by Party A for Party B on an independent basis.",
                checklist: None,
            },
            TemplateSeed {
                id: ContractType::MaintenanceAgreement,
                category: Category::Service,
                label: "Maintenance Agreement",
                seo_title: "Maintenance Agreement Template | Free Contract Generator",
                description: "This Maintenance Agreement describes the recurring upkeep and support Party A will provide to Party B.",
                checklist: None,
            },
        ]
    }

    // =========================================================================
    // Employment & Staffing
    // =========================================================================

    fn employment_seeds() -> Vec<TemplateSeed> {
        vec![
            TemplateSeed {
                id: ContractType::EmploymentAgreement,
                category: Category::Employment,
                label: "Employment Agreement",
                seo_title: "Employment Agreement Template | Free Contract Generator",
                description: "This Employment Agreement sets out the terms of employment between Party A as employer and Party B as employee.",
                checklist: Some(&[
                    "Confirm job title, duties and reporting line",
                    "State salary, benefits and pay frequency",
                    "Set the start date and notice period",
                ]),
            },
            TemplateSeed {
                id: ContractType::IndependentContractor,
                category: Category::Employment,
                label: "Independent Contractor Agreement",
                seo_title: "Independent Contractor Agreement Template | Free Contract Generator",
                description: "This Independent Contractor Agreement engages Party B to perform work for Party A without creating an employment relationship.",
                checklist: None,
            },
            TemplateSeed {
                id: ContractType::InternshipAgreement,
                category: Category::Employment,
                label: "Internship Agreement",
                seo_title: "Internship Agreement Template | Free Contract Generator",
                description: "This Internship Agreement describes a structured learning placement offered by Party A to Party B.",
                checklist: None,
            },
        ]
    }

    // =========================================================================
    // Deposits & Guarantees
    // =========================================================================

    fn finance_seeds() -> Vec<TemplateSeed> {
        vec![
            TemplateSeed {
                id: ContractType::LoanAgreement,
                category: Category::Finance,
                label: "Loan Agreement",
                seo_title: "Loan Agreement Template | Free Contract Generator",
                description: "This Loan Agreement records a loan from Party A to Party B and the terms for repaying it.",
                checklist: Some(&[
                    "State the principal amount",
                    "Agree on the interest rate and repayment schedule",
                    "Describe any collateral securing the loan",
                ]),
            },
            TemplateSeed {
                id: ContractType::PromissoryNote,
                category: Category::Finance,
                label: "Promissory Note",
                seo_title: "Promissory Note Template | Free Contract Generator",
                description: "This Promissory Note is Party B's written promise to repay a sum owed to Party A.",
                checklist: None,
            },
            TemplateSeed {
                id: ContractType::SecurityDeposit,
                category: Category::Finance,
                label: "Security Deposit Agreement",
                seo_title: "Security Deposit Agreement Template | Free Contract Generator",
                description: "This Security Deposit Agreement explains how a deposit paid by Party B to Party A is held and returned.",
                checklist: None,
            },
            TemplateSeed {
                id: ContractType::PersonalGuarantee,
                category: Category::Finance,
                label: "Personal Guarantee",
                seo_title: "Personal Guarantee Template | Free Contract Generator",
                description: "This Personal Guarantee records Party B's promise to answer for an obligation owed to Party A.",
                checklist: None,
            },
        ]
    }

    // =========================================================================
    // Policies & Terms
    // =========================================================================

    fn policy_seeds() -> Vec<TemplateSeed> {
        vec![
            TemplateSeed {
                id: ContractType::PrivacyPolicy,
                category: Category::Policy,
                label: "Privacy Policy",
                seo_title: "Privacy Policy Template | Free Policy Generator",
                description: "This Privacy Policy explains how Party A collects, uses and protects personal information supplied by Party B.",
                checklist: Some(&[
                    "List the personal data you collect",
                    "Explain why the data is used and who receives it",
                    "Describe how users can access or delete their data",
                ]),
            },
            TemplateSeed {
                id: ContractType::TermsOfService,
                category: Category::Policy,
                label: "Terms of Service",
                seo_title: "Terms of Service Template | Free Policy Generator",
                description: "These Terms of Service govern Party B's access to and use of the products and services offered by Party A.",
                checklist: None,
            },
            TemplateSeed {
                id: ContractType::RefundPolicy,
                category: Category::Policy,
                label: "Refund Policy",
                seo_title: "Refund Policy Template | Free Policy Generator",
                description: "This Refund Policy explains when and how Party A issues refunds to Party B.",
                checklist: None,
            },
            TemplateSeed {
                id: ContractType::AcceptableUsePolicy,
                category: Category::Policy,
                label: "Acceptable Use Policy",
                seo_title: "Acceptable Use Policy Template | Free Policy Generator",
                description: "This Acceptable Use Policy sets the rules Party B must follow when using systems operated by Party A.",
                checklist: None,
            },
        ]
    }

    // =========================================================================
    // Real Estate & Rentals
    // =========================================================================

    fn real_estate_seeds() -> Vec<TemplateSeed> {
        vec![
            TemplateSeed {
                id: ContractType::ResidentialLease,
                category: Category::RealEstate,
                label: "Residential Lease Agreement",
                seo_title: "Residential Lease Agreement Template | Free Contract Generator",
                description: "This Residential Lease Agreement sets out the terms under which Party A rents a residential property to Party B.",
                checklist: Some(&[
                    "Confirm the property address and any included parking or storage",
                    "State monthly rent, due date and security deposit",
                    "Set the lease start and end dates",
                ]),
            },
            TemplateSeed {
                id: ContractType::CommercialLease,
                category: Category::RealEstate,
                label: "Commercial Lease Agreement",
                seo_title: "Commercial Lease Agreement Template | Free Contract Generator",
                description: "This Commercial Lease Agreement sets out the terms under which Party A leases business premises to Party B.",
                checklist: None,
            },
            TemplateSeed {
                id: ContractType::RoommateAgreement,
                category: Category::RealEstate,
                label: "Roommate Agreement",
                seo_title: "Roommate Agreement Template | Free Contract Generator",
                description: "This Roommate Agreement records how Party A and Party B share a residence and its costs.",
                checklist: None,
            },
        ]
    }

    // =========================================================================
    // Sales & Transactions
    // =========================================================================

    fn transaction_seeds() -> Vec<TemplateSeed> {
        vec![
            TemplateSeed {
                id: ContractType::BillOfSale,
                category: Category::Transaction,
                label: "Bill of Sale",
                seo_title: "Bill of Sale Template | Free Contract Generator",
                description: "This Bill of Sale records the transfer of ownership of property from Party A to Party B.",
                checklist: None,
            },
            TemplateSeed {
                id: ContractType::PurchaseAgreement,
                category: Category::Transaction,
                label: "Purchase Agreement",
                seo_title: "Purchase Agreement Template | Free Contract Generator",
                description: "This Purchase Agreement sets out the terms on which Party A sells and Party B buys the described property.",
                checklist: Some(&[
                    "Describe the property or goods being purchased",
                    "State the purchase price and deposit",
                    "Set the closing or delivery date",
                ]),
            },
            TemplateSeed {
                id: ContractType::AssetPurchase,
                category: Category::Transaction,
                label: "Asset Purchase Agreement",
                seo_title: "Asset Purchase Agreement Template | Free Contract Generator",
                description: "This Asset Purchase Agreement governs the sale of business assets by Party A to Party B.",
                checklist: None,
            },
        ]
    }

    // =========================================================================
    // IP & Confidentiality
    // =========================================================================

    fn intellectual_seeds() -> Vec<TemplateSeed> {
        vec![
            TemplateSeed {
                id: ContractType::NonDisclosure,
                category: Category::Intellectual,
                label: "Non-Disclosure Agreement",
                seo_title: "Non-Disclosure Agreement (NDA) Template | Free Contract Generator",
                description: "This Non-Disclosure Agreement protects confidential information shared between Party A and Party B.",
                checklist: Some(&[
                    "Describe the confidential information being shared",
                    "State the purpose the information may be used for",
                    "Set how long confidentiality lasts",
                ]),
            },
            TemplateSeed {
                id: ContractType::LicenseAgreement,
                category: Category::Intellectual,
                label: "License Agreement",
                seo_title: "License Agreement Template | Free Contract Generator",
                description: "This License Agreement grants Party B permission to use intellectual property owned by Party A.",
                checklist: None,
            },
            TemplateSeed {
                id: ContractType::IpAssignment,
                category: Category::Intellectual,
                label: "IP Assignment Agreement",
                seo_title: "IP Assignment Agreement Template | Free Contract Generator",
                description: "This IP Assignment Agreement transfers ownership of the described intellectual property from Party A to Party B.",
                checklist: None,
            },
        ]
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_contract_type_registered() {
        let registry = TemplateRegistry::new();
        assert_eq!(registry.len(), ContractType::all().len());
        for t in ContractType::all() {
            assert!(registry.get(*t).is_some(), "missing template {}", t);
        }
    }

    #[test]
    fn test_lookup_residential_lease() {
        let registry = TemplateRegistry::builtin();
        let template = registry.lookup("residential-lease").unwrap();
        assert_eq!(template.category, Category::RealEstate);
        assert_eq!(template.category_label, "Real Estate & Rentals");
        assert_eq!(template.label, "Residential Lease Agreement");
    }

    #[test]
    fn test_lookup_unknown_type() {
        let err = TemplateRegistry::builtin()
            .lookup("not-a-real-type")
            .unwrap_err();
        assert!(matches!(
            err,
            DraftError::TemplateNotFound { ref contract_type } if contract_type == "not-a-real-type"
        ));
    }

    #[test]
    fn test_lookup_requires_exact_identifier() {
        let registry = TemplateRegistry::builtin();
        for raw in [" residential-lease ", "RESIDENTIAL-LEASE", "residential-lease\n"] {
            assert!(
                matches!(registry.lookup(raw), Err(DraftError::TemplateNotFound { .. })),
                "{:?} should not resolve",
                raw
            );
        }
    }

    #[test]
    fn test_checklist_falls_back_to_category_default() {
        let registry = TemplateRegistry::new();
        let template = registry.get(ContractType::PromissoryNote).unwrap();
        let expected: Vec<String> = Category::Finance
            .default_checklist()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(template.checklist, expected);

        let own = registry.get(ContractType::LoanAgreement).unwrap();
        assert_ne!(own.checklist, expected);
    }

    #[test]
    fn test_every_category_has_templates() {
        let registry = TemplateRegistry::new();
        for c in Category::all() {
            assert!(!registry.list_by_category(*c).is_empty(), "no templates for {}", c);
        }
    }
}
