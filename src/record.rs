//! Draft records
//!
//! The persistence envelope a caller stores after generation. Composition
//! never creates one; identifiers and timestamps are added here so the
//! generated text itself stays deterministic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::composer::GeneratedDocument;
use crate::templates::ContractType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRecord {
    pub draft_id: Uuid,

    /// Caller identity from the session store, if any
    pub owner_id: Option<String>,

    pub contract_type: ContractType,

    pub title: String,

    pub content: String,

    pub created_at: DateTime<Utc>,
}

impl DraftRecord {
    /// Wrap a generated document with a fresh id and the current time
    pub fn wrap(document: GeneratedDocument, owner_id: Option<String>) -> Self {
        Self::wrap_at(document, owner_id, Utc::now())
    }

    pub fn wrap_at(
        document: GeneratedDocument,
        owner_id: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            draft_id: Uuid::new_v4(),
            owner_id,
            contract_type: document.template,
            title: document.title,
            content: document.content,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn document() -> GeneratedDocument {
        GeneratedDocument {
            title: "Bill of Sale".into(),
            content: "\nSIGNATURES\nSummary: s\n\nb\n".into(),
            template: ContractType::BillOfSale,
        }
    }

    #[test]
    fn test_wrap_keeps_document() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let record = DraftRecord::wrap_at(document(), Some("user-42".into()), at);

        assert_eq!(record.title, "Bill of Sale");
        assert_eq!(record.contract_type, ContractType::BillOfSale);
        assert_eq!(record.owner_id.as_deref(), Some("user-42"));
        assert_eq!(record.created_at, at);
    }

    #[test]
    fn test_each_wrap_gets_new_id() {
        let a = DraftRecord::wrap(document(), None);
        let b = DraftRecord::wrap(document(), None);
        assert_ne!(a.draft_id, b.draft_id);
        assert_eq!(a.content, b.content);
    }
}
