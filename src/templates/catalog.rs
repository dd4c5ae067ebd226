//! Template Catalog Overrides
//!
//! Display metadata (label, SEO title, description, checklist) can be
//! replaced from YAML files without touching the built-in table. Category is
//! never overridable because it drives clause dispatch.
//!
//! ```yaml
//! templates:
//!   - id: residential-lease
//!     label: Apartment Lease
//!     checklist:
//!       - Confirm the unit number
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::definition::ContractType;
use super::registry::TemplateRegistry;
use crate::error::DraftError;

/// One override entry
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateOverride {
    /// Wire identifier of the template being overridden
    pub id: String,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub seo_title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub checklist: Option<Vec<String>>,
}

/// YAML file structure for catalog overrides
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    templates: Vec<TemplateOverride>,
}

impl TemplateRegistry {
    /// Built-in registry with overrides from every YAML file in `dir` applied
    ///
    /// A missing directory is not an error: the built-in metadata is kept.
    pub fn load_overrides_from_dir(dir: impl AsRef<Path>) -> Result<Self, DraftError> {
        let dir = dir.as_ref();
        let mut registry = Self::new();

        if !dir.exists() {
            warn!("Template catalog directory does not exist: {:?}", dir);
            return Ok(registry);
        }

        let entries = std::fs::read_dir(dir)
            .map_err(|e| DraftError::catalog(dir, format!("failed to read directory: {}", e)))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| DraftError::catalog(dir, format!("failed to read entry: {}", e)))?
                .path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                paths.push(path);
            }
        }
        // read_dir order is platform dependent; later files win
        paths.sort();

        let mut applied = 0;
        for path in &paths {
            debug!("Loading template overrides from {:?}", path);
            applied += registry.load_overrides_file(path)?;
        }

        info!(
            "Applied {} template overrides from {} files in {:?}",
            applied,
            paths.len(),
            dir
        );

        Ok(registry)
    }

    /// Apply overrides from a single YAML file, returning how many matched
    pub fn load_overrides_file(&mut self, path: impl AsRef<Path>) -> Result<usize, DraftError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DraftError::catalog(path, format!("failed to read file: {}", e)))?;

        let file: CatalogFile = serde_yaml::from_str(&content)
            .map_err(|e| DraftError::catalog(path, format!("failed to parse YAML: {}", e)))?;

        Ok(self.apply_overrides(file.templates))
    }

    /// Apply overrides in order; unknown ids are skipped
    pub fn apply_overrides(
        &mut self,
        overrides: impl IntoIterator<Item = TemplateOverride>,
    ) -> usize {
        let mut applied = 0;

        for entry in overrides {
            let Ok(contract_type) = entry.id.parse::<ContractType>() else {
                warn!("Skipping override for unknown template: {}", entry.id);
                continue;
            };
            let Some(template) = self.get_mut(contract_type) else {
                continue;
            };

            if let Some(label) = entry.label {
                template.label = label;
            }
            if let Some(seo_title) = entry.seo_title {
                template.seo_title = seo_title;
            }
            if let Some(description) = entry.description {
                template.description = description;
            }
            if let Some(checklist) = entry.checklist {
                template.checklist = checklist;
            }
            applied += 1;
        }

        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::Category;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_missing_dir_keeps_builtins() {
        let registry =
            TemplateRegistry::load_overrides_from_dir("/definitely/not/a/catalog").unwrap();
        assert_eq!(registry.len(), ContractType::all().len());
    }

    #[test]
    fn test_overrides_apply_and_skip_unknown() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "leases.yaml",
            r#"
templates:
  - id: residential-lease
    label: Apartment Lease
    checklist:
      - Confirm the unit number
  - id: spaceship-charter
    label: Nope
"#,
        );
        write(tmp.path(), "notes.txt", "ignored");

        let registry = TemplateRegistry::load_overrides_from_dir(tmp.path()).unwrap();
        let lease = registry.get(ContractType::ResidentialLease).unwrap();
        assert_eq!(lease.label, "Apartment Lease");
        assert_eq!(lease.checklist, vec!["Confirm the unit number".to_string()]);
        // untouched fields survive
        assert_eq!(lease.category, Category::RealEstate);
        assert!(lease.description.starts_with("This Residential Lease Agreement"));
    }

    #[test]
    fn test_later_files_win() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "a.yaml",
            "templates:\n  - id: bill-of-sale\n    label: First\n",
        );
        write(
            tmp.path(),
            "b.yml",
            "templates:\n  - id: bill-of-sale\n    label: Second\n",
        );

        let registry = TemplateRegistry::load_overrides_from_dir(tmp.path()).unwrap();
        assert_eq!(registry.get(ContractType::BillOfSale).unwrap().label, "Second");
    }

    #[test]
    fn test_malformed_file_reports_catalog_error() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "broken.yaml", "templates: [ { id: ");

        let err = TemplateRegistry::load_overrides_from_dir(tmp.path()).unwrap_err();
        assert!(!err.is_client_error());
        match err {
            DraftError::Catalog { path, message } => {
                assert_eq!(path, tmp.path().join("broken.yaml"));
                assert!(message.starts_with("failed to parse YAML"), "{}", message);
            }
            other => panic!("expected Catalog error, got {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_file_reports_catalog_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("gone.yaml");

        let mut registry = TemplateRegistry::new();
        let err = registry.load_overrides_file(&missing).unwrap_err();
        assert!(matches!(err, DraftError::Catalog { ref path, .. } if *path == missing));
    }
}
