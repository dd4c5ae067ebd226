//! Drafter configuration
//!
//! Read from the environment. The CLI loads `.env` first and lets its
//! flags override these values.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::error::DraftError;
use crate::templates::TemplateRegistry;

const ENV_CATALOG_DIR: &str = "DRAFTER_CATALOG_DIR";
const ENV_LOG: &str = "DRAFTER_LOG";
const ENV_OUTPUT: &str = "DRAFTER_OUTPUT";

/// How generated documents are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!(
                "Unknown {} '{}'. Valid values: text, json",
                ENV_OUTPUT,
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrafterConfig {
    /// Directory of YAML template overrides
    pub catalog_dir: Option<PathBuf>,
    /// Default tracing directive when RUST_LOG is unset
    pub log_filter: String,
    pub output: OutputFormat,
}

impl Default for DrafterConfig {
    fn default() -> Self {
        Self {
            catalog_dir: None,
            log_filter: "warn".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl DrafterConfig {
    /// Create from DRAFTER_* environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let output = match non_empty(ENV_OUTPUT) {
            Some(value) => value.parse()?,
            None => defaults.output,
        };

        Ok(Self {
            catalog_dir: non_empty(ENV_CATALOG_DIR).map(PathBuf::from),
            log_filter: non_empty(ENV_LOG).unwrap_or(defaults.log_filter),
            output,
        })
    }

    /// Registry with catalog overrides applied when a catalog dir is set
    pub fn registry(&self) -> Result<TemplateRegistry, DraftError> {
        match &self.catalog_dir {
            Some(dir) => TemplateRegistry::load_overrides_from_dir(dir),
            None => Ok(TemplateRegistry::new()),
        }
    }
}
