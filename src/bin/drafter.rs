//! Contract Drafter CLI
//!
//! List templates and generate drafts from JSON form payloads.
//!
//! # Usage
//!
//! ```bash
//! # List templates, optionally by category
//! drafter templates --category real-estate
//!
//! # Show one template's metadata and checklist
//! drafter show residential-lease
//!
//! # Validate a payload
//! drafter validate --file lease.json
//!
//! # Generate a draft (reads stdin if --file is omitted)
//! cat lease.json | drafter generate --format json --record --owner user-42
//! ```

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use contract_drafter::{
    validate_and_generate, validate_and_plan, Category, DraftRecord, DrafterConfig, FormPayload,
    OutputFormat, TemplateRegistry,
};

#[derive(Parser)]
#[command(name = "drafter")]
#[command(version)]
#[command(about = "Generate clause-ordered contracts from templates and form payloads")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory of YAML template overrides
    #[arg(long, global = true, env = "DRAFTER_CATALOG_DIR")]
    catalog_dir: Option<PathBuf>,

    /// Output format (defaults to DRAFTER_OUTPUT, then text)
    #[arg(long, short = 'o', global = true, value_enum)]
    format: Option<Format>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List registered templates
    Templates {
        /// Filter by category (service, finance, policy, real-estate, employment,
        /// transaction, intellectual)
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show one template's metadata and checklist
    Show {
        /// Contract type (e.g. residential-lease)
        contract_type: String,
    },

    /// Validate a form payload without generating
    Validate {
        /// Payload JSON file (reads stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Validate a form payload and generate the contract
    Generate {
        /// Payload JSON file (reads stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Wrap the output in a draft record with id and timestamp
        #[arg(long)]
        record: bool,

        /// Owner id stored on the draft record
        #[arg(long, requires = "record")]
        owner: Option<String>,

        /// Print which pipeline steps fire instead of the document
        #[arg(long, conflicts_with = "record")]
        plan: bool,
    },
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match DrafterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = cli.catalog_dir.clone() {
        config.catalog_dir = Some(dir);
    }
    if let Some(format) = cli.format {
        config.output = format.into();
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    match run(cli.command, &config, &mut stdout.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs one command; `Ok(false)` means the input was rejected
fn run(command: Commands, config: &DrafterConfig, out: &mut impl Write) -> Result<bool> {
    let registry = config.registry()?;
    debug!("Registry holds {} templates", registry.len());

    match command {
        Commands::Templates { category } => cmd_templates(&registry, category, config.output, out),
        Commands::Show { contract_type } => {
            cmd_show(&registry, &contract_type, config.output, out)
        }
        Commands::Validate { file } => cmd_validate(&read_payload(file)?, config.output, out),
        Commands::Generate {
            file,
            record,
            owner,
            plan,
        } => {
            let payload = read_payload(file)?;
            if plan {
                cmd_plan(&registry, &payload, config.output, out)
            } else {
                cmd_generate(&registry, &payload, record.then_some(owner), config.output, out)
            }
        }
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

fn cmd_templates(
    registry: &TemplateRegistry,
    category: Option<Category>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<bool> {
    let templates = match category {
        Some(c) => registry.list_by_category(c),
        None => registry.list(),
    };

    match output {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&templates)?)?,
        OutputFormat::Text => {
            for t in templates {
                writeln!(out, "{:<24} {:<36} {}", t.id, t.label, t.category_label)?;
            }
        }
    }

    Ok(true)
}

fn cmd_show(
    registry: &TemplateRegistry,
    contract_type: &str,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<bool> {
    let template = match registry.lookup(contract_type) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(false);
        }
    };

    match output {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(template)?)?,
        OutputFormat::Text => {
            writeln!(out, "{} ({})", template.label, template.id)?;
            writeln!(out, "Category: {} [{}]", template.category_label, template.category)?;
            writeln!(out, "{}", template.description)?;
            writeln!(out)?;
            writeln!(out, "Before you start:")?;
            for item in &template.checklist {
                writeln!(out, "  - {}", item)?;
            }
        }
    }

    Ok(true)
}

fn cmd_validate(payload: &FormPayload, output: OutputFormat, out: &mut impl Write) -> Result<bool> {
    let errors = match payload.validate() {
        Ok(()) => {
            match output {
                OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "valid": true }))?,
                OutputFormat::Text => writeln!(out, "Payload is valid")?,
            }
            return Ok(true);
        }
        Err(errors) => errors,
    };

    match output {
        OutputFormat::Json => {
            let fields: Vec<_> = errors
                .errors
                .iter()
                .map(|e| serde_json::json!({ "field": e.field, "message": e.message }))
                .collect();
            let report = serde_json::json!({ "valid": false, "errors": fields });
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Text => {
            for e in &errors.errors {
                writeln!(out, "✗ {}", e)?;
            }
        }
    }

    Ok(false)
}

fn cmd_plan(
    registry: &TemplateRegistry,
    payload: &FormPayload,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<bool> {
    let steps = match validate_and_plan(registry, payload) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(false);
        }
    };

    match output {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&steps)?)?,
        OutputFormat::Text => {
            for (i, step) in steps.iter().enumerate() {
                writeln!(out, "{:>2}. {}", i + 1, step)?;
            }
        }
    }

    Ok(true)
}

/// `record` carries the owner when the draft should be wrapped in a record
fn cmd_generate(
    registry: &TemplateRegistry,
    payload: &FormPayload,
    record: Option<Option<String>>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<bool> {
    // Generation only fails on caller input (bad payload or unknown template)
    let document = match validate_and_generate(registry, payload) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(false);
        }
    };

    match record {
        Some(owner) => {
            let record = DraftRecord::wrap(document, owner);
            match output {
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?
                }
                OutputFormat::Text => {
                    let created = record.created_at.to_rfc3339();
                    writeln!(out, "Draft {} ({})", record.draft_id, created)?;
                    writeln!(out, "{}", record.title)?;
                    writeln!(out, "{}", record.content)?;
                }
            }
        }
        None => match output {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?,
            OutputFormat::Text => {
                writeln!(out, "{}", document.title)?;
                writeln!(out, "{}", document.content)?;
            }
        },
    }

    Ok(true)
}

fn read_payload(file: Option<PathBuf>) -> Result<FormPayload> {
    let source = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read payload file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read payload from stdin")?;
            buf
        }
    };

    serde_json::from_str(&source).context("Failed to parse payload JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lease_fixture() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures/payloads/residential_lease.json")
    }

    fn lease_payload() -> FormPayload {
        read_payload(Some(lease_fixture())).unwrap()
    }

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<bool>) -> (bool, String) {
        let mut buf = Vec::new();
        let ok = f(&mut buf).unwrap();
        (ok, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_validate_accepts_fixture() {
        let (ok, text) = capture(|out| cmd_validate(&lease_payload(), OutputFormat::Text, out));
        assert!(ok);
        assert_eq!(text, "Payload is valid\n");
    }

    #[test]
    fn test_validate_rejects_with_field_report() {
        let mut payload = lease_payload();
        payload.party_two_name = "J".into();
        payload.governing_law = "XX".into();

        let (ok, text) = capture(|out| cmd_validate(&payload, OutputFormat::Json, out));
        assert!(!ok);
        let report: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(report["valid"], false);
        let fields: Vec<&str> = report["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["partyTwoName", "governingLaw"]);
    }

    #[test]
    fn test_plan_lists_firing_steps() {
        let registry = TemplateRegistry::new();
        let mut payload = lease_payload();
        payload.toggles.include_non_solicitation = false;

        let (ok, text) = capture(|out| cmd_plan(&registry, &payload, OutputFormat::Text, out));
        assert!(ok);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " 1. overview");
        assert_eq!(lines[2], " 3. category");
        assert_eq!(lines.last().copied(), Some("15. signatures"));
        assert!(!text.contains("non-solicitation"));
    }

    #[test]
    fn test_plan_rejects_invalid_payload() {
        let registry = TemplateRegistry::new();
        let payload = FormPayload::default();

        let (ok, text) = capture(|out| cmd_plan(&registry, &payload, OutputFormat::Json, out));
        assert!(!ok);
        assert!(text.is_empty());
    }

    #[test]
    fn test_generate_record_json() {
        let registry = TemplateRegistry::new();
        let owner = Some(Some("user-42".to_string()));

        let (ok, text) = capture(|out| {
            cmd_generate(&registry, &lease_payload(), owner, OutputFormat::Json, out)
        });
        assert!(ok);
        let record: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(record["title"], "Residential Lease Agreement");
        assert_eq!(record["owner_id"], "user-42");
        assert!(record["content"].as_str().unwrap().contains("\nSIGNATURES\n"));
    }

    #[test]
    fn test_show_unknown_template_fails() {
        let registry = TemplateRegistry::new();
        let (ok, text) =
            capture(|out| cmd_show(&registry, "spaceship-charter", OutputFormat::Text, out));
        assert!(!ok);
        assert!(text.is_empty());
    }

    #[test]
    fn test_templates_filtered_by_category() {
        let registry = TemplateRegistry::new();
        let (ok, text) = capture(|out| {
            cmd_templates(&registry, Some(Category::RealEstate), OutputFormat::Text, out)
        });
        assert!(ok);
        assert!(text.lines().any(|l| l.starts_with("residential-lease")));
        assert!(text.lines().all(|l| l.ends_with("Real Estate & Rentals")));
    }
}
