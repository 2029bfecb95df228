//! # Determine Subcommand
//!
//! Full compliance determination over a JSON intake file: phase, score
//! summary, double-materiality ledger, taxonomy view, exposure estimate,
//! and remediation plan in one report.
//!
//! ## Usage
//!
//! ```bash
//! # Deterministic run, report to stdout:
//! csrd determine intake.json
//!
//! # With narrative enrichment configured from the environment:
//! CSRD_ENRICH_URL=https://enrich.internal/v1 \
//! CSRD_ENRICH_TOKEN=... \
//! csrd determine intake.json --out report.json
//! ```
//!
//! Enrichment is optional. Without `CSRD_ENRICH_URL` the run is fully
//! deterministic, and an enricher that fails mid-run falls back to the
//! deterministic ledger rather than failing the determination.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use csrd_core::DeterminationInput;
use csrd_engine::DeterminationEngine;
use csrd_enrich::{EnrichmentConfig, HttpEnricher};
use csrd_knowledge::KnowledgeSnapshot;

/// Arguments for the `csrd determine` subcommand.
#[derive(Args, Debug)]
pub struct DetermineArgs {
    /// Path to the JSON determination input file.
    pub input: PathBuf,

    /// Skip narrative enrichment even when the environment configures it.
    #[arg(long)]
    pub no_enrich: bool,

    /// Write the report to this file instead of stdout.
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

/// Execute the determine subcommand.
pub fn run_determine(args: &DetermineArgs, snapshot_path: Option<&Path>) -> Result<u8> {
    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input {}", args.input.display()))?;
    let input = DeterminationInput::from_json_str(&raw)
        .with_context(|| format!("invalid determination input {}", args.input.display()))?;

    let snapshot = crate::load_snapshot(snapshot_path)?;
    let engine = build_engine(snapshot, args.no_enrich)?;

    let report = engine.determine(&input);
    let rendered = report.to_json().context("failed to serialize report")?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes())
                .with_context(|| format!("failed to write report {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => println!("{rendered}"),
    }

    Ok(0)
}

/// Build the engine, attaching an HTTP enricher when the environment
/// configures one and `--no-enrich` does not override it.
fn build_engine(snapshot: Arc<KnowledgeSnapshot>, no_enrich: bool) -> Result<DeterminationEngine> {
    if no_enrich {
        return Ok(DeterminationEngine::new(snapshot));
    }
    match EnrichmentConfig::from_env().context("invalid enrichment environment")? {
        Some(config) => {
            let enricher = HttpEnricher::new(&config).context("failed to build enrichment client")?;
            Ok(DeterminationEngine::new(snapshot).with_enricher(Box::new(enricher)))
        }
        None => Ok(DeterminationEngine::new(snapshot)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn write_intake(raw: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(raw.as_bytes()).unwrap();
        tmp
    }

    #[test]
    fn run_determine_writes_a_full_report() {
        let intake = write_intake(
            r#"{
                "company": {
                    "employees": 620,
                    "revenue": 95000000.0,
                    "total_assets": 41000000.0,
                    "reporting_year": 2026
                }
            }"#,
        );
        let out_dir = tempfile::tempdir().unwrap();
        let out_path = out_dir.path().join("report.json");

        let args = DetermineArgs {
            input: intake.path().to_path_buf(),
            no_enrich: true,
            out: Some(out_path.clone()),
        };
        assert_eq!(run_determine(&args, None).unwrap(), 0);

        let rendered = std::fs::read_to_string(&out_path).unwrap();
        let report: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(report["phase"], "large_pie");
        assert!(report["ledger"].as_array().is_some_and(|l| !l.is_empty()));
        assert!(report["snapshot_digest"].as_str().is_some_and(|d| d.len() == 64));
    }

    #[test]
    fn run_determine_empty_object_intake_still_reports() {
        let intake = write_intake("{}");
        let args = DetermineArgs {
            input: intake.path().to_path_buf(),
            no_enrich: true,
            out: None,
        };
        assert_eq!(run_determine(&args, None).unwrap(), 0);
    }

    #[test]
    fn run_determine_rejects_malformed_intake() {
        let intake = write_intake("not json at all");
        let args = DetermineArgs {
            input: intake.path().to_path_buf(),
            no_enrich: true,
            out: None,
        };
        let err = run_determine(&args, None).unwrap_err();
        assert!(format!("{err:#}").contains("invalid determination input"));
    }

    #[test]
    fn run_determine_missing_input_reports_path() {
        let args = DetermineArgs {
            input: PathBuf::from("/nonexistent/intake.json"),
            no_enrich: true,
            out: None,
        };
        let err = run_determine(&args, None).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/intake.json"));
    }

    #[test]
    fn build_engine_without_enrichment_has_no_enricher() {
        let snapshot = crate::load_snapshot(None).unwrap();
        let engine = build_engine(snapshot, true).unwrap();
        assert!(format!("{engine:?}").contains("enricher: None"));
    }
}
