//! # csrd-cli — CLI Tool for the CSRD Stack
//!
//! Provides the `csrd` command-line interface over the determination
//! pipeline: snapshot validation, phase classification, obligation
//! resolution, and full determination runs.
//!
//! ## Subcommands
//!
//! - `csrd validate` — Knowledge snapshot validation and digest printing.
//! - `csrd classify` — Reporting-phase classification from size figures.
//! - `csrd resolve` — Obligation resolution for a phase and reporting year.
//! - `csrd determine` — Full determination run over a JSON intake file.
//!
//! ## Snapshot selection
//!
//! Every subcommand runs against the builtin ESRS reference set unless the
//! global `--snapshot <path>` flag points at an operator-supplied YAML
//! document set:
//!
//! ```bash
//! csrd validate --list
//! csrd --snapshot overrides.yaml resolve --phase large_pie --year 2026
//! csrd determine intake.json --out report.json
//! ```

pub mod classify;
pub mod determine;
pub mod resolve;
pub mod validate;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use csrd_knowledge::KnowledgeSnapshot;

/// Load the knowledge snapshot a subcommand should run against.
///
/// Both paths fail fast: an operator-supplied YAML set goes through the
/// same structural validation as the builtin documents, so every snapshot
/// handed to the engine is known-good.
pub fn load_snapshot(path: Option<&Path>) -> Result<Arc<KnowledgeSnapshot>> {
    let snapshot = match path {
        Some(path) => KnowledgeSnapshot::from_yaml_file(path)
            .with_context(|| format!("failed to load snapshot {}", path.display()))?,
        None => KnowledgeSnapshot::builtin().context("builtin document set failed validation")?,
    };
    tracing::debug!(
        version = snapshot.version(),
        digest = snapshot.digest(),
        documents = snapshot.len(),
        "knowledge snapshot loaded"
    );
    Ok(Arc::new(snapshot))
}
