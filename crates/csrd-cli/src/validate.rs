//! # Validate Subcommand
//!
//! Structural validation of the knowledge document set plus digest
//! printing, for pinning a snapshot in audit logs and CI.
//!
//! ## Usage
//!
//! ```bash
//! # Check the builtin reference set and print its digest:
//! csrd validate
//!
//! # Check an operator-supplied document set, listing every document:
//! csrd --snapshot overrides.yaml validate --list
//! ```

use std::path::Path;

use anyhow::Result;
use clap::Args;

use csrd_knowledge::{validate_documents, KnowledgeSnapshot, RegulatoryDocument};

/// Arguments for the `csrd validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// List every document in the snapshot with its mandate basis.
    #[arg(long)]
    pub list: bool,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, snapshot_path: Option<&Path>) -> Result<u8> {
    let snapshot = crate::load_snapshot(snapshot_path)?;

    // Loading already rejected structural errors; re-run the validator so
    // non-fatal warnings land in the command output rather than only in
    // the load-time logs.
    let warnings = revalidate(&snapshot);

    if args.list {
        for document in snapshot.documents() {
            println!("  {}", document_line(document));
        }
        println!();
    }

    println!("documents: {}", snapshot.len());
    println!("version:   {}", snapshot.version());
    println!("digest:    {}", snapshot.digest());

    if !warnings.is_empty() {
        println!();
        for warning in &warnings {
            println!("warning: {warning}");
        }
    }

    Ok(0)
}

/// Re-run structural validation over an already-loaded snapshot.
///
/// Only the warnings are interesting here: a snapshot with errors never
/// loads in the first place.
fn revalidate(snapshot: &KnowledgeSnapshot) -> Vec<String> {
    let documents: Vec<RegulatoryDocument> = snapshot.documents().cloned().collect();
    validate_documents(&documents).warnings
}

/// One listing line: id, mandate basis, title, and role markers.
fn document_line(document: &RegulatoryDocument) -> String {
    let mandate = if document.mandate.is_mandatory() {
        "mandatory  "
    } else {
        "if-material"
    };
    let mut line = format!("{:<6} {} {}", document.id.as_str(), mandate, document.title);
    if document.reference {
        line.push_str(" [reference]");
    }
    if document.is_procedural() {
        line.push_str(" [procedural]");
    }
    line
}
