//! # Resolve Subcommand
//!
//! Obligation resolution for a reporting phase and year: the machine-id
//! requirements a company in that phase must disclose against.
//!
//! ## Usage
//!
//! ```bash
//! # The wave-one obligation list for financial year 2025:
//! csrd resolve --phase large_pie --year 2025
//!
//! # The listed-SME list as JSON for pipeline consumption:
//! csrd resolve --phase listed_sme --year 2027 --json
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use csrd_core::ReportingPhase;
use csrd_engine::{Obligation, ObligationResolver};

/// Arguments for the `csrd resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Reporting phase (large_pie, large_undertaking, or listed_sme).
    #[arg(long)]
    pub phase: ReportingPhase,

    /// The financial year the report covers.
    #[arg(long)]
    pub year: i32,

    /// Emit the obligation list as pretty-printed JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the resolve subcommand.
pub fn run_resolve(args: &ResolveArgs, snapshot_path: Option<&Path>) -> Result<u8> {
    let snapshot = crate::load_snapshot(snapshot_path)?;
    let resolver = ObligationResolver::default();
    let obligations = resolver.resolve(&snapshot, args.phase, args.year);

    if args.json {
        let rendered = serde_json::to_string_pretty(&obligations)
            .context("failed to serialize obligation list")?;
        println!("{rendered}");
        return Ok(0);
    }

    for obligation in &obligations {
        println!("  {}", obligation_line(obligation));
    }
    println!();
    println!(
        "Total: {} obligations ({}, year {})",
        obligations.len(),
        args.phase,
        args.year
    );
    Ok(0)
}

/// One listing line: machine id, mandate basis, label, simplified marker.
fn obligation_line(obligation: &Obligation) -> String {
    let mandate = if obligation.is_mandatory() {
        "mandatory  "
    } else {
        "if-material"
    };
    let mut line = format!(
        "{:<8} {} {}",
        obligation.topic_id.as_str(),
        mandate,
        obligation.label
    );
    if obligation.simplified {
        line.push_str(" [simplified]");
    }
    line
}
