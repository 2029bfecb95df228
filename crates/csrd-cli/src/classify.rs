//! # Classify Subcommand
//!
//! Reporting-phase classification from company size figures, without
//! running a full determination.
//!
//! ## Usage
//!
//! ```bash
//! # A large public-interest entity:
//! csrd classify --employees 620 --revenue 95000000 --assets 41000000
//!
//! # A listed SME (meets no larger phase's thresholds):
//! csrd classify --employees 40 --revenue 2000000 --assets 900000
//! ```

use std::path::Path;

use anyhow::Result;
use clap::Args;

use csrd_core::CompanyProfile;
use csrd_engine::classify_phase;
use csrd_knowledge::PhaseApplicability;

/// Arguments for the `csrd classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Average number of employees during the financial year.
    #[arg(long)]
    pub employees: u32,

    /// Net turnover in EUR.
    #[arg(long)]
    pub revenue: f64,

    /// Balance-sheet total in EUR.
    #[arg(long)]
    pub assets: f64,
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs, snapshot_path: Option<&Path>) -> Result<u8> {
    let snapshot = crate::load_snapshot(snapshot_path)?;

    // The classifier reads only the size figures; the reporting year first
    // matters at obligation resolution.
    let profile = CompanyProfile::new(args.employees, args.revenue, args.assets, 0);
    let phase = classify_phase(&snapshot, &profile);

    println!("phase:         {}", phase.as_str());
    println!("size category: {}", phase.size_category());

    let thresholds = snapshot
        .reference_document()
        .and_then(|reference| reference.applicability_for(phase));
    if let Some(entry) = thresholds {
        println!("thresholds:    {}", threshold_line(entry));
    }

    Ok(0)
}

/// Human-readable summary of a phase's size test.
fn threshold_line(entry: &PhaseApplicability) -> String {
    let mut line = format!(
        "{} of 3 among >={} employees, >=EUR {:.0} revenue, >=EUR {:.0} assets",
        entry.criteria_required, entry.min_employees, entry.min_revenue, entry.min_assets
    );
    if let Some(max) = entry.max_employees {
        line.push_str(&format!(" (at most {max} employees)"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    use csrd_core::ReportingPhase;

    #[test]
    fn run_classify_succeeds_on_builtin() {
        let args = ClassifyArgs {
            employees: 620,
            revenue: 95_000_000.0,
            assets: 41_000_000.0,
        };
        assert_eq!(run_classify(&args, None).unwrap(), 0);
    }

    #[test]
    fn threshold_line_spells_out_the_size_test() {
        let snapshot = crate::load_snapshot(None).unwrap();
        let reference = snapshot.reference_document().unwrap();
        let entry = reference.applicability_for(ReportingPhase::LargePie).unwrap();
        let line = threshold_line(entry);
        assert!(line.contains("2 of 3"));
        assert!(line.contains(">=500 employees"));
        assert!(line.contains("40000000"));
    }

    #[test]
    fn threshold_line_includes_employee_cap_when_present() {
        let snapshot = crate::load_snapshot(None).unwrap();
        let reference = snapshot.reference_document().unwrap();
        let entry = reference.applicability_for(ReportingPhase::ListedSme).unwrap();
        assert!(threshold_line(entry).contains("at most 250 employees"));
    }
}
