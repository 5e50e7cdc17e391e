//! MVNO Scenario CLI
//!
//! Command-line interface for running a single scenario projection

use anyhow::{Context, Result};
use clap::Parser;
use mvno_scenario::assumptions::{save_baseline, DEFAULT_BASELINE_PATH};
use mvno_scenario::{Override, ProjectionResult, ScenarioRunner, VERSION};
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mvno_scenario", version, about = "Project subscribers and cash for an MVNO scenario")]
struct Args {
    /// Baseline parameter file (CSV `parameter,value` or flat JSON)
    #[arg(long, default_value = DEFAULT_BASELINE_PATH)]
    baseline: PathBuf,

    /// Override a baseline parameter, e.g. --set churn_pct=1.5 (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    overrides: Vec<Override>,

    /// Write the monthly table to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print summary and monthly rows as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Save the merged parameters as a new baseline file
    #[arg(long, value_name = "PATH")]
    save_baseline: Option<PathBuf>,

    /// Rows of the monthly table to print in the report
    #[arg(long, default_value_t = 12)]
    show_months: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'a str,
    summary: &'a mvno_scenario::Summary,
    rows: &'a [mvno_scenario::MonthlyRow],
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runner = ScenarioRunner::from_file(&args.baseline)
        .with_context(|| format!("loading baseline {}", args.baseline.display()))?;

    let params = runner
        .parameters(&args.overrides)
        .context("building scenario parameters")?;
    let result = mvno_scenario::run_model(&params).context("running projection")?;

    if let Some(path) = &args.save_baseline {
        save_baseline(path, &params.to_map())
            .with_context(|| format!("saving baseline {}", path.display()))?;
    }

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        result.write_csv(file).context("writing monthly table")?;
    }

    if args.json {
        let report = JsonReport {
            version: VERSION,
            summary: &result.summary,
            rows: &result.rows,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&result, args.show_months);
    if let Some(path) = &args.output {
        println!("\nFull table written to: {}", path.display());
    }
    Ok(())
}

fn print_report(result: &ProjectionResult, show_months: usize) {
    let summary = &result.summary;

    println!("MVNO Scenario Model (engine v{})", VERSION);
    println!("===================================\n");

    let payback = summary
        .payback_months
        .map(|m| m.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("  Payback (months):    {}", payback);
    println!("  NPV:                 {:.2} M", summary.npv / 1e6);
    println!("  Peak funding need:   {:.2} M", summary.peak_cash_need / 1e6);
    println!("  Subs at month {:<4}   {}", result.months(), summary.sub_count_end);
    println!();

    println!(
        "{:>5} {:>12} {:>14} {:>14} {:>14} {:>16}",
        "Month", "Subscribers", "Revenue", "EBIT", "Cash", "CumCash"
    );
    println!("{}", "-".repeat(80));
    for row in result.rows.iter().take(show_months) {
        println!(
            "{:>5} {:>12.0} {:>14.0} {:>14.0} {:>14.0} {:>16.0}",
            row.month, row.subscribers, row.revenue, row.ebit, row.cash, row.cum_cash
        );
    }
    if result.months() > show_months {
        println!("... ({} more months)", result.months() - show_months);
    }
}
