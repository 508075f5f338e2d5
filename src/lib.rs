// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod output;
pub mod series;
pub mod source;
pub mod types;

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, PlanConfig, load_with_fs};
use crate::engine::{ProgressInputs, ProgressReport};
use crate::fs::{FileSystem, RealFileSystem};
use crate::series::prepare_actual;
use crate::source::build_sources;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (+ CLI overrides)
/// - plan / actual adapters
/// - the progress engine
/// - CSV export and the stdout summary
pub fn run(args: CliArgs) -> Result<()> {
    run_with_fs(args, Arc::new(RealFileSystem))
}

/// [`run`] against an arbitrary filesystem.
pub fn run_with_fs(args: CliArgs, fs: Arc<dyn FileSystem>) -> Result<()> {
    let mut cfg = load_with_fs(fs.as_ref(), &args.config)?;
    apply_overrides(&mut cfg, &args);

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let report = compute_report(&cfg, fs.clone())?;
    output::print_summary(&report, &cfg.tracking.unit);

    if !args.no_write {
        let written = output::write_report(fs.as_ref(), &cfg.output.dir, &report)?;
        info!(files = written.len(), dir = %cfg.output.dir.display(), "report written");
    }

    Ok(())
}

/// Load both sources described by `cfg` and run the engine once.
pub fn compute_report(cfg: &ConfigFile, fs: Arc<dyn FileSystem>) -> errors::Result<ProgressReport> {
    let (plan_source, actual_source) = build_sources(cfg, fs);

    let plan = plan_source.load_plan()?;
    let actual = prepare_actual(
        actual_source.load_actual()?,
        cfg.policy.duplicate_dates,
        cfg.policy.negative_increments,
    )?;
    debug!(
        plan_entries = plan.len(),
        actual_days = actual.len(),
        "inputs ready"
    );

    let inputs = ProgressInputs {
        plan: &plan,
        actual: &actual,
        start_total: cfg.tracking.start_total,
        goal: cfg.tracking.goal,
        negative_increments: cfg.policy.negative_increments,
    };
    Ok(ProgressReport::compute(&inputs)?)
}

fn apply_overrides(cfg: &mut ConfigFile, args: &CliArgs) {
    if let Some(ref path) = args.actual {
        cfg.actual.file = path.clone();
    }
    if let Some(ref dir) = args.output_dir {
        cfg.output.dir = dir.clone();
    }
    if let Some(policy) = args.duplicate_dates {
        cfg.policy.duplicate_dates = policy;
    }
    if let Some(policy) = args.negative_increments {
        cfg.policy.negative_increments = policy;
    }
}

/// Simple dry-run output: print the validated configuration.
fn print_dry_run(cfg: &ConfigFile) {
    println!("pacetrack dry-run");
    println!("  tracking.start_total = {}", cfg.tracking.start_total);
    println!("  tracking.goal = {}", cfg.tracking.goal);
    println!("  tracking.unit = {}", cfg.tracking.unit);
    println!("  policy.duplicate_dates = {:?}", cfg.policy.duplicate_dates);
    println!(
        "  policy.negative_increments = {:?}",
        cfg.policy.negative_increments
    );
    println!();

    match &cfg.plan {
        PlanConfig::Inline(series) => {
            println!("plan: inline ({} entries)", series.len());
            if let (Some(first), Some(last)) = (series.first(), series.last()) {
                println!("  from {} to {}", first.date, last.date);
            }
        }
        PlanConfig::Csv(table) => {
            println!("plan: {}", table.file.display());
            println!("  columns: {}, {}", table.date_column, table.value_column);
        }
    }
    println!("actual: {}", cfg.actual.file.display());
    println!(
        "  columns: {}, {}",
        cfg.actual.date_column, cfg.actual.value_column
    );
    println!("output: {}", cfg.output.dir.display());

    debug!("dry-run complete (no data read)");
}
