// src/output/export.rs

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tracing::info;

use crate::engine::ProgressReport;
use crate::errors::Result;
use crate::fs::FileSystem;

pub const CUMULATIVE_CSV: &str = "cumulative.csv";
pub const DAILY_PLAN_CSV: &str = "daily_plan.csv";
pub const REMAINING_CSV: &str = "remaining.csv";
pub const VARIANCE_CSV: &str = "variance.csv";

/// Write the four chart tables of `report` into `dir`.
///
/// Returns the written paths in a fixed order: cumulative, daily plan,
/// remaining, variance.
pub fn write_report(fs: &dyn FileSystem, dir: &Path, report: &ProgressReport) -> Result<Vec<PathBuf>> {
    let tables = [
        (CUMULATIVE_CSV, cumulative_table(report)?),
        (DAILY_PLAN_CSV, daily_plan_table(report)?),
        (REMAINING_CSV, remaining_table(report)?),
        (VARIANCE_CSV, variance_table(report)?),
    ];

    let mut written = Vec::with_capacity(tables.len());
    for (name, bytes) in tables {
        let path = dir.join(name);
        fs.write(&path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote table");
        written.push(path);
    }
    Ok(written)
}

fn cumulative_table(report: &ProgressReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["date", "planned", "target", "actual"])?;
    for row in report.aligned() {
        writer.write_record([
            row.date.to_string(),
            fmt_opt(row.planned),
            fmt_opt(row.target),
            fmt_opt(row.actual),
        ])?;
    }
    finish(writer)
}

fn daily_plan_table(report: &ProgressReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["date", "planned_increment"])?;
    for p in &report.planned_daily {
        writer.write_record([p.date.to_string(), fmt(p.value)])?;
    }
    finish(writer)
}

fn remaining_table(report: &ProgressReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["date", "remaining"])?;
    for p in &report.remaining {
        writer.write_record([p.date.to_string(), fmt(p.value)])?;
    }
    finish(writer)
}

fn variance_table(report: &ProgressReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "date",
        "actual",
        "target",
        "variance_vs_target",
        "planned",
        "variance_vs_plan",
    ])?;
    for (point, variance) in report.actual.iter().zip(report.variance.iter()) {
        writer.write_record([
            point.date.to_string(),
            fmt(point.total),
            fmt(report.trajectory.evaluate(point.date)),
            fmt(variance.value),
            fmt_opt(report.planned.total_at(point.date)),
            fmt_opt(report.plan_variance.value_at(point.date)),
        ])?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("flushing CSV buffer: {}", e.error()))?;
    Ok(bytes)
}

fn fmt(value: f64) -> String {
    format!("{:.3}", value)
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(fmt).unwrap_or_default()
}
