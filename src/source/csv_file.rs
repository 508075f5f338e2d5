// src/source/csv_file.rs

//! CSV-backed plan and actual sources.
//!
//! Both read a header row and two named columns: a date and a daily
//! increment. Dates may carry a time of day, which is dropped.

use std::io;
use std::path::Path;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use crate::config::CsvTable;
use crate::errors::{PacetrackError, Result};
use crate::fs::FileSystem;
use crate::series::{DatedValue, Series};
use crate::source::{ActualSource, PlanSource, warn_on_gaps};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Plan read from a CSV file, in file order.
#[derive(Debug, Clone)]
pub struct CsvPlanSource {
    fs: Arc<dyn FileSystem>,
    table: CsvTable,
}

impl CsvPlanSource {
    pub fn new(fs: Arc<dyn FileSystem>, table: CsvTable) -> Self {
        Self { fs, table }
    }
}

impl PlanSource for CsvPlanSource {
    fn load_plan(&self) -> Result<Series> {
        let rows = read_dated_rows(self.fs.as_ref(), &self.table)?;
        info!(path = %self.table.file.display(), entries = rows.len(), "loaded plan");
        let plan = Series::new(rows);
        warn_on_gaps(&plan);
        Ok(plan)
    }
}

/// Actual log read from a CSV file, e.g. `date,km` rows.
#[derive(Debug, Clone)]
pub struct CsvActualSource {
    fs: Arc<dyn FileSystem>,
    table: CsvTable,
}

impl CsvActualSource {
    pub fn new(fs: Arc<dyn FileSystem>, table: CsvTable) -> Self {
        Self { fs, table }
    }
}

impl ActualSource for CsvActualSource {
    fn load_actual(&self) -> Result<Vec<DatedValue>> {
        let rows = read_dated_rows(self.fs.as_ref(), &self.table)?;
        info!(
            path = %self.table.file.display(),
            observations = rows.len(),
            "loaded actual log"
        );
        Ok(rows)
    }
}

/// Read every data row of `table` as a `DatedValue`, in file order.
pub fn read_dated_rows(fs: &dyn FileSystem, table: &CsvTable) -> Result<Vec<DatedValue>> {
    let path = table.file.as_path();
    if !fs.is_file(path) {
        return Err(PacetrackError::IoError(io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "{} not found; expected a CSV file with columns: {}, {}",
                path.display(),
                table.date_column,
                table.value_column
            ),
        )));
    }

    let reader = fs.open_read(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let date_idx = column_index(&headers, &table.date_column, path)?;
    let value_idx = column_index(&headers, &table.value_column, path)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row = record.position().map_or(0, |p| p.line());
        let invalid = |message: String| PacetrackError::InvalidRecord {
            path: path.to_path_buf(),
            row,
            message,
        };

        let date_raw = record.get(date_idx).unwrap_or_default();
        let date = parse_date(date_raw)
            .ok_or_else(|| invalid(format!("invalid date '{date_raw}'")))?;

        let value_raw = record.get(value_idx).unwrap_or_default();
        if value_raw.is_empty() {
            return Err(invalid(format!("missing value in column '{}'", table.value_column)));
        }
        let value: f64 = value_raw
            .parse()
            .map_err(|e| invalid(format!("invalid value '{value_raw}': {e}")))?;

        rows.push(DatedValue::new(date, value));
    }

    Ok(rows)
}

fn column_index(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        PacetrackError::InvalidRecord {
            path: path.to_path_buf(),
            row: 1,
            message: format!(
                "missing column '{name}' (found: {})",
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        }
    })
}

/// Parse `YYYY-MM-DD`, or a timestamp whose date part is kept.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}
