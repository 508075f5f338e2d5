// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::series::Series;
use crate::types::{DuplicatePolicy, NegativeIncrementPolicy};

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [tracking]
/// start_total = 2716.0
/// goal = 3000.0
///
/// [policy]
/// duplicate_dates = "sum"
///
/// [plan]
/// entries = [
///     { date = "2025-12-01", value = 0.0 },
///     { date = "2025-12-02", value = 10.0 },
/// ]
///
/// [actual]
/// file = "actual.csv"
/// ```
///
/// Only `[tracking]` and `[plan]` are required.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    pub tracking: TrackingSection,

    #[serde(default)]
    pub policy: PolicySection,

    pub plan: RawPlanSection,

    #[serde(default)]
    pub actual: CsvTable,

    #[serde(default)]
    pub output: OutputSection,
}

/// `[tracking]` section: the scalars the target line is drawn between.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingSection {
    /// Total accumulated immediately before the first plan date.
    pub start_total: f64,

    /// Total to reach by the last plan date.
    pub goal: f64,

    /// Display label for values (e.g. "km"). Not used in computation.
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "km".to_string()
}

/// `[policy]` section.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct PolicySection {
    #[serde(default)]
    pub duplicate_dates: DuplicatePolicy,

    #[serde(default)]
    pub negative_increments: NegativeIncrementPolicy,
}

/// `[plan]` section: either a CSV file or inline entries, never both.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlanSection {
    #[serde(default)]
    pub file: Option<PathBuf>,

    #[serde(default = "default_date_column")]
    pub date_column: String,

    #[serde(default = "default_value_column")]
    pub value_column: String,

    /// Inline schedule; dates are `YYYY-MM-DD` strings.
    #[serde(default)]
    pub entries: Vec<RawPlanEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlanEntry {
    pub date: String,
    pub value: f64,
}

/// Location and column names of a CSV table of `(date, increment)` rows.
///
/// Used as-is for `[actual]`; the defaults match a file called `actual.csv`
/// with columns `date,km`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CsvTable {
    #[serde(default = "default_actual_file")]
    pub file: PathBuf,

    #[serde(default = "default_date_column")]
    pub date_column: String,

    #[serde(default = "default_value_column")]
    pub value_column: String,
}

impl Default for CsvTable {
    fn default() -> Self {
        Self {
            file: default_actual_file(),
            date_column: default_date_column(),
            value_column: default_value_column(),
        }
    }
}

fn default_actual_file() -> PathBuf {
    PathBuf::from("actual.csv")
}

fn default_date_column() -> String {
    "date".to_string()
}

fn default_value_column() -> String {
    "km".to_string()
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("pacetrack-out")
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// Where the plan comes from after validation.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanConfig {
    /// Entries written directly in the config, in authored order.
    Inline(Series),
    Csv(CsvTable),
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>`, which checks the
/// tracking scalars, the plan definition and the column names.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub tracking: TrackingSection,
    pub policy: PolicySection,
    pub plan: PlanConfig,
    pub actual: CsvTable,
    pub output: OutputSection,
}

impl ConfigFile {
    /// Make relative file paths relative to `base` (the config's directory).
    pub fn resolve_paths(&mut self, base: &Path) {
        if let PlanConfig::Csv(table) = &mut self.plan {
            table.file = resolve(base, &table.file);
        }
        self.actual.file = resolve(base, &self.actual.file);
        self.output.dir = resolve(base, &self.output.dir);
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
