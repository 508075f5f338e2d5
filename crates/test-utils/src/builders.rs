#![allow(dead_code)]

use std::path::PathBuf;

use pacetrack::config::{
    ConfigFile, CsvTable, OutputSection, PolicySection, RawConfigFile, RawPlanEntry,
    RawPlanSection, TrackingSection,
};
use pacetrack::series::Series;
use pacetrack::types::{DuplicatePolicy, NegativeIncrementPolicy};

/// Builder for `ConfigFile` to simplify test setup.
///
/// Starts from the December scenario's scalars with an empty inline plan.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                tracking: TrackingSection {
                    start_total: crate::fixtures::DECEMBER_START_TOTAL,
                    goal: crate::fixtures::DECEMBER_GOAL,
                    unit: "km".to_string(),
                },
                policy: PolicySection::default(),
                plan: RawPlanSection {
                    file: None,
                    date_column: "date".to_string(),
                    value_column: "km".to_string(),
                    entries: Vec::new(),
                },
                actual: CsvTable::default(),
                output: OutputSection::default(),
            },
        }
    }

    pub fn start_total(mut self, value: f64) -> Self {
        self.config.tracking.start_total = value;
        self
    }

    pub fn goal(mut self, value: f64) -> Self {
        self.config.tracking.goal = value;
        self
    }

    /// Use `plan` as the inline `[plan].entries`.
    pub fn inline_plan(mut self, plan: &Series) -> Self {
        self.config.plan.file = None;
        self.config.plan.entries = plan
            .iter()
            .map(|p| RawPlanEntry {
                date: p.date.to_string(),
                value: p.value,
            })
            .collect();
        self
    }

    pub fn plan_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.plan.entries.clear();
        self.config.plan.file = Some(path.into());
        self
    }

    pub fn actual_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.actual.file = path.into();
        self
    }

    pub fn actual_columns(mut self, date: &str, value: &str) -> Self {
        self.config.actual.date_column = date.to_string();
        self.config.actual.value_column = value.to_string();
        self
    }

    pub fn duplicate_dates(mut self, policy: DuplicatePolicy) -> Self {
        self.config.policy.duplicate_dates = policy;
        self
    }

    pub fn negative_increments(mut self, policy: NegativeIncrementPolicy) -> Self {
        self.config.policy.negative_increments = policy;
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output.dir = dir.into();
        self
    }

    /// The raw, unvalidated config.
    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
