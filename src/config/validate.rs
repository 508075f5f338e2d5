// src/config/validate.rs

use chrono::NaiveDate;

use crate::config::model::{ConfigFile, CsvTable, PlanConfig, RawConfigFile, RawPlanSection};
use crate::errors::{PacetrackError, Result};
use crate::series::{DatedValue, Series};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::PacetrackError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_tracking(&raw)?;
        validate_columns("actual", &raw.actual.date_column, &raw.actual.value_column)?;
        let plan = validate_plan(&raw.plan)?;

        Ok(ConfigFile {
            tracking: raw.tracking,
            policy: raw.policy,
            plan,
            actual: raw.actual,
            output: raw.output,
        })
    }
}

fn validate_tracking(cfg: &RawConfigFile) -> Result<()> {
    let tracking = &cfg.tracking;
    if !tracking.start_total.is_finite() {
        return Err(PacetrackError::ConfigError(format!(
            "[tracking].start_total must be a finite number (got {})",
            tracking.start_total
        )));
    }
    if !tracking.goal.is_finite() {
        return Err(PacetrackError::ConfigError(format!(
            "[tracking].goal must be a finite number (got {})",
            tracking.goal
        )));
    }
    Ok(())
}

fn validate_columns(section: &str, date_column: &str, value_column: &str) -> Result<()> {
    if date_column.trim().is_empty() || value_column.trim().is_empty() {
        return Err(PacetrackError::ConfigError(format!(
            "[{section}] column names must not be empty"
        )));
    }
    if date_column == value_column {
        return Err(PacetrackError::ConfigError(format!(
            "[{section}] date_column and value_column must differ (both '{date_column}')"
        )));
    }
    Ok(())
}

fn validate_plan(plan: &RawPlanSection) -> Result<PlanConfig> {
    match (&plan.file, plan.entries.is_empty()) {
        (Some(_), false) => Err(PacetrackError::ConfigError(
            "[plan] must set either `file` or `entries`, not both".to_string(),
        )),
        (None, true) => Err(PacetrackError::ConfigError(
            "[plan] must set `file` or a non-empty `entries` list".to_string(),
        )),
        (Some(file), true) => {
            validate_columns("plan", &plan.date_column, &plan.value_column)?;
            Ok(PlanConfig::Csv(CsvTable {
                file: file.clone(),
                date_column: plan.date_column.clone(),
                value_column: plan.value_column.clone(),
            }))
        }
        (None, false) => {
            let points = plan
                .entries
                .iter()
                .enumerate()
                .map(|(idx, entry)| {
                    let date = NaiveDate::parse_from_str(entry.date.trim(), "%Y-%m-%d")
                        .map_err(|e| {
                            PacetrackError::ConfigError(format!(
                                "[plan].entries[{idx}]: invalid date '{}' ({e}); expected YYYY-MM-DD",
                                entry.date
                            ))
                        })?;
                    Ok(DatedValue::new(date, entry.value))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(PlanConfig::Inline(Series::new(points)))
        }
    }
}
