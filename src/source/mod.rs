// src/source/mod.rs

//! Adapters that supply plan and actual increments to the engine.
//!
//! The engine only ever sees [`Series`] / [`DatedValue`] values; which
//! adapter produced them is decided by the caller (see
//! [`build_sources`]). Adapter failures surface as
//! [`PacetrackError`](crate::errors::PacetrackError), never as engine errors.

pub mod csv_file;
pub mod inline;

use std::sync::Arc;

use tracing::warn;

use crate::config::{ConfigFile, PlanConfig};
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::series::{DatedValue, Series};

pub use csv_file::{CsvActualSource, CsvPlanSource};
pub use self::inline::InlinePlanSource;

/// Supplies the complete, date-ordered plan of daily increments.
pub trait PlanSource {
    fn load_plan(&self) -> Result<Series>;
}

/// Supplies logged observations, in any order.
pub trait ActualSource {
    fn load_actual(&self) -> Result<Vec<DatedValue>>;
}

/// Pick the plan and actual adapters described by `cfg`.
pub fn build_sources(
    cfg: &ConfigFile,
    fs: Arc<dyn FileSystem>,
) -> (Box<dyn PlanSource>, Box<dyn ActualSource>) {
    let plan: Box<dyn PlanSource> = match &cfg.plan {
        PlanConfig::Inline(series) => Box::new(InlinePlanSource::new(series.clone())),
        PlanConfig::Csv(table) => Box::new(CsvPlanSource::new(fs.clone(), table.clone())),
    };
    let actual: Box<dyn ActualSource> = Box::new(CsvActualSource::new(fs, cfg.actual.clone()));
    (plan, actual)
}

/// Log a warning for every missing day between consecutive plan entries.
///
/// A plan is meant to cover every day, rest days included. Gaps do not break
/// the computation, so they are reported rather than rejected.
pub(crate) fn warn_on_gaps(plan: &Series) {
    for pair in plan.points().windows(2) {
        let days = (pair[1].date - pair[0].date).num_days();
        if days > 1 {
            warn!(
                after = %pair[0].date,
                before = %pair[1].date,
                missing_days = days - 1,
                "plan has no entries for some days"
            );
        }
    }
}
