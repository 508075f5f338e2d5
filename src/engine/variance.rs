// src/engine/variance.rs

//! Alignment of cumulative series against the target and against the plan.
//!
//! Sparse semantics throughout: a date without an observation produces no
//! variance entry and an absent cell in [`align`]; nothing is imputed.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use crate::engine::target::TargetTrajectory;
use crate::series::{CumulativeSeries, DatedValue, Series};

/// Actual total minus target total, at every date of `actual_cum`.
///
/// Actual dates need not be plan dates; the trajectory is continuous.
pub fn compute_variance(actual_cum: &CumulativeSeries, trajectory: &TargetTrajectory) -> Series {
    actual_cum
        .iter()
        .map(|p| DatedValue::new(p.date, p.total - trajectory.evaluate(p.date)))
        .collect()
}

/// Actual total minus planned total, for dates present in both series.
///
/// Both inputs are date-sorted cumulative series (as produced by
/// `accumulate`), so a single merge walk is enough.
pub fn compute_plan_variance(
    actual_cum: &CumulativeSeries,
    planned_cum: &CumulativeSeries,
) -> Series {
    let actual = actual_cum.points();
    let planned = planned_cum.points();
    let (mut i, mut j) = (0, 0);
    let mut out = Vec::new();

    while i < actual.len() && j < planned.len() {
        match actual[i].date.cmp(&planned[j].date) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(DatedValue::new(
                    actual[i].date,
                    actual[i].total - planned[j].total,
                ));
                i += 1;
                j += 1;
            }
        }
    }

    Series::new(out)
}

/// One date of the combined cumulative view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlignedRow {
    pub date: NaiveDate,
    pub planned: Option<f64>,
    pub target: Option<f64>,
    pub actual: Option<f64>,
}

/// Outer join of the three cumulative series on the union of their dates.
pub fn align(
    planned_cum: &CumulativeSeries,
    target_cum: &CumulativeSeries,
    actual_cum: &CumulativeSeries,
) -> Vec<AlignedRow> {
    let mut dates: Vec<NaiveDate> = planned_cum
        .dates()
        .chain(target_cum.dates())
        .chain(actual_cum.dates())
        .collect();
    dates.sort_unstable();
    dates.dedup();

    dates
        .into_iter()
        .map(|date| AlignedRow {
            date,
            planned: planned_cum.total_at(date),
            target: target_cum.total_at(date),
            actual: actual_cum.total_at(date),
        })
        .collect()
}
