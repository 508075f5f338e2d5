// src/engine/target.rs

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::errors::EngineError;
use crate::series::{CumulativePoint, CumulativeSeries, Series};

/// Straight-line path from `(first_date, start_total)` to `(last_date, goal)`.
///
/// Evaluable for any date; dates outside the range are extrapolated along the
/// same line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetTrajectory {
    first_date: NaiveDate,
    last_date: NaiveDate,
    start_total: f64,
    goal: f64,
}

/// Build the trajectory for a range spanning at least one day.
pub fn build_target(
    first_date: NaiveDate,
    last_date: NaiveDate,
    start_total: f64,
    goal: f64,
) -> Result<TargetTrajectory, EngineError> {
    if last_date <= first_date {
        return Err(EngineError::DegenerateRange {
            first: first_date,
            last: last_date,
        });
    }
    for value in [start_total, goal] {
        if !value.is_finite() {
            return Err(EngineError::NonFiniteValue { date: None, value });
        }
    }

    let trajectory = TargetTrajectory {
        first_date,
        last_date,
        start_total,
        goal,
    };
    debug!(
        first = %first_date,
        last = %last_date,
        start_total,
        goal,
        slope = trajectory.slope(),
        "built target trajectory"
    );
    Ok(trajectory)
}

impl TargetTrajectory {
    /// Trajectory spanning the first and last dates of `plan`.
    pub fn from_plan(plan: &Series, start_total: f64, goal: f64) -> Result<Self, EngineError> {
        match (plan.first(), plan.last()) {
            (Some(first), Some(last)) => build_target(first.date, last.date, start_total, goal),
            _ => Err(EngineError::InsufficientData(
                "cannot build a target trajectory from an empty plan".to_string(),
            )),
        }
    }

    pub fn first_date(&self) -> NaiveDate {
        self.first_date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.last_date
    }

    pub fn start_total(&self) -> f64 {
        self.start_total
    }

    pub fn goal(&self) -> f64 {
        self.goal
    }

    /// Whole calendar days between the first and last date (always >= 1).
    pub fn total_days(&self) -> i64 {
        (self.last_date - self.first_date).num_days()
    }

    /// Required increase per day.
    pub fn slope(&self) -> f64 {
        (self.goal - self.start_total) / self.total_days() as f64
    }

    /// Target total on `date`.
    ///
    /// Written as a weighted blend of the endpoints so that the first and
    /// last dates return `start_total` and `goal` exactly.
    pub fn evaluate(&self, date: NaiveDate) -> f64 {
        let elapsed = (date - self.first_date).num_days() as f64;
        let t = elapsed / self.total_days() as f64;
        self.start_total * (1.0 - t) + self.goal * t
    }

    /// Evaluate the trajectory at each of `dates`.
    pub fn sample<I>(&self, dates: I) -> CumulativeSeries
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        CumulativeSeries::new(
            dates
                .into_iter()
                .map(|date| CumulativePoint {
                    date,
                    total: self.evaluate(date),
                })
                .collect(),
        )
    }
}
