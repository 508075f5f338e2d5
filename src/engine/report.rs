// src/engine/report.rs

//! One-shot computation of every output series for a plan/actual pair.

use serde::Serialize;
use tracing::{debug, info};

use crate::engine::accumulate::accumulate;
use crate::engine::remaining::remaining;
use crate::engine::target::TargetTrajectory;
use crate::engine::variance::{AlignedRow, align, compute_plan_variance, compute_variance};
use crate::errors::EngineError;
use crate::series::{CumulativePoint, CumulativeSeries, Series, check_increments};
use crate::types::NegativeIncrementPolicy;

/// Borrowed inputs of a single computation.
///
/// `actual` is expected to have gone through
/// [`prepare_actual`](crate::series::prepare_actual) already.
#[derive(Debug, Clone, Copy)]
pub struct ProgressInputs<'a> {
    pub plan: &'a Series,
    pub actual: &'a Series,
    /// Accumulated total immediately before the first plan date.
    pub start_total: f64,
    pub goal: f64,
    pub negative_increments: NegativeIncrementPolicy,
}

/// Headline numbers derived from the report's series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub planned_final_total: f64,
    /// `planned_final_total - goal`; positive when the plan overshoots.
    pub planned_overshoot: f64,
    pub latest_actual: Option<CumulativePoint>,
    /// Actual minus target on the latest observed date.
    pub latest_variance: Option<f64>,
    /// Actual minus plan on the latest observed date that the plan covers.
    pub latest_plan_variance: Option<f64>,
    /// Observations dated before the first or after the last plan date.
    pub observations_outside_plan: usize,
}

/// Every series a presentation layer needs, computed from scratch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub goal: f64,
    pub trajectory: TargetTrajectory,
    pub planned_daily: Series,
    pub planned: CumulativeSeries,
    pub actual: CumulativeSeries,
    /// Trajectory sampled at the plan dates.
    pub target: CumulativeSeries,
    /// Actual minus target, at actual dates.
    pub variance: Series,
    /// Actual minus plan, at actual dates the plan covers.
    pub plan_variance: Series,
    pub remaining: Series,
    pub summary: ProgressSummary,
}

impl ProgressReport {
    pub fn compute(inputs: &ProgressInputs<'_>) -> Result<Self, EngineError> {
        check_increments(inputs.plan, inputs.negative_increments)?;
        check_increments(inputs.actual, inputs.negative_increments)?;

        let planned = accumulate(inputs.plan, inputs.start_total)?;
        let actual = accumulate(inputs.actual, inputs.start_total)?;

        let trajectory = TargetTrajectory::from_plan(inputs.plan, inputs.start_total, inputs.goal)?;
        let target = trajectory.sample(inputs.plan.dates());

        let variance = compute_variance(&actual, &trajectory);
        let plan_variance = compute_plan_variance(&actual, &planned);
        let remaining = remaining(&planned, inputs.goal);

        let summary = summarize(&trajectory, &planned, &actual, &variance, &plan_variance);
        debug!(
            plan_days = planned.len(),
            observations = actual.len(),
            outside_plan = summary.observations_outside_plan,
            "progress report computed"
        );
        if summary.planned_overshoot > 0.0 {
            info!(
                overshoot = summary.planned_overshoot,
                "plan finishes above the goal"
            );
        }

        Ok(Self {
            goal: inputs.goal,
            trajectory,
            planned_daily: inputs.plan.clone(),
            planned,
            actual,
            target,
            variance,
            plan_variance,
            remaining,
            summary,
        })
    }

    /// Combined planned/target/actual view on the union of their dates.
    pub fn aligned(&self) -> Vec<AlignedRow> {
        align(&self.planned, &self.target, &self.actual)
    }
}

fn summarize(
    trajectory: &TargetTrajectory,
    planned: &CumulativeSeries,
    actual: &CumulativeSeries,
    variance: &Series,
    plan_variance: &Series,
) -> ProgressSummary {
    // `from_plan` succeeded, so the plan has at least two entries.
    let planned_final_total = planned.last().map_or(trajectory.start_total(), |p| p.total);

    let observations_outside_plan = actual
        .dates()
        .filter(|d| *d < trajectory.first_date() || *d > trajectory.last_date())
        .count();

    ProgressSummary {
        planned_final_total,
        planned_overshoot: planned_final_total - trajectory.goal(),
        latest_actual: actual.last().copied(),
        latest_variance: variance.last().map(|v| v.value),
        latest_plan_variance: plan_variance.last().map(|v| v.value),
        observations_outside_plan,
    }
}
