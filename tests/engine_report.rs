mod common;
use crate::common::{TestResult, assert_close, init_tracing};

use pacetrack::engine::{ProgressInputs, ProgressReport, remaining};
use pacetrack::errors::EngineError;
use pacetrack::series::{DatedValue, Series};
use pacetrack::types::NegativeIncrementPolicy;
use pacetrack_test_utils::fixtures::{
    DECEMBER_GOAL, DECEMBER_START_TOTAL, date, dec, december_plan,
};

fn inputs<'a>(plan: &'a Series, actual: &'a Series) -> ProgressInputs<'a> {
    ProgressInputs {
        plan,
        actual,
        start_total: DECEMBER_START_TOTAL,
        goal: DECEMBER_GOAL,
        negative_increments: NegativeIncrementPolicy::Allow,
    }
}

fn sparse_actual() -> Series {
    Series::new(vec![
        DatedValue::new(dec(1), 0.0),
        DatedValue::new(dec(3), 20.0),
    ])
}

#[test]
fn december_scenario_end_to_end() -> TestResult {
    init_tracing();

    let plan = december_plan();
    let actual = sparse_actual();
    let report = ProgressReport::compute(&inputs(&plan, &actual))?;

    assert_eq!(report.planned.len(), 31);
    assert_eq!(report.planned.total_at(dec(31)), Some(3036.0));
    assert_eq!(report.target.len(), 31);
    assert_eq!(report.target.total_at(dec(1)), Some(2716.0));
    assert_eq!(report.target.total_at(dec(31)), Some(3000.0));
    assert_close(report.trajectory.slope(), 284.0 / 30.0);
    assert_close(report.target.total_at(dec(16)).unwrap_or(f64::NAN), 2858.0);

    assert_eq!(report.actual.total_at(dec(1)), Some(2716.0));
    assert_eq!(report.actual.total_at(dec(3)), Some(2736.0));
    assert_eq!(report.variance.len(), 2);
    assert!((report.variance.value_at(dec(3)).unwrap_or(f64::NAN) - 1.0667).abs() < 1e-3);

    // The plan is on schedule with the sparse log on both observed days.
    assert_eq!(report.plan_variance.value_at(dec(1)), Some(0.0));
    assert_eq!(report.plan_variance.value_at(dec(3)), Some(0.0));

    assert_eq!(report.planned_daily, plan);

    Ok(())
}

#[test]
fn remaining_is_non_increasing_and_ends_at_overshoot() -> TestResult {
    init_tracing();

    let plan = december_plan();
    let report = ProgressReport::compute(&inputs(&plan, &Series::default()))?;

    let values: Vec<f64> = report.remaining.iter().map(|p| p.value).collect();
    assert_eq!(values.len(), 31);
    assert!(values.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(values[0], 284.0);
    assert_eq!(values[30], -36.0);
    assert_eq!(
        values[30],
        DECEMBER_GOAL - report.planned.last().map_or(f64::NAN, |p| p.total)
    );

    // Same numbers from the standalone calculator.
    assert_eq!(remaining(&report.planned, DECEMBER_GOAL), report.remaining);

    Ok(())
}

#[test]
fn repeated_computation_is_bit_identical() -> TestResult {
    init_tracing();

    let plan = december_plan();
    let actual = sparse_actual();
    let first = ProgressReport::compute(&inputs(&plan, &actual))?;
    let second = ProgressReport::compute(&inputs(&plan, &actual))?;

    assert_eq!(first, second);
    let bits = |r: &ProgressReport| -> Vec<u64> {
        r.variance
            .iter()
            .map(|v| v.value.to_bits())
            .chain(r.target.totals().map(f64::to_bits))
            .collect()
    };
    assert_eq!(bits(&first), bits(&second));

    Ok(())
}

#[test]
fn summary_reports_overshoot_and_latest_position() -> TestResult {
    init_tracing();

    let plan = december_plan();
    let actual = sparse_actual();
    let report = ProgressReport::compute(&inputs(&plan, &actual))?;
    let summary = &report.summary;

    assert_eq!(summary.planned_final_total, 3036.0);
    assert_eq!(summary.planned_overshoot, 36.0);
    assert_eq!(summary.latest_actual.map(|p| p.date), Some(dec(3)));
    assert!(summary.latest_variance.unwrap_or(f64::NAN) > 0.0);
    assert_eq!(summary.latest_plan_variance, Some(0.0));
    assert_eq!(summary.observations_outside_plan, 0);

    Ok(())
}

#[test]
fn observations_before_the_plan_are_counted_not_dropped() -> TestResult {
    init_tracing();

    let plan = december_plan();
    let actual = Series::new(vec![
        DatedValue::new(date(2025, 11, 30), 8.0),
        DatedValue::new(dec(2), 10.0),
    ]);
    let report = ProgressReport::compute(&inputs(&plan, &actual))?;

    assert_eq!(report.actual.len(), 2);
    assert_eq!(report.variance.len(), 2);
    assert_eq!(report.plan_variance.len(), 1);
    assert_eq!(report.summary.observations_outside_plan, 1);

    Ok(())
}

#[test]
fn empty_actual_yields_empty_actual_series() -> TestResult {
    init_tracing();

    let plan = december_plan();
    let report = ProgressReport::compute(&inputs(&plan, &Series::default()))?;

    assert!(report.actual.is_empty());
    assert!(report.variance.is_empty());
    assert!(report.plan_variance.is_empty());
    assert_eq!(report.summary.latest_actual, None);
    assert_eq!(report.summary.latest_variance, None);

    Ok(())
}

#[test]
fn empty_plan_is_an_error() {
    init_tracing();

    let actual = sparse_actual();
    assert!(matches!(
        ProgressReport::compute(&inputs(&Series::default(), &actual)),
        Err(EngineError::InsufficientData(_))
    ));
}

#[test]
fn negative_increments_follow_policy() -> TestResult {
    init_tracing();

    let plan = december_plan();
    let actual = Series::new(vec![
        DatedValue::new(dec(2), 12.0),
        DatedValue::new(dec(3), -2.0),
    ]);

    let allowed = ProgressReport::compute(&inputs(&plan, &actual))?;
    assert_eq!(allowed.actual.total_at(dec(3)), Some(2726.0));

    let strict = ProgressInputs {
        negative_increments: NegativeIncrementPolicy::Reject,
        ..inputs(&plan, &actual)
    };
    assert_eq!(
        ProgressReport::compute(&strict),
        Err(EngineError::NegativeIncrement {
            date: dec(3),
            value: -2.0
        })
    );

    Ok(())
}

#[test]
fn unsorted_plan_fails_loudly() {
    init_tracing();

    let mut points = december_plan().into_inner();
    points.swap(3, 4);
    let plan = Series::new(points);

    assert!(matches!(
        ProgressReport::compute(&inputs(&plan, &Series::default())),
        Err(EngineError::UnsortedInput { .. })
    ));
}

#[test]
fn aligned_view_covers_plan_and_actual_dates() -> TestResult {
    init_tracing();

    let plan = december_plan();
    let actual = Series::new(vec![DatedValue::new(date(2026, 1, 2), 5.0)]);
    let report = ProgressReport::compute(&inputs(&plan, &actual))?;

    let rows = report.aligned();
    assert_eq!(rows.len(), 32);
    let last = rows[31];
    assert_eq!(last.date, date(2026, 1, 2));
    assert_eq!(last.planned, None);
    assert_eq!(last.actual, Some(2721.0));

    Ok(())
}
