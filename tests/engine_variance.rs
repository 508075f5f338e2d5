mod common;
use crate::common::{TestResult, assert_close, init_tracing};

use pacetrack::engine::{accumulate, align, build_target, compute_plan_variance, compute_variance};
use pacetrack::series::{CumulativePoint, CumulativeSeries, DatedValue, Series};
use pacetrack_test_utils::fixtures::{dec, december_plan};

fn cumulative(points: &[(u32, f64)]) -> CumulativeSeries {
    CumulativeSeries::new(
        points
            .iter()
            .map(|&(day, total)| CumulativePoint {
                date: dec(day),
                total,
            })
            .collect(),
    )
}

#[test]
fn sparse_actual_variance_against_target() -> TestResult {
    init_tracing();

    let actual = Series::new(vec![
        DatedValue::new(dec(1), 0.0),
        DatedValue::new(dec(3), 20.0),
    ]);
    let actual_cum = accumulate(&actual, 2716.0)?;
    assert_eq!(actual_cum, cumulative(&[(1, 2716.0), (3, 2736.0)]));

    let traj = build_target(dec(1), dec(31), 2716.0, 3000.0)?;
    let variance = compute_variance(&actual_cum, &traj);

    // Only observed dates produce entries.
    assert_eq!(variance.len(), 2);
    assert_eq!(variance.value_at(dec(1)), Some(0.0));
    assert_eq!(variance.value_at(dec(2)), None);

    let dec3 = variance.value_at(dec(3)).unwrap_or(f64::NAN);
    assert_close(dec3, 2736.0 - (2716.0 + 2.0 * 284.0 / 30.0));
    assert!((dec3 - 1.07).abs() < 0.01);

    Ok(())
}

#[test]
fn variance_sign_tracks_position_relative_to_target() -> TestResult {
    init_tracing();

    let traj = build_target(dec(1), dec(11), 0.0, 100.0)?;
    // Target is 10 per day: 50 on Dec 6.
    let actual_cum = cumulative(&[(6, 60.0), (7, 55.0), (11, 100.0)]);
    let variance = compute_variance(&actual_cum, &traj);

    let values: Vec<f64> = variance.iter().map(|v| v.value).collect();
    assert!(values[0] > 0.0, "ahead of target should be positive");
    assert!(values[1] < 0.0, "behind target should be negative");
    assert_eq!(values[2], 0.0, "on target at the endpoint is exactly zero");

    Ok(())
}

#[test]
fn variance_is_defined_off_plan_dates() -> TestResult {
    init_tracing();

    let traj = build_target(dec(1), dec(31), 2716.0, 3000.0)?;
    let before = cumulative(&[(1, 2716.0)]);
    let shifted = CumulativeSeries::new(vec![CumulativePoint {
        date: dec(1) - chrono::Days::new(2),
        total: 2716.0,
    }]);

    assert_eq!(compute_variance(&before, &traj).len(), 1);
    let v = compute_variance(&shifted, &traj);
    assert_close(v.points()[0].value, 2.0 * 284.0 / 30.0);

    Ok(())
}

#[test]
fn plan_variance_only_on_shared_dates() -> TestResult {
    init_tracing();

    let planned = accumulate(&december_plan(), 2716.0)?;
    let actual_cum = cumulative(&[(2, 2720.0), (4, 2750.0), (6, 2760.0)]);

    let pv = compute_plan_variance(&actual_cum, &planned);
    // Plan cumulative: Dec2 2726, Dec4 2746, Dec6 2756.
    let expected = Series::new(vec![
        DatedValue::new(dec(2), -6.0),
        DatedValue::new(dec(4), 4.0),
        DatedValue::new(dec(6), 4.0),
    ]);
    assert_eq!(pv, expected);

    Ok(())
}

#[test]
fn plan_variance_skips_dates_outside_plan() {
    init_tracing();

    let planned = cumulative(&[(2, 10.0), (3, 20.0)]);
    let actual_cum = cumulative(&[(1, 5.0), (3, 25.0), (5, 40.0)]);

    let pv = compute_plan_variance(&actual_cum, &planned);
    assert_eq!(pv, Series::new(vec![DatedValue::new(dec(3), 5.0)]));
}

#[test]
fn align_outer_joins_without_imputing() {
    init_tracing();

    let planned = cumulative(&[(1, 10.0), (2, 20.0), (3, 30.0)]);
    let target = cumulative(&[(1, 10.0), (2, 15.0), (3, 20.0)]);
    let actual = cumulative(&[(2, 12.0), (4, 40.0)]);

    let rows = align(&planned, &target, &actual);
    let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![dec(1), dec(2), dec(3), dec(4)]);

    assert_eq!(rows[0].actual, None);
    assert_eq!(rows[1].actual, Some(12.0));
    assert_eq!(rows[1].planned, Some(20.0));
    assert_eq!(rows[3].planned, None);
    assert_eq!(rows[3].target, None);
    assert_eq!(rows[3].actual, Some(40.0));
}
