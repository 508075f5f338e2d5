mod common;
use crate::common::{TestResult, init_tracing};

use pacetrack::engine::accumulate;
use pacetrack::errors::EngineError;
use pacetrack::series::{DatedValue, Series};
use pacetrack_test_utils::fixtures::{daily_series, dec, december_plan};

#[test]
fn totals_are_start_plus_running_sum() -> TestResult {
    init_tracing();

    let series = daily_series(dec(1), &[5.0, 0.0, 12.5, 7.5]);
    let cum = accumulate(&series, 100.0)?;

    let totals: Vec<f64> = cum.totals().collect();
    assert_eq!(totals, vec![105.0, 105.0, 117.5, 125.0]);

    let dates: Vec<_> = cum.dates().collect();
    let expected: Vec<_> = series.dates().collect();
    assert_eq!(dates, expected);

    Ok(())
}

#[test]
fn empty_series_accumulates_to_empty() -> TestResult {
    init_tracing();

    let cum = accumulate(&Series::default(), 2716.0)?;
    assert!(cum.is_empty());

    Ok(())
}

#[test]
fn december_plan_ends_at_3036() -> TestResult {
    init_tracing();

    let cum = accumulate(&december_plan(), 2716.0)?;
    assert_eq!(cum.len(), 31);
    assert_eq!(cum.first().map(|p| p.total), Some(2716.0));
    assert_eq!(cum.last().map(|p| (p.date, p.total)), Some((dec(31), 3036.0)));

    Ok(())
}

#[test]
fn unsorted_series_is_rejected() {
    init_tracing();

    let series = Series::new(vec![
        DatedValue::new(dec(1), 10.0),
        DatedValue::new(dec(3), 20.0),
        DatedValue::new(dec(2), 30.0),
    ]);

    match accumulate(&series, 0.0) {
        Err(EngineError::UnsortedInput { previous, found }) => {
            assert_eq!(previous, dec(3));
            assert_eq!(found, dec(2));
        }
        other => panic!("Expected UnsortedInput, got: {:?}", other),
    }
}

#[test]
fn reordering_changes_per_position_totals() -> TestResult {
    init_tracing();

    // Same values in a different order, both correctly dated: the running
    // totals differ per position even though the final total matches.
    let a = daily_series(dec(1), &[10.0, 20.0, 30.0]);
    let b = daily_series(dec(1), &[30.0, 20.0, 10.0]);

    let ta: Vec<f64> = accumulate(&a, 0.0)?.totals().collect();
    let tb: Vec<f64> = accumulate(&b, 0.0)?.totals().collect();

    assert_ne!(ta, tb);
    assert_eq!(ta.last(), tb.last());

    Ok(())
}

#[test]
fn duplicate_dates_are_rejected_not_summed() {
    init_tracing();

    let series = Series::new(vec![
        DatedValue::new(dec(1), 10.0),
        DatedValue::new(dec(1), 5.0),
    ]);

    assert_eq!(
        accumulate(&series, 0.0),
        Err(EngineError::DuplicateDate { date: dec(1) })
    );
}
