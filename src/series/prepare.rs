// src/series/prepare.rs

//! Pre-step applied to actual logs before they reach the accumulator.
//!
//! Plans never go through [`prepare_actual`]: a plan is authored in order,
//! so a disordered plan is a defect that accumulation reports.

use tracing::debug;

use crate::errors::EngineError;
use crate::series::dated::{DatedValue, Series};
use crate::types::{DuplicatePolicy, NegativeIncrementPolicy};

/// Sort observations by date and resolve same-day entries per `duplicates`.
///
/// Each raw observation is checked against `negatives` before any merge, so
/// a negative row sharing its date with a larger one is still seen.
///
/// The sort is stable, so under [`DuplicatePolicy::Sum`] the merged value is
/// summed in the order the observations were logged.
pub fn prepare_actual(
    mut points: Vec<DatedValue>,
    duplicates: DuplicatePolicy,
    negatives: NegativeIncrementPolicy,
) -> Result<Series, EngineError> {
    check_increments(&points, negatives)?;
    points.sort_by_key(|p| p.date);

    let mut merged: Vec<DatedValue> = Vec::with_capacity(points.len());
    for point in points {
        if let Some(last) = merged.last_mut() {
            if last.date == point.date {
                match duplicates {
                    DuplicatePolicy::Sum => {
                        debug!(
                            date = %point.date,
                            existing = last.value,
                            added = point.value,
                            "merging same-day observations"
                        );
                        last.value += point.value;
                        continue;
                    }
                    DuplicatePolicy::Reject => {
                        return Err(EngineError::DuplicateDate { date: point.date });
                    }
                }
            }
        }
        merged.push(point);
    }

    Ok(Series::new(merged))
}

/// Check every increment is finite and, under
/// [`NegativeIncrementPolicy::Reject`], non-negative.
pub fn check_increments<'a, I>(
    points: I,
    policy: NegativeIncrementPolicy,
) -> Result<(), EngineError>
where
    I: IntoIterator<Item = &'a DatedValue>,
{
    for point in points {
        if !point.value.is_finite() {
            return Err(EngineError::NonFiniteValue {
                date: Some(point.date),
                value: point.value,
            });
        }
        if point.value < 0.0 && policy == NegativeIncrementPolicy::Reject {
            return Err(EngineError::NegativeIncrement {
                date: point.date,
                value: point.value,
            });
        }
    }
    Ok(())
}
