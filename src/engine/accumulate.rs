// src/engine/accumulate.rs

use tracing::trace;

use crate::errors::EngineError;
use crate::series::{CumulativePoint, CumulativeSeries, Series, ensure_strictly_increasing};

/// Prefix-sum `series` onto `start`.
///
/// `total[i] = start + value[0] + ... + value[i]`. The series must already be
/// sorted by strictly increasing date; it is checked, never re-sorted, since a
/// running total depends on order. An empty series yields an empty result.
pub fn accumulate(series: &Series, start: f64) -> Result<CumulativeSeries, EngineError> {
    ensure_strictly_increasing(series.dates())?;

    let mut total = start;
    let points = series
        .iter()
        .map(|p| {
            total += p.value;
            CumulativePoint {
                date: p.date,
                total,
            }
        })
        .collect::<Vec<_>>();

    trace!(entries = points.len(), start, end = total, "accumulated series");
    Ok(CumulativeSeries::new(points))
}
