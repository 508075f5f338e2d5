// src/engine/remaining.rs

use crate::series::{CumulativeSeries, DatedValue, Series};

/// Distance still to go on each planned date: `goal - total`.
///
/// Negative values mean the plan overshoots the goal by that date.
pub fn remaining(planned_cum: &CumulativeSeries, goal: f64) -> Series {
    planned_cum
        .iter()
        .map(|p| DatedValue::new(p.date, goal - p.total))
        .collect()
}
