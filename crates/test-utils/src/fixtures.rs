//! Data shared by several test files.

use chrono::NaiveDate;
use pacetrack::series::{DatedValue, Series};

pub const DECEMBER_START_TOTAL: f64 = 2716.0;
pub const DECEMBER_GOAL: f64 = 3000.0;

/// Daily increments for 2025-12-01 ..= 2025-12-31 (sum 320).
pub const DECEMBER_INCREMENTS: [f64; 31] = [
    0.0, 10.0, 10.0, 10.0, 0.0, 10.0, 25.0, 0.0, 10.0, 10.0, 10.0, 0.0, 10.0, 25.0, 0.0, 10.0,
    10.0, 10.0, 0.0, 10.0, 40.0, 0.0, 10.0, 10.0, 10.0, 0.0, 10.0, 25.0, 0.0, 10.0, 10.0,
];

/// Shorthand for a calendar date; panics on invalid input.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// `Dec <day>, 2025`.
pub fn dec(day: u32) -> NaiveDate {
    date(2025, 12, day)
}

/// The 31-day December plan.
pub fn december_plan() -> Series {
    DECEMBER_INCREMENTS
        .iter()
        .enumerate()
        .map(|(i, v)| DatedValue::new(dec(i as u32 + 1), *v))
        .collect()
}

/// Consecutive daily entries starting at `start`.
pub fn daily_series(start: NaiveDate, values: &[f64]) -> Series {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| DatedValue::new(start + chrono::Days::new(i as u64), *v))
        .collect()
}

/// The December plan as CSV text with `date,km` columns.
pub fn december_plan_csv() -> String {
    let mut out = String::from("date,km\n");
    for p in december_plan().iter() {
        out.push_str(&format!("{},{}\n", p.date, p.value));
    }
    out
}
