// src/output/mod.rs

//! Presentation side: exports a computed report as CSV tables and prints a
//! plain-text summary. Nothing here changes the report.

pub mod export;
pub mod summary;

pub use export::{CUMULATIVE_CSV, DAILY_PLAN_CSV, REMAINING_CSV, VARIANCE_CSV, write_report};
pub use summary::{print_summary, render_summary};
