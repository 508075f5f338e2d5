// src/series/mod.rs

//! Dated series and the checks every consumer relies on.
//!
//! - [`dated`] holds the plain data types (`DatedValue`, `Series`,
//!   `CumulativeSeries`).
//! - [`order`] verifies the strictly-increasing-date invariant.
//! - [`prepare`] is the pre-step for sparse actual logs (sorting and the
//!   duplicate policy) plus increment sanity checks.

pub mod dated;
pub mod order;
pub mod prepare;

pub use dated::{CumulativePoint, CumulativeSeries, DatedValue, Series};
pub use order::ensure_strictly_increasing;
pub use prepare::{check_increments, prepare_actual};
