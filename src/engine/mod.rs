// src/engine/mod.rs

//! Progress computation engine.
//!
//! Every function here is a pure transformation of borrowed inputs into
//! newly allocated series:
//! - [`accumulate`] turns daily increments into running totals.
//! - [`target`] builds the straight-line trajectory from start to goal.
//! - [`variance`] aligns actual totals against the trajectory and the plan.
//! - [`remaining`] computes goal minus planned total.
//! - [`report`] runs all of the above for one plan/actual pair.
//!
//! Nothing in this module performs I/O.

pub mod accumulate;
pub mod remaining;
pub mod report;
pub mod target;
pub mod variance;

pub use accumulate::accumulate;
pub use remaining::remaining;
pub use report::{ProgressInputs, ProgressReport, ProgressSummary};
pub use target::{TargetTrajectory, build_target};
pub use variance::{AlignedRow, align, compute_plan_variance, compute_variance};
