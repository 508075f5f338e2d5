// src/config/mod.rs

//! Configuration loading and validation for pacetrack.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Turn the raw model into a validated `ConfigFile` (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_with_fs};
pub use model::{
    ConfigFile, CsvTable, OutputSection, PlanConfig, PolicySection, RawConfigFile, RawPlanEntry,
    RawPlanSection, TrackingSection,
};
