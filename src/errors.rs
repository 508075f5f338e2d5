// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Engine failures live in [`EngineError`] and never carry I/O details;
//! adapters and config loading wrap them in [`PacetrackError`].

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Failures raised by the pure progress computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("series is not sorted by date: {found} follows {previous}")]
    UnsortedInput {
        previous: NaiveDate,
        found: NaiveDate,
    },

    #[error("series contains more than one entry for {date}")]
    DuplicateDate { date: NaiveDate },

    #[error("date range {first}..{last} must span at least one day")]
    DegenerateRange { first: NaiveDate, last: NaiveDate },

    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("negative increment {value} on {date}")]
    NegativeIncrement { date: NaiveDate, value: f64 },

    #[error("non-finite value {value} (date: {date:?})")]
    NonFiniteValue {
        date: Option<NaiveDate>,
        value: f64,
    },
}

#[derive(Error, Debug)]
pub enum PacetrackError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("{}: row {row}: {message}", .path.display())]
    InvalidRecord {
        path: PathBuf,
        row: u64,
        message: String,
    },

    #[error("Computation error: {0}")]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PacetrackError>;
