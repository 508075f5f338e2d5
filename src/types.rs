use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// What to do when the actual log holds more than one entry for a day.
///
/// - `Sum`: merge same-day observations by adding their increments
///   (default; e.g. two runs logged on one day).
/// - `Reject`: refuse the input with a `DuplicateDate` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    Sum,
    Reject,
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        DuplicatePolicy::Sum
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sum" => Ok(DuplicatePolicy::Sum),
            "reject" => Ok(DuplicatePolicy::Reject),
            other => Err(format!(
                "invalid duplicate_dates: {other} (expected \"sum\" or \"reject\")"
            )),
        }
    }
}

/// Treatment of negative daily increments (e.g. a correction entry).
///
/// With `Allow` the series are still computed, but running totals and the
/// remaining-to-goal series are no longer guaranteed to be monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeIncrementPolicy {
    Allow,
    Reject,
}

impl Default for NegativeIncrementPolicy {
    fn default() -> Self {
        NegativeIncrementPolicy::Allow
    }
}

impl FromStr for NegativeIncrementPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allow" => Ok(NegativeIncrementPolicy::Allow),
            "reject" => Ok(NegativeIncrementPolicy::Reject),
            other => Err(format!(
                "invalid negative_increments: {other} (expected \"allow\" or \"reject\")"
            )),
        }
    }
}
