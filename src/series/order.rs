// src/series/order.rs

use chrono::NaiveDate;

use crate::errors::EngineError;

/// Verify that `dates` is strictly increasing.
///
/// An equal neighbour is reported as [`EngineError::DuplicateDate`], a smaller
/// one as [`EngineError::UnsortedInput`].
pub fn ensure_strictly_increasing<I>(dates: I) -> Result<(), EngineError>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut previous: Option<NaiveDate> = None;
    for date in dates {
        if let Some(prev) = previous {
            if date == prev {
                return Err(EngineError::DuplicateDate { date });
            }
            if date < prev {
                return Err(EngineError::UnsortedInput {
                    previous: prev,
                    found: date,
                });
            }
        }
        previous = Some(date);
    }
    Ok(())
}
