// src/series/dated.rs

use chrono::NaiveDate;
use serde::Serialize;

/// One plan entry or logged observation: a daily increment on a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: f64,
}

impl DatedValue {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Ordered sequence of dated values.
///
/// Construction does not enforce ordering; the operations that depend on it
/// (accumulation, alignment) verify it and fail instead of guessing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<DatedValue>,
}

impl Series {
    pub fn new(points: Vec<DatedValue>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[DatedValue] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DatedValue> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&DatedValue> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&DatedValue> {
        self.points.last()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }

    /// Value recorded for `date`, if any. Assumes date order.
    pub fn value_at(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by(|p| p.date.cmp(&date))
            .ok()
            .map(|idx| self.points[idx].value)
    }

    pub fn into_inner(self) -> Vec<DatedValue> {
        self.points
    }
}

impl FromIterator<DatedValue> for Series {
    fn from_iter<I: IntoIterator<Item = DatedValue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DatedValue;
    type IntoIter = std::slice::Iter<'a, DatedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Running total on a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub total: f64,
}

/// Prefix sums of a [`Series`], seeded by a start total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CumulativeSeries {
    points: Vec<CumulativePoint>,
}

impl CumulativeSeries {
    pub fn new(points: Vec<CumulativePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[CumulativePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CumulativePoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&CumulativePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&CumulativePoint> {
        self.points.last()
    }

    pub fn totals(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.total)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }

    /// Running total on `date`, if the series has an entry for it.
    pub fn total_at(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by(|p| p.date.cmp(&date))
            .ok()
            .map(|idx| self.points[idx].total)
    }
}

impl<'a> IntoIterator for &'a CumulativeSeries {
    type Item = &'a CumulativePoint;
    type IntoIter = std::slice::Iter<'a, CumulativePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
