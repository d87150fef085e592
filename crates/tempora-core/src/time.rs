//! Timestamps and query windows

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Occurrence time of an edge
///
/// A totally ordered `f64`. NaN is rejected at construction and `-0.0` is
/// folded into `0.0`, so equality, ordering and hashing all agree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Timestamp(f64);

impl Timestamp {
    /// Create a timestamp, failing on NaN
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(Error::InvalidTimestamp(value));
        }
        Ok(Self(value + 0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Time elapsed between `earlier` and `self`
    pub fn delay_since(self, earlier: Timestamp) -> f64 {
        self.0 - earlier.0
    }

    /// Convert a query bound. NaN bounds match nothing and come back as `None`.
    pub(crate) fn bound(value: f64) -> Option<Self> {
        Self::new(value).ok()
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Timestamp {}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl TryFrom<f64> for Timestamp {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<i32> for Timestamp {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Timestamp> for f64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Time range a query is evaluated over
///
/// `Until(t)` is an instant query over `(-inf, t]`; `Between(s, e)` is the
/// closed window `[s, e]`; `All` is the whole history.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    All,
    Until(f64),
    Between(f64, f64),
}

impl TimeWindow {
    /// Instant query: every edge up to and including `t`
    pub fn at(t: f64) -> Self {
        Self::Until(t)
    }

    /// Window query over the closed interval `[start, end]`
    pub fn between(start: f64, end: f64) -> Self {
        Self::Between(start, end)
    }

    pub fn all() -> Self {
        Self::All
    }

    /// Lower and upper bound, `None` meaning unbounded
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match *self {
            Self::All => (None, None),
            Self::Until(end) => (None, Some(end)),
            Self::Between(start, end) => (Some(start), Some(end)),
        }
    }

    /// Whether a timestamp falls inside the window
    pub fn contains(&self, t: Timestamp) -> bool {
        let (start, end) = self.bounds();
        let t = t.value();
        start.map_or(true, |s| t >= s) && end.map_or(true, |e| t <= e)
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all time"),
            Self::Until(end) => write!(f, "t <= {}", end),
            Self::Between(start, end) => write!(f, "{} <= t <= {}", start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_rejects_nan() {
        assert!(matches!(
            Timestamp::new(f64::NAN),
            Err(Error::InvalidTimestamp(_))
        ));
        assert!(Timestamp::new(f64::INFINITY).is_ok());
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let neg = Timestamp::new(-0.0).unwrap();
        let pos = Timestamp::new(0.0).unwrap();
        assert_eq!(neg, pos);
        assert_eq!(neg.value().to_bits(), pos.value().to_bits());
    }

    #[test]
    fn test_timestamp_ordering() {
        let mut times: Vec<Timestamp> = [3.5, -1.0, 2.0, 2.0]
            .iter()
            .map(|t| Timestamp::new(*t).unwrap())
            .collect();
        times.sort();
        let values: Vec<f64> = times.iter().map(|t| t.value()).collect();
        assert_eq!(values, vec![-1.0, 2.0, 2.0, 3.5]);
    }

    #[test]
    fn test_window_contains() {
        let t = Timestamp::from(5);
        assert!(TimeWindow::all().contains(t));
        assert!(TimeWindow::at(5.0).contains(t));
        assert!(!TimeWindow::at(4.9).contains(t));
        assert!(TimeWindow::between(5.0, 5.0).contains(t));
        assert!(!TimeWindow::between(6.0, 9.0).contains(t));
        assert!(!TimeWindow::at(f64::NAN).contains(t));
    }

    #[test]
    fn test_timestamp_serde() {
        let t: Timestamp = serde_json::from_str("12.5").unwrap();
        assert_eq!(t.value(), 12.5);
        assert_eq!(serde_json::to_string(&t).unwrap(), "12.5");
    }
}
