//! Calendar-day keys and day arithmetic.
//!
//! All streak and eligibility math works on whole calendar days, never on
//! wall-clock durations. A [`DateKey`] is the canonical `YYYY-MM-DD` form of
//! a local calendar date; differences between two keys are counted in
//! calendar days, so DST transitions cannot shift the result.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar day in canonical `YYYY-MM-DD` form.
///
/// Time-zone-naive: the key is whatever the local calendar said the day was
/// when it was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's local calendar date.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Signed number of whole days from `self` to `other` (`other - self`).
    pub fn day_diff(&self, other: DateKey) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// The key `n` days after (or before, for negative `n`) this one.
    pub fn add_days(&self, n: i64) -> DateKey {
        let shifted = if n >= 0 {
            self.0 + Days::new(n as u64)
        } else {
            self.0 - Days::new(n.unsigned_abs())
        };
        Self(shifted)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
