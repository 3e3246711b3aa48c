//! `Date` type.
//!
//! A thin value type over [`chrono::NaiveDate`]. Construction is fallible and
//! reports invalid components as [`Error::Date`] instead of panicking.

use chrono::{Datelike, Days, NaiveDate};
use lg_core::errors::{Error, Result};
use std::fmt;
use std::ops::Sub;

/// A calendar date without time-of-day or time zone.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{year}-{month:02}-{day:02} is not a valid date")))
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1–12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month, 1–31.
    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }

    /// Actual number of days from `self` to `other` (negative if `other` is
    /// earlier).
    pub fn days_until(&self, other: Date) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// The date `n` calendar days later (or earlier for negative `n`).
    pub fn add_days(&self, n: i64) -> Result<Date> {
        let shifted = if n >= 0 {
            self.0.checked_add_days(Days::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(n.unsigned_abs()))
        };
        shifted
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} shifted by {n} days is out of range")))
    }

    /// The underlying chrono value.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Actual days between two dates: `d2 - d1`.
    fn sub(self, rhs: Date) -> i64 {
        rhs.days_until(self)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({self})")
    }
}

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
