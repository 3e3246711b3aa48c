//! `DayCounter` trait and built-in day-count conventions.
//!
//! A day counter computes the **day count fraction**, the fraction of a year
//! between two dates. The pricing engine uses it to turn the valuation and
//! exercise dates into the lattice's time to maturity.

use crate::date::{is_leap_year, Date};
use lg_core::{Real, Time};

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/365 (Fixed)"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        d1.days_until(d2)
    }

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

/// Actual/365 (Fixed) day counter.
///
/// `year_fraction = actual_days / 365`
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// Actual/360 day counter.
///
/// `year_fraction = actual_days / 360`
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &str {
        "Actual/360"
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Thirty/360 day counter (US bond basis).
///
/// `year_fraction = [360(Y2−Y1) + 30(M2−M1) + (D2−D1)] / 360`
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360;

impl DayCounter for Thirty360 {
    fn name(&self) -> &str {
        "30/360"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        let (y1, m1) = (d1.year() as i64, d1.month() as i64);
        let (y2, m2) = (d2.year() as i64, d2.month() as i64);
        let mut dd1 = d1.day_of_month() as i64;
        let mut dd2 = d2.day_of_month() as i64;

        if dd1 == 31 {
            dd1 = 30;
        }
        if dd2 == 31 && dd1 == 30 {
            dd2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (dd2 - dd1)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Actual/Actual (ISDA) day counter.
///
/// The period is split at year boundaries; days falling in a leap year are
/// divided by 366, the others by 365.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActualActualIsda;

impl DayCounter for ActualActualIsda {
    fn name(&self) -> &str {
        "Actual/Actual (ISDA)"
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        if d1 == d2 {
            return 0.0;
        }
        if d1 > d2 {
            return -self.year_fraction(d2, d1);
        }
        let basis = |y: i32| if is_leap_year(y) { 366.0 } else { 365.0 };
        let (y1, y2) = (d1.year(), d2.year());

        // Both bounds are valid January 1st dates, so construction cannot fail
        // for any year chrono can represent.
        let jan1 = |y: i32| Date::from_ymd(y, 1, 1).ok();
        match (jan1(y1 + 1), jan1(y2)) {
            (Some(next), Some(last)) if y1 != y2 => {
                let head = d1.days_until(next) as Real / basis(y1);
                let tail = last.days_until(d2) as Real / basis(y2);
                head + (y2 - y1 - 1) as Real + tail
            }
            _ => d1.days_until(d2) as Real / basis(y1),
        }
    }
}
