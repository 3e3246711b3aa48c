//! # lg-time
//!
//! Calendar dates and day-count conventions.
//!
//! Market data is quoted against dates, while the lattice works in year
//! fractions. A [`DayCounter`] is the bridge: it turns a pair of dates into
//! the time (in years) between them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{is_leap_year, Date};
pub use day_counter::{Actual360, Actual365Fixed, ActualActualIsda, DayCounter, Thirty360};
