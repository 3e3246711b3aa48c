//! `TermStructure` — base trait for all term structures.
//!
//! Every term structure has a **reference date** and a **day counter**; times
//! are measured in years from the reference date.

use lg_core::Time;
use lg_time::{Date, DayCounter};
use std::sync::Arc;

/// Base trait for all term structures.
pub trait TermStructure: std::fmt::Debug + Send + Sync {
    /// The date from which time is measured.
    fn reference_date(&self) -> Date;

    /// The day counter used for date → time conversions.
    fn day_counter(&self) -> &dyn DayCounter;

    /// Convert a date to a year fraction relative to the reference date.
    fn time_from_reference(&self, date: Date) -> Time {
        self.day_counter().year_fraction(self.reference_date(), date)
    }
}

/// Reference date and day counter shared by the concrete term structures.
#[derive(Debug, Clone)]
pub struct TermStructureData {
    /// Reference date.
    pub reference_date: Date,
    /// Day counter for time calculations.
    pub day_counter: Arc<dyn DayCounter>,
}

impl TermStructureData {
    /// Create a new data bundle.
    pub fn new(reference_date: Date, day_counter: impl DayCounter + 'static) -> Self {
        Self {
            reference_date,
            day_counter: Arc::new(day_counter),
        }
    }
}
