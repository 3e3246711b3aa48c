//! `YieldTermStructure` — interest-rate and dividend-yield curves.
//!
//! Implementors provide **one** of [`discount_impl`] or [`zero_rate_impl`];
//! the other follows from `P(t) = exp(−z(t)·t)`. All rates are continuously
//! compounded.
//!
//! [`discount_impl`]: YieldTermStructure::discount_impl
//! [`zero_rate_impl`]: YieldTermStructure::zero_rate_impl

use crate::term_structure::TermStructure;
use lg_core::{DiscountFactor, Rate, Time};
use lg_time::Date;

/// A yield term structure.
pub trait YieldTermStructure: TermStructure {
    /// Discount factor for time `t`.
    ///
    /// Default: computed from `zero_rate_impl`.
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        if t == 0.0 {
            return 1.0;
        }
        (-self.zero_rate_impl(t) * t).exp()
    }

    /// Continuously-compounded zero rate for time `t`.
    ///
    /// Default: computed from `discount_impl`. At `t = 0` the limit is
    /// approximated over one day.
    fn zero_rate_impl(&self, t: Time) -> Rate {
        let t = if t == 0.0 { 1.0 / 365.0 } else { t };
        -self.discount_impl(t).ln() / t
    }

    /// Discount factor for a time.
    fn discount(&self, t: Time) -> DiscountFactor {
        self.discount_impl(t)
    }

    /// Discount factor for a date.
    fn discount_date(&self, date: Date) -> DiscountFactor {
        self.discount_impl(self.time_from_reference(date))
    }

    /// Continuously-compounded zero rate from the reference date to `date`,
    /// measured with this curve's own day counter.
    fn zero_rate(&self, date: Date) -> Rate {
        self.zero_rate_impl(self.time_from_reference(date))
    }
}
