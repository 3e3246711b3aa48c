//! `BlackVolTermStructure` — Black-volatility term structures.
//!
//! Provides the `BlackVolTermStructure` trait and the flat
//! `BlackConstantVol` surface.

use crate::term_structure::{TermStructure, TermStructureData};
use lg_core::{Real, Time, Volatility};
use lg_time::{Date, DayCounter};

/// A Black-volatility term structure.
///
/// Implementors must provide **exactly one** of:
/// * [`black_vol_impl`](BlackVolTermStructure::black_vol_impl) — σ(t, k)
/// * [`black_variance_impl`](BlackVolTermStructure::black_variance_impl) — σ²·t
///
/// The other is derived automatically.
pub trait BlackVolTermStructure: TermStructure {
    /// Black volatility for time `t` and strike `strike`.
    fn black_vol_impl(&self, t: Time, strike: Real) -> Volatility {
        if t <= 0.0 {
            return 0.0;
        }
        (self.black_variance_impl(t, strike) / t).sqrt()
    }

    /// Black variance `σ²·t` for time `t` and strike `strike`.
    fn black_variance_impl(&self, t: Time, strike: Real) -> Real {
        let vol = self.black_vol_impl(t, strike);
        vol * vol * t
    }

    /// Black volatility for a date and strike.
    fn black_vol(&self, date: Date, strike: Real) -> Volatility {
        self.black_vol_impl(self.time_from_reference(date), strike)
    }

    /// Black variance for a date and strike.
    fn black_variance(&self, date: Date, strike: Real) -> Real {
        self.black_variance_impl(self.time_from_reference(date), strike)
    }
}

// ── BlackConstantVol ──────────────────────────────────────────────────────────

/// A flat Black volatility surface: `σ(t, K) = σ` for every `t` and `K`.
#[derive(Debug, Clone)]
pub struct BlackConstantVol {
    data: TermStructureData,
    volatility: Volatility,
}

impl BlackConstantVol {
    /// Create a constant Black vol surface.
    pub fn new(reference_date: Date, volatility: Volatility, day_counter: impl DayCounter + 'static) -> Self {
        Self {
            data: TermStructureData::new(reference_date, day_counter),
            volatility,
        }
    }

    /// The constant volatility value.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }
}

impl TermStructure for BlackConstantVol {
    fn reference_date(&self) -> Date {
        self.data.reference_date
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.data.day_counter
    }
}

impl BlackVolTermStructure for BlackConstantVol {
    fn black_vol_impl(&self, _t: Time, _strike: Real) -> Volatility {
        self.volatility
    }

    fn black_variance_impl(&self, t: Time, _strike: Real) -> Real {
        self.volatility * self.volatility * t
    }
}
