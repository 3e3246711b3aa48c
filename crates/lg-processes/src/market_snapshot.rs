//! Constant-coefficient market snapshot.
//!
//! Lattice engines need one rate, one dividend yield and one volatility over
//! the whole life of the option. [`MarketSnapshot::from_process`] reads them
//! from possibly term-structured market data at the option's maturity; any
//! shape of the curves between today and maturity is discarded.

use crate::black_scholes_process::GeneralizedBlackScholesProcess;
use lg_core::{ensure, errors::Result, Rate, Real, Time, Volatility};
use lg_time::{Date, DayCounter};

/// Immutable scalar market inputs for one pricing call.
///
/// Invariants (checked at construction): spot > 0, volatility ≥ 0, time to
/// maturity > 0, every field finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    spot: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
    valuation_date: Date,
    maturity_date: Date,
    maturity: Time,
}

impl MarketSnapshot {
    /// Snapshot from flat scalars; the time to maturity is
    /// `day_counter.year_fraction(valuation_date, maturity_date)`.
    pub fn new(
        spot: Real,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        volatility: Volatility,
        valuation_date: Date,
        maturity_date: Date,
        day_counter: &dyn DayCounter,
    ) -> Result<Self> {
        let maturity = day_counter.year_fraction(valuation_date, maturity_date);
        Self::build(
            spot,
            risk_free_rate,
            dividend_yield,
            volatility,
            valuation_date,
            maturity_date,
            maturity,
        )
    }

    /// Flatten a Black-Scholes process at `maturity_date`.
    ///
    /// * rate and dividend yield: continuously-compounded zero rates to
    ///   `maturity_date`, each under its own curve's day counter;
    /// * volatility: Black vol at (`maturity_date`, `strike`);
    /// * valuation date and time to maturity: the risk-free curve's
    ///   reference date and day counter.
    pub fn from_process(
        process: &GeneralizedBlackScholesProcess,
        maturity_date: Date,
        strike: Real,
    ) -> Result<Self> {
        let spot = process.spot();
        ensure!(
            spot > 0.0 && spot.is_finite(),
            Domain,
            "non-positive underlying given: {spot}"
        );

        let rf = process.risk_free_rate();
        let valuation_date = rf.reference_date();
        let maturity = rf.day_counter().year_fraction(valuation_date, maturity_date);
        ensure!(
            maturity > 0.0,
            Domain,
            "maturity {maturity_date} is not after the valuation date {valuation_date}"
        );

        let r = rf.zero_rate(maturity_date);
        let q = process.dividend_yield().zero_rate(maturity_date);
        let v = process.black_volatility().black_vol(maturity_date, strike);

        Self::build(spot, r, q, v, valuation_date, maturity_date, maturity)
    }

    fn build(
        spot: Real,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        volatility: Volatility,
        valuation_date: Date,
        maturity_date: Date,
        maturity: Time,
    ) -> Result<Self> {
        ensure!(
            spot > 0.0 && spot.is_finite(),
            Domain,
            "non-positive underlying given: {spot}"
        );
        ensure!(
            volatility >= 0.0 && volatility.is_finite(),
            Domain,
            "negative or non-finite volatility given: {volatility}"
        );
        ensure!(
            risk_free_rate.is_finite() && dividend_yield.is_finite(),
            Domain,
            "non-finite rates given: r = {risk_free_rate}, q = {dividend_yield}"
        );
        ensure!(
            maturity > 0.0 && maturity.is_finite(),
            Domain,
            "maturity {maturity_date} is not after the valuation date {valuation_date}"
        );
        Ok(Self {
            spot,
            risk_free_rate,
            dividend_yield,
            volatility,
            valuation_date,
            maturity_date,
            maturity,
        })
    }

    /// Spot price of the underlying.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Flat continuously-compounded risk-free rate.
    pub fn risk_free_rate(&self) -> Rate {
        self.risk_free_rate
    }

    /// Flat continuously-compounded dividend (or foreign) yield.
    pub fn dividend_yield(&self) -> Rate {
        self.dividend_yield
    }

    /// Flat annualised volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Valuation date.
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Maturity date.
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Time to maturity in years.
    pub fn time_to_maturity(&self) -> Time {
        self.maturity
    }

    /// Risk-neutral drift of the underlying, `r − q`.
    pub fn carry(&self) -> Rate {
        self.risk_free_rate - self.dividend_yield
    }
}
