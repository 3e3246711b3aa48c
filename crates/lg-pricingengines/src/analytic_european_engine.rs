//! Analytic European option engine (Black-Scholes-Merton).
//!
//! Closed-form value, delta, gamma and theta of European vanilla options.
//! The binomial engine is tested against it.

use lg_core::{ensure, errors::Result, Error, Real};
use lg_instruments::{OptionResults, OptionType, Payoff, PricingEngine, VanillaOptionArguments};
use lg_processes::{GeneralizedBlackScholesProcess, MarketSnapshot};
use statrs::function::erf::erfc;
use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::sync::Arc;

/// Analytic pricing engine for European vanilla options.
///
/// Implements the Black-Scholes-Merton closed-form solution:
///
/// $$C = S e^{-qT} N(d_1) - K e^{-rT} N(d_2)$$
/// $$P = K e^{-rT} N(-d_2) - S e^{-qT} N(-d_1)$$
///
/// where $d_{1,2} = \frac{\ln(S/K) + (r - q \pm \sigma^2/2)T}{\sigma\sqrt{T}}$
#[derive(Debug)]
pub struct AnalyticEuropeanEngine {
    process: Arc<GeneralizedBlackScholesProcess>,
}

impl AnalyticEuropeanEngine {
    /// Create a new engine with the given Black-Scholes process.
    pub fn new(process: Arc<GeneralizedBlackScholesProcess>) -> Self {
        Self { process }
    }
}

fn normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Compute Black-Scholes price and Greeks for a European option.
///
/// Returns `(price, delta, gamma, theta)`, theta per year.
pub fn black_scholes_merton(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    risk_free_rate: Real,
    dividend_yield: Real,
    volatility: Real,
    time_to_expiry: Real,
) -> (Real, Real, Real, Real) {
    let phi = option_type.sign();
    let t = time_to_expiry;

    if t <= 0.0 {
        let intrinsic = (phi * (spot - strike)).max(0.0);
        return (intrinsic, 0.0, 0.0, 0.0);
    }

    let r = risk_free_rate;
    let q = dividend_yield;
    let sigma = volatility;
    let sqrt_t = t.sqrt();
    let std_dev = sigma * sqrt_t;
    let df_r = (-r * t).exp();
    let df_q = (-q * t).exp();
    let fwd = spot * ((r - q) * t).exp();

    let (d1, d2) = if std_dev > 1e-15 {
        let d1 = ((spot / strike).ln() + (r - q + 0.5 * sigma * sigma) * t) / std_dev;
        (d1, d1 - std_dev)
    } else {
        let big = if fwd > strike { 1e15 } else { -1e15 };
        (big, big)
    };

    let nd1 = normal_cdf(phi * d1);
    let nd2 = normal_cdf(phi * d2);
    let npd1 = normal_pdf(d1);

    let price = phi * (spot * df_q * nd1 - strike * df_r * nd2);
    let delta = phi * df_q * nd1;
    let gamma = if std_dev > 1e-15 {
        df_q * npd1 / (spot * std_dev)
    } else {
        0.0
    };
    let theta = {
        let term1 = -(spot * df_q * npd1 * sigma) / (2.0 * sqrt_t);
        let term2 = -phi * r * strike * df_r * nd2;
        let term3 = phi * q * spot * df_q * nd1;
        term1 + term2 + term3
    };

    (price, delta, gamma, theta)
}

impl PricingEngine<VanillaOptionArguments> for AnalyticEuropeanEngine {
    fn calculate(&self, args: &VanillaOptionArguments) -> Result<OptionResults> {
        let payoff = args.payoff.as_plain_vanilla().ok_or_else(|| {
            Error::UnsupportedPayoff(format!("non-plain payoff given: {}", args.payoff.description()))
        })?;
        ensure!(
            !args.exercise.allows_early_exercise(),
            InvalidArgument,
            "not a European option: {}",
            args.exercise
        );

        let market =
            MarketSnapshot::from_process(&self.process, args.exercise.last_date(), payoff.strike())?;
        let (value, delta, gamma, theta) = black_scholes_merton(
            payoff.option_type(),
            market.spot(),
            payoff.strike(),
            market.risk_free_rate(),
            market.dividend_yield(),
            market.volatility(),
            market.time_to_maturity(),
        );

        Ok(OptionResults {
            value,
            delta,
            gamma,
            theta,
        })
    }
}
