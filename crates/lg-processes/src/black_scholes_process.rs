//! Generalized Black-Scholes process.
//!
//! `dS/S = (r(t) − q(t)) dt + σ(t, S) dW`
//!
//! where `r` is the risk-free rate, `q` the continuous dividend (or foreign)
//! yield and `σ` a Black volatility surface. The process only stores the
//! market data; [`MarketSnapshot::from_process`](crate::MarketSnapshot::from_process)
//! reads it at a given maturity.

use lg_core::Real;
use lg_termstructures::{BlackVolTermStructure, FlatForward, YieldTermStructure};
use lg_time::Actual365Fixed;
use std::sync::Arc;

/// A generalized Black-Scholes stochastic process.
///
/// The curves are shared through `Arc` so that many engines (possibly on
/// different threads) can price off the same market data.
#[derive(Debug, Clone)]
pub struct GeneralizedBlackScholesProcess {
    x0: Real,
    risk_free_rate: Arc<dyn YieldTermStructure>,
    dividend_yield: Arc<dyn YieldTermStructure>,
    black_vol: Arc<dyn BlackVolTermStructure>,
}

impl GeneralizedBlackScholesProcess {
    /// Create a new process.
    pub fn new(
        x0: Real,
        risk_free_rate: Arc<dyn YieldTermStructure>,
        dividend_yield: Arc<dyn YieldTermStructure>,
        black_vol: Arc<dyn BlackVolTermStructure>,
    ) -> Self {
        Self {
            x0,
            risk_free_rate,
            dividend_yield,
            black_vol,
        }
    }

    /// The spot price.
    pub fn spot(&self) -> Real {
        self.x0
    }

    /// The risk-free rate term structure.
    pub fn risk_free_rate(&self) -> &dyn YieldTermStructure {
        &*self.risk_free_rate
    }

    /// The dividend yield term structure.
    pub fn dividend_yield(&self) -> &dyn YieldTermStructure {
        &*self.dividend_yield
    }

    /// The Black volatility surface.
    pub fn black_volatility(&self) -> &dyn BlackVolTermStructure {
        &*self.black_vol
    }
}

/// A Black-Scholes process with no dividends (`q = 0`).
pub fn black_scholes_process(
    x0: Real,
    risk_free_rate: Arc<dyn YieldTermStructure>,
    black_vol: Arc<dyn BlackVolTermStructure>,
) -> GeneralizedBlackScholesProcess {
    let ref_date = risk_free_rate.reference_date();
    let zero_yield: Arc<dyn YieldTermStructure> =
        Arc::new(FlatForward::continuous(ref_date, 0.0, Actual365Fixed));

    GeneralizedBlackScholesProcess::new(x0, risk_free_rate, zero_yield, black_vol)
}
