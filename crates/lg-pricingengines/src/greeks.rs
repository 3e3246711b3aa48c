//! Greeks shared by several engines.

use lg_core::Real;
use lg_processes::MarketSnapshot;

/// Theta implied by the Black-Scholes PDE,
///
/// `Θ = r·V − (r − q)·S·Δ − ½·σ²·S²·Γ`
///
/// per year, from the flat rate, yield and volatility of `market` and its
/// spot price.
pub fn black_scholes_theta(market: &MarketSnapshot, value: Real, delta: Real, gamma: Real) -> Real {
    let s = market.spot();
    let r = market.risk_free_rate();
    let vol = market.volatility();
    r * value - market.carry() * s * delta - 0.5 * vol * vol * s * s * gamma
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytic_european_engine::black_scholes_merton;
    use approx::assert_abs_diff_eq;
    use lg_instruments::OptionType;
    use lg_time::{Actual365Fixed, Date};

    fn market(r: Real, q: Real, vol: Real) -> MarketSnapshot {
        let today = Date::from_ymd(2025, 1, 15).unwrap();
        let expiry = Date::from_ymd(2026, 1, 15).unwrap();
        MarketSnapshot::new(100.0, r, q, vol, today, expiry, &Actual365Fixed).unwrap()
    }

    #[test]
    fn matches_closed_form_theta() {
        for (ty, r, q, vol) in [
            (OptionType::Call, 0.05, 0.0, 0.20),
            (OptionType::Put, 0.05, 0.0, 0.20),
            (OptionType::Call, 0.03, 0.02, 0.35),
            (OptionType::Put, 0.08, 0.04, 0.15),
        ] {
            let m = market(r, q, vol);
            let (v, d, g, theta) = black_scholes_merton(ty, 100.0, 100.0, r, q, vol, 1.0);
            assert_abs_diff_eq!(black_scholes_theta(&m, v, d, g), theta, epsilon = 1e-10);
        }
    }

    #[test]
    fn zero_coupon_decays_at_the_rate() {
        // V = e^{-r(T-t)}: Δ = Γ = 0, so Θ = r·V.
        let m = market(0.05, 0.0, 0.20);
        assert_abs_diff_eq!(black_scholes_theta(&m, 2.0, 0.0, 0.0), 0.10, epsilon = 1e-15);
    }
}
