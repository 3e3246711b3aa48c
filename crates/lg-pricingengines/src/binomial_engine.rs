//! Binomial-lattice engine for vanilla options.
//!
//! One backward induction produces value, delta and gamma. The tree is
//! grown two steps before the valuation date, from a root chosen so that the
//! middle of its three nodes at t = 0 is the spot. Rolling back to t = 0
//! leaves the values on `(s_d, s_m = S, s_u)`, which give
//!
//! * `value = p_m`
//! * `delta = (p_u − p_d) / (s_u − s_d)`
//! * `gamma = (Δ_u − Δ_d) / ((s_u − s_d) / 2)` with the one-sided deltas
//!   `Δ_u = (p_u − p_m) / (s_u − s_m)` and `Δ_d = (p_d − p_m) / (s_d − s_m)`
//!
//! and theta follows from the Black-Scholes PDE (see
//! [`black_scholes_theta`](crate::greeks::black_scholes_theta)).
//!
//! The `N` steps between valuation and maturity keep `Δt = T / N`; the two
//! extra steps only add the nodes the stencil needs.

use crate::greeks::black_scholes_theta;
use lg_core::{ensure, ensure_post, errors::Result, Error, Real, Size, Time};
use lg_instruments::{OptionResults, Payoff, PricingEngine, VanillaOptionArguments};
use lg_methods::{
    BinomialTree, BlackScholesLattice, DiscretizedAsset, DiscretizedVanillaOption, Lattice,
    TimeGrid, TreeKind,
};
use lg_processes::{GeneralizedBlackScholesProcess, MarketSnapshot};
use std::sync::Arc;
use tracing::{debug, debug_span, trace, warn};

/// Steps grown before valuation; the stencil layer is the tree's time step
/// `LEAD_STEPS`, at t = 0.
const LEAD_STEPS: Size = 2;

/// Fewest steps between valuation and maturity.
const MIN_TIME_STEPS: Size = 2;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Settings of a [`BinomialVanillaEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BinomialEngineConfig {
    /// Number of time steps between valuation and maturity; at least 2.
    pub time_steps: Size,
    /// Discretization scheme.
    pub tree: TreeKind,
}

impl Default for BinomialEngineConfig {
    fn default() -> Self {
        Self {
            time_steps: 200,
            tree: TreeKind::CoxRossRubinstein,
        }
    }
}

impl BinomialEngineConfig {
    /// Validated configuration.
    pub fn new(time_steps: Size, tree: TreeKind) -> Result<Self> {
        let config = Self { time_steps, tree };
        config.validate()?;
        Ok(config)
    }

    /// Check that the tree has enough steps.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.time_steps >= MIN_TIME_STEPS,
            InvalidArgument,
            "at least {MIN_TIME_STEPS} time steps required, {} provided",
            self.time_steps
        );
        Ok(())
    }

    /// Parse and validate a TOML document such as
    ///
    /// ```toml
    /// time_steps = 500
    /// tree = "tian"
    /// ```
    ///
    /// Missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| Error::InvalidArgument(format!("invalid engine configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

// ─── Engine ───────────────────────────────────────────────────────────────────

/// Pricing engine for vanilla options on a binomial lattice.
///
/// Market data is read from the process at the option's last exercise date
/// and flattened to constant coefficients (see
/// [`MarketSnapshot::from_process`]). American exercise is honoured at every
/// step from the first exercise date on, measured with the risk-free curve's
/// day counter; a window opening before valuation opens at t = 0. Any other
/// exercise is treated as European.
///
/// The engine holds no mutable state: concurrent calls share only the
/// process.
#[derive(Debug, Clone)]
pub struct BinomialVanillaEngine {
    process: Arc<GeneralizedBlackScholesProcess>,
    config: BinomialEngineConfig,
}

impl BinomialVanillaEngine {
    /// Cox-Ross-Rubinstein engine with `time_steps` steps.
    pub fn new(process: Arc<GeneralizedBlackScholesProcess>, time_steps: Size) -> Result<Self> {
        Self::with_config(
            process,
            BinomialEngineConfig {
                time_steps,
                ..BinomialEngineConfig::default()
            },
        )
    }

    /// Engine with explicit settings.
    pub fn with_config(
        process: Arc<GeneralizedBlackScholesProcess>,
        config: BinomialEngineConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self { process, config })
    }

    /// The market-data process.
    pub fn process(&self) -> &GeneralizedBlackScholesProcess {
        &self.process
    }

    /// The engine settings.
    pub fn config(&self) -> &BinomialEngineConfig {
        &self.config
    }

    fn price(&self, args: &VanillaOptionArguments) -> Result<OptionResults> {
        let spot = self.process.spot();
        ensure!(spot > 0.0, Domain, "non-positive underlying given: {spot}");
        let payoff = plain_vanilla(&*args.payoff)?;
        self.config.validate()?;

        let market =
            MarketSnapshot::from_process(&self.process, args.exercise.last_date(), payoff.strike())?;
        let exercise_from = args.exercise.allows_early_exercise().then(|| {
            self.process
                .risk_free_rate()
                .time_from_reference(args.exercise.first_date())
                .max(0.0)
        });
        binomial_vanilla(&market, payoff, exercise_from, &self.config)
    }
}

impl PricingEngine<VanillaOptionArguments> for BinomialVanillaEngine {
    fn calculate(&self, args: &VanillaOptionArguments) -> Result<OptionResults> {
        self.price(args).map_err(|err| {
            warn!(kind = ?err.kind(), %err, "binomial pricing failed");
            err
        })
    }
}

fn plain_vanilla(payoff: &dyn Payoff) -> Result<&dyn Payoff> {
    match payoff.as_plain_vanilla() {
        Some(plain) => Ok(plain),
        None => Err(Error::UnsupportedPayoff(format!(
            "non-plain payoff given: {}",
            payoff.description()
        ))),
    }
}

/// Price a vanilla option on a binomial lattice with flat market data.
///
/// `exercise_from` is the earliest early-exercise time in years from
/// valuation; `None` prices European exercise.
///
/// Checks, in order: the payoff is plain vanilla (`UnsupportedPayoff`), the
/// tree has at least two steps (`InvalidArgument`). A zero spread between
/// the stencil prices, as produced by a zero volatility, fails with
/// `NumericalDegeneracy`. Nothing is returned unless value and all Greeks
/// are finite.
pub fn binomial_vanilla(
    market: &MarketSnapshot,
    payoff: &dyn Payoff,
    exercise_from: Option<Time>,
    config: &BinomialEngineConfig,
) -> Result<OptionResults> {
    let payoff = plain_vanilla(payoff)?;
    config.validate()?;

    let span = debug_span!("binomial_vanilla", steps = config.time_steps, tree = %config.tree);
    let _enter = span.enter();
    debug!(
        spot = market.spot(),
        r = market.risk_free_rate(),
        q = market.dividend_yield(),
        vol = market.volatility(),
        maturity = market.time_to_maturity(),
        exercise_from,
        "flattened market data"
    );

    let grid = TimeGrid::with_lead(market.time_to_maturity(), config.time_steps, LEAD_STEPS)?;
    let model = config.tree.model();
    let tree = BinomialTree::anchored(
        &*model,
        market.spot(),
        market.volatility(),
        market.carry(),
        grid,
        LEAD_STEPS,
        LEAD_STEPS / 2,
    )?;
    let lattice = BlackScholesLattice::new(tree, market.risk_free_rate());

    let terminal = |s: Real| payoff.value(s);
    let mut option = DiscretizedVanillaOption::at_maturity(&lattice, &terminal, exercise_from);
    option.rollback_to(&lattice, LEAD_STEPS)?;

    let values = option.values();
    ensure_post!(
        values.len() == 3,
        "expected 3 nodes at valuation, found {}",
        values.len()
    );
    let (p_d, p_m, p_u) = (values[0], values[1], values[2]);
    let s_d = lattice.underlying(LEAD_STEPS, 0);
    let s_m = lattice.underlying(LEAD_STEPS, 1);
    let s_u = lattice.underlying(LEAD_STEPS, 2);
    trace!(p_d, p_m, p_u, s_d, s_m, s_u, "greeks stencil");

    ensure!(
        s_d < s_m && s_m < s_u,
        NumericalDegeneracy,
        "zero spread between stencil prices ({s_d}, {s_m}, {s_u}); delta and gamma are undefined"
    );

    let delta = (p_u - p_d) / (s_u - s_d);
    let delta_up = (p_u - p_m) / (s_u - s_m);
    let delta_down = (p_d - p_m) / (s_d - s_m);
    let gamma = (delta_up - delta_down) / ((s_u - s_d) / 2.0);
    let theta = black_scholes_theta(market, p_m, delta, gamma);

    ensure!(
        [p_m, delta, gamma, theta].iter().all(|x| x.is_finite()),
        NumericalDegeneracy,
        "non-finite result: value = {p_m}, delta = {delta}, gamma = {gamma}, theta = {theta}"
    );

    Ok(OptionResults {
        value: p_m,
        delta,
        gamma,
        theta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lg_core::ErrorKind;
    use lg_instruments::{AssetOrNothingPayoff, OptionType, PlainVanillaPayoff};
    use lg_time::{Actual365Fixed, Date};

    fn market(vol: Real) -> MarketSnapshot {
        let today = Date::from_ymd(2025, 1, 15).unwrap();
        let expiry = Date::from_ymd(2026, 1, 15).unwrap();
        MarketSnapshot::new(100.0, 0.05, 0.0, vol, today, expiry, &Actual365Fixed).unwrap()
    }

    fn config(time_steps: Size) -> BinomialEngineConfig {
        BinomialEngineConfig {
            time_steps,
            ..BinomialEngineConfig::default()
        }
    }

    #[test]
    fn default_config() {
        let c = BinomialEngineConfig::default();
        assert_eq!(c.time_steps, 200);
        assert_eq!(c.tree, TreeKind::CoxRossRubinstein);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn config_requires_two_steps() {
        for n in [0, 1] {
            let err = BinomialEngineConfig::new(n, TreeKind::Tian).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
        assert!(BinomialEngineConfig::new(2, TreeKind::Tian).is_ok());
    }

    #[test]
    fn atm_call_scenario() {
        let call = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        let r = binomial_vanilla(&market(0.20), &call, None, &config(200)).unwrap();
        assert!((r.value - 10.4506).abs() < 0.02, "value = {}", r.value);
        assert_abs_diff_eq!(r.delta, 0.6368, epsilon = 0.002);
        assert_abs_diff_eq!(r.gamma, 0.01876, epsilon = 2e-4);
        assert_abs_diff_eq!(r.theta, -6.414, epsilon = 0.02);
    }

    #[test]
    fn two_steps_is_enough() {
        let call = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        let r = binomial_vanilla(&market(0.20), &call, None, &config(2)).unwrap();
        // two CRR steps from today to maturity
        assert_abs_diff_eq!(r.value, 9.5104, epsilon = 1e-4);
        assert!(r.delta > 0.0 && r.gamma > 0.0);
    }

    #[test]
    fn value_is_taken_at_valuation() {
        let call = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        let put = PlainVanillaPayoff::new(OptionType::Put, 100.0);
        let forward_parity = 100.0 - 100.0 * (-0.05_f64).exp();
        // additive EQP misses the forward by ~0.1 at ten steps
        for kind in [
            TreeKind::CoxRossRubinstein,
            TreeKind::JarrowRudd,
            TreeKind::Trigeorgis,
            TreeKind::Tian,
        ] {
            let c = BinomialEngineConfig::new(10, kind).unwrap();
            let call = binomial_vanilla(&market(0.20), &call, None, &c).unwrap();
            let put = binomial_vanilla(&market(0.20), &put, None, &c).unwrap();
            assert!(
                (call.value - put.value - forward_parity).abs() < 0.03,
                "{kind}: C - P = {}, expected {forward_parity}",
                call.value - put.value
            );
        }
    }

    #[test]
    fn zero_volatility_is_degenerate() {
        let call = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        for kind in TreeKind::ALL {
            let c = BinomialEngineConfig::new(50, kind).unwrap();
            let err = binomial_vanilla(&market(0.0), &call, None, &c).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NumericalDegeneracy, "{kind}");
        }
    }

    #[test]
    fn payoff_is_checked_before_steps() {
        let digital = AssetOrNothingPayoff::new(OptionType::Call, 100.0);
        let err = binomial_vanilla(&market(0.20), &digital, None, &config(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedPayoff);
        assert!(err.to_string().contains("non-plain payoff"));

        let call = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        let err = binomial_vanilla(&market(0.20), &call, None, &config(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn early_exercise_raises_put_value() {
        let put = PlainVanillaPayoff::new(OptionType::Put, 100.0);
        let european = binomial_vanilla(&market(0.20), &put, None, &config(200)).unwrap();
        let american = binomial_vanilla(&market(0.20), &put, Some(0.0), &config(200)).unwrap();
        assert!(american.value > european.value + 0.4);
        assert!(american.delta < european.delta);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let put = PlainVanillaPayoff::new(OptionType::Put, 95.0);
        let a = binomial_vanilla(&market(0.3), &put, None, &config(150)).unwrap();
        let b = binomial_vanilla(&market(0.3), &put, None, &config(150)).unwrap();
        assert_eq!(a, b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_toml() {
        let c = BinomialEngineConfig::from_toml_str("time_steps = 500\ntree = \"tian\"\n").unwrap();
        assert_eq!(c, BinomialEngineConfig::new(500, TreeKind::Tian).unwrap());

        let c = BinomialEngineConfig::from_toml_str("tree = \"jarrow_rudd\"").unwrap();
        assert_eq!(c.time_steps, 200);
        assert_eq!(c.tree, TreeKind::JarrowRudd);

        for bad in ["time_steps = 1", "tree = \"leisen_reimer\"", "steps = 10", "time_steps = -3"] {
            let err = BinomialEngineConfig::from_toml_str(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{bad}");
        }
    }
}
