//! Tree models: how one time step of a binomial tree moves and branches.
//!
//! | Model | Type | Reference |
//! |---|---|---|
//! | [`CoxRossRubinstein`] | Equal jumps, drift in the probability | Cox, Ross & Rubinstein (1979) |
//! | [`JarrowRudd`] | Equal probabilities, drift in the nodes | Jarrow & Rudd (1983) |
//! | [`AdditiveEqp`] | Equal probabilities, additive | Additive EQP |
//! | [`Trigeorgis`] | Equal jumps, additive | Trigeorgis (1991) |
//! | [`Tian`] | Three-moment matching | Tian (1993) |
//!
//! Every model is constant per step, so `up · down` never depends on the
//! node and the tree recombines: an up-move followed by a down-move lands on
//! the same price as the reverse.

use lg_core::{ensure, errors::Result, Rate, Real, Time, Volatility};
use std::fmt;

/// Up/down factors and up-probability of one time step.
///
/// Invariants: `up ≥ down > 0` and `0 ≤ probability ≤ 1`. The factors are
/// equal only for a zero-volatility step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParameters {
    up: Real,
    down: Real,
    probability: Real,
}

impl StepParameters {
    /// Validate and bundle step parameters.
    pub fn new(up: Real, down: Real, probability: Real) -> Result<Self> {
        ensure!(
            down > 0.0 && up.is_finite(),
            Domain,
            "invalid move factors: up = {up}, down = {down}"
        );
        ensure!(up >= down, Domain, "up factor {up} below down factor {down}");
        ensure!(
            (0.0..=1.0).contains(&probability),
            Domain,
            "invalid up-probability {probability} (try more steps)"
        );
        Ok(Self {
            up,
            down,
            probability,
        })
    }

    /// Parameters of a step without spread: both branches reach
    /// `factor`, and the probability saturates in the direction of `drift`.
    fn flat(factor: Real, drift: Real) -> Result<Self> {
        let probability = if drift > 0.0 {
            1.0
        } else if drift < 0.0 {
            0.0
        } else {
            0.5
        };
        Self::new(factor, factor, probability)
    }

    /// Multiplicative up-move factor.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Multiplicative down-move factor.
    pub fn down(&self) -> Real {
        self.down
    }

    /// Risk-neutral probability of the up branch.
    pub fn probability(&self) -> Real {
        self.probability
    }

    /// `true` when both branches lead to the same price.
    pub fn is_degenerate(&self) -> bool {
        self.up == self.down
    }
}

/// Discretization scheme of a binomial tree.
///
/// `drift` is the risk-neutral drift of the underlying, `r − q`; models that
/// work in log space subtract `σ²/2` themselves.
pub trait TreeModel: fmt::Debug + Send + Sync {
    /// Human-readable model name.
    fn name(&self) -> &'static str;

    /// Up/down factors and up-probability over a step of length `dt`.
    ///
    /// Fails with `InvalidArgument` when `dt ≤ 0` and with `Domain` when the
    /// volatility is negative, an input is not finite, or the resulting
    /// probability falls outside `[0, 1]`.
    fn step_parameters(&self, vol: Volatility, drift: Rate, dt: Time) -> Result<StepParameters>;
}

fn check_inputs(vol: Volatility, drift: Rate, dt: Time) -> Result<()> {
    ensure!(
        dt > 0.0 && dt.is_finite(),
        InvalidArgument,
        "non-positive step duration given: {dt}"
    );
    ensure!(
        vol >= 0.0 && vol.is_finite(),
        Domain,
        "negative or non-finite volatility given: {vol}"
    );
    ensure!(drift.is_finite(), Domain, "non-finite drift given: {drift}");
    Ok(())
}

/// Drift of `ln S` over one step.
fn log_drift_per_step(vol: Volatility, drift: Rate, dt: Time) -> Real {
    (drift - 0.5 * vol * vol) * dt
}

// ─── Models ───────────────────────────────────────────────────────────────────

/// Cox-Ross-Rubinstein: `dx = σ√Δt`, `up = e^dx = 1/down`,
/// `p = ½ + ½·ν·Δt/dx`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoxRossRubinstein;

impl TreeModel for CoxRossRubinstein {
    fn name(&self) -> &'static str {
        "Cox-Ross-Rubinstein"
    }

    fn step_parameters(&self, vol: Volatility, drift: Rate, dt: Time) -> Result<StepParameters> {
        check_inputs(vol, drift, dt)?;
        let dps = log_drift_per_step(vol, drift, dt);
        let dx = vol * dt.sqrt();
        if dx == 0.0 {
            return StepParameters::flat(1.0, dps);
        }
        let up = dx.exp();
        StepParameters::new(up, 1.0 / up, 0.5 + 0.5 * dps / dx)
    }
}

/// Jarrow-Rudd: `up, down = exp(ν·Δt ± σ√Δt)`, `p = ½`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JarrowRudd;

impl TreeModel for JarrowRudd {
    fn name(&self) -> &'static str {
        "Jarrow-Rudd"
    }

    fn step_parameters(&self, vol: Volatility, drift: Rate, dt: Time) -> Result<StepParameters> {
        check_inputs(vol, drift, dt)?;
        let dps = log_drift_per_step(vol, drift, dt);
        let std = vol * dt.sqrt();
        if std == 0.0 {
            return StepParameters::flat(dps.exp(), dps);
        }
        StepParameters::new((dps + std).exp(), (dps - std).exp(), 0.5)
    }
}

/// Additive equal probabilities: `p = ½`, with the log step chosen so that
/// the per-step variance is matched,
/// `dx = −½·ν·Δt + ½·√(4σ²Δt − 3ν²Δt²)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdditiveEqp;

impl TreeModel for AdditiveEqp {
    fn name(&self) -> &'static str {
        "additive equal probabilities"
    }

    fn step_parameters(&self, vol: Volatility, drift: Rate, dt: Time) -> Result<StepParameters> {
        check_inputs(vol, drift, dt)?;
        let dps = log_drift_per_step(vol, drift, dt);
        if vol == 0.0 {
            return StepParameters::flat(dps.exp(), dps);
        }
        let radicand = 4.0 * vol * vol * dt - 3.0 * dps * dps;
        ensure!(
            radicand >= 0.0,
            Domain,
            "drift too large for the variance of one step (try more steps)"
        );
        let dx = -0.5 * dps + 0.5 * radicand.sqrt();
        StepParameters::new((dps + dx).exp(), (dps - dx).exp(), 0.5)
    }
}

/// Trigeorgis: additive equal jumps `dx = √(σ²Δt + ν²Δt²)`,
/// `p = ½ + ½·ν·Δt/dx`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trigeorgis;

impl TreeModel for Trigeorgis {
    fn name(&self) -> &'static str {
        "Trigeorgis"
    }

    fn step_parameters(&self, vol: Volatility, drift: Rate, dt: Time) -> Result<StepParameters> {
        check_inputs(vol, drift, dt)?;
        let dps = log_drift_per_step(vol, drift, dt);
        if vol == 0.0 {
            return StepParameters::flat(dps.exp(), dps);
        }
        let dx = (vol * vol * dt + dps * dps).sqrt();
        StepParameters::new(dx.exp(), (-dx).exp(), 0.5 + 0.5 * dps / dx)
    }
}

/// Tian: matches the first three moments of the lognormal step.
///
/// With `Q = exp(σ²Δt)` and `R = exp((r − q)Δt)`:
/// `up, down = ½·R·Q·(Q + 1 ± √(Q² + 2Q − 3))`, `p = (R − down)/(up − down)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tian;

impl TreeModel for Tian {
    fn name(&self) -> &'static str {
        "Tian"
    }

    fn step_parameters(&self, vol: Volatility, drift: Rate, dt: Time) -> Result<StepParameters> {
        check_inputs(vol, drift, dt)?;
        let q = (vol * vol * dt).exp();
        let r = (drift * dt).exp();
        let root = (q * q + 2.0 * q - 3.0).max(0.0).sqrt();
        let up = 0.5 * r * q * (q + 1.0 + root);
        let down = 0.5 * r * q * (q + 1.0 - root);
        if up == down {
            return StepParameters::flat(up, drift);
        }
        StepParameters::new(up, down, (r - down) / (up - down))
    }
}

// ─── TreeKind ─────────────────────────────────────────────────────────────────

/// Selector for the built-in tree models, e.g. from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TreeKind {
    /// [`CoxRossRubinstein`].
    #[default]
    CoxRossRubinstein,
    /// [`JarrowRudd`].
    JarrowRudd,
    /// [`AdditiveEqp`].
    AdditiveEqp,
    /// [`Trigeorgis`].
    Trigeorgis,
    /// [`Tian`].
    Tian,
}

impl TreeKind {
    /// All selectable kinds.
    pub const ALL: [TreeKind; 5] = [
        TreeKind::CoxRossRubinstein,
        TreeKind::JarrowRudd,
        TreeKind::AdditiveEqp,
        TreeKind::Trigeorgis,
        TreeKind::Tian,
    ];

    /// The strategy object for this kind.
    pub fn model(self) -> Box<dyn TreeModel> {
        match self {
            TreeKind::CoxRossRubinstein => Box::new(CoxRossRubinstein),
            TreeKind::JarrowRudd => Box::new(JarrowRudd),
            TreeKind::AdditiveEqp => Box::new(AdditiveEqp),
            TreeKind::Trigeorgis => Box::new(Trigeorgis),
            TreeKind::Tian => Box::new(Tian),
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model().name())
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
