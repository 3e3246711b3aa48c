//! Recombining binomial tree.
//!
//! The tree has `steps + 1` time layers, with layer `i` holding `i + 1`
//! nodes. Node `(i, j)` is the state after `j` up-moves and `i − j`
//! down-moves:
//!
//! `S(i, j) = x0 · up^j · down^(i − j)`
//!
//! [`BinomialTree::anchored`] picks `x0` so that a chosen node, rather than
//! the root, sits at the spot price.

use super::tree_model::{StepParameters, TreeModel};
use super::TimeGrid;
use lg_core::{ensure, errors::Result, Rate, Real, Size, Time, Volatility};

/// A recombining binomial tree over a uniform time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialTree {
    x0: Real,
    grid: TimeGrid,
    params: StepParameters,
}

impl BinomialTree {
    /// Build a tree from `x0` over `grid` with the per-step parameters of
    /// `model`, for constant volatility and drift (`r − q`).
    ///
    /// Fails before any node is computed when `x0` is not a positive finite
    /// number, or when the model rejects the inputs.
    pub fn new(
        model: &dyn TreeModel,
        x0: Real,
        vol: Volatility,
        drift: Rate,
        grid: TimeGrid,
    ) -> Result<Self> {
        Self::anchored(model, x0, vol, drift, grid, 0, 0)
    }

    /// Build a tree whose node `(step, index)` sits at `spot`; the root is
    /// `spot / (up^index · down^(step − index))`.
    ///
    /// Fails with `InvalidArgument` when the node is not part of the tree.
    pub fn anchored(
        model: &dyn TreeModel,
        spot: Real,
        vol: Volatility,
        drift: Rate,
        grid: TimeGrid,
        step: Size,
        index: Size,
    ) -> Result<Self> {
        ensure!(
            spot > 0.0 && spot.is_finite(),
            Domain,
            "non-positive state price given: {spot}"
        );
        ensure!(
            index <= step && step <= grid.steps(),
            InvalidArgument,
            "node ({step}, {index}) outside a tree of {} steps",
            grid.steps()
        );
        let params = model.step_parameters(vol, drift, grid.dt())?;
        let ups = params.up().powi(index as i32);
        let downs = params.down().powi((step - index) as i32);
        let x0 = spot / (ups * downs);
        tracing::trace!(
            model = model.name(),
            up = params.up(),
            down = params.down(),
            probability = params.probability(),
            x0,
            "binomial tree built"
        );
        Ok(Self { x0, grid, params })
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.grid.steps()
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        self.grid.dt()
    }

    /// The time grid.
    pub fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Underlying value at the root.
    pub fn x0(&self) -> Real {
        self.x0
    }

    /// Per-step parameters shared by every node.
    pub fn step_parameters(&self) -> &StepParameters {
        &self.params
    }

    /// Number of nodes at time step `i` (always `i + 1`).
    pub fn size(&self, i: Size) -> Size {
        i + 1
    }

    /// Underlying value at node `(i, index)`.
    ///
    /// # Panics
    ///
    /// If `index > i`; layer `i` has nodes `0..=i` only.
    pub fn underlying(&self, i: Size, index: Size) -> Real {
        assert!(index <= i, "node {index} outside layer {i}");
        let ups = index as i32;
        let downs = (i - index) as i32;
        self.x0 * self.params.up().powi(ups) * self.params.down().powi(downs)
    }

    /// Up-probability; the same on every branch.
    pub fn probability(&self) -> Real {
        self.params.probability()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
