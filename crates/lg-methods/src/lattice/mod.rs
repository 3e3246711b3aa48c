//! Lattice methods for option pricing.
//!
//! # Overview
//!
//! * [`TreeModel`] — per-step up/down factors and up-probability, with five
//!   interchangeable strategies selected through [`TreeKind`]
//! * [`BinomialTree`] — recombining tree of node prices built from one
//!   [`StepParameters`]
//! * [`BlackScholesLattice`] — a tree plus flat discounting; implements the
//!   [`Lattice`] rollback
//! * [`DiscretizedAsset`] / [`DiscretizedVanillaOption`] — value vectors rolled
//!   back through a lattice
//! * [`TimeGrid`] — grid of time points used by tree methods

pub mod binomial_tree;
pub mod bsm_lattice;
pub mod discretized_asset;
pub mod tree_model;

pub use binomial_tree::BinomialTree;
pub use bsm_lattice::{BlackScholesLattice, Lattice};
pub use discretized_asset::{DiscretizedAsset, DiscretizedVanillaOption};
pub use tree_model::{
    AdditiveEqp, CoxRossRubinstein, JarrowRudd, StepParameters, Tian, TreeKind, TreeModel,
    Trigeorgis,
};

use lg_core::{ensure, errors::Result, Real, Size, Time};

// ─── TimeGrid ─────────────────────────────────────────────────────────────────

/// A uniform grid of time points ending at maturity.
///
/// The grid normally starts at 0. A grid built with
/// [`with_lead`](Self::with_lead) starts `lead` steps earlier, at
/// `−lead·dt`, and reaches 0 at index [`origin`](Self::origin).
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<Time>,
    dt: Time,
    origin: Size,
}

impl TimeGrid {
    /// Create a uniform time grid from 0 to `end` with `steps` intervals.
    ///
    /// Fails with `InvalidArgument` when `steps == 0` or the resulting step
    /// duration is not strictly positive.
    pub fn uniform(end: Time, steps: Size) -> Result<Self> {
        Self::with_lead(end, steps, 0)
    }

    /// Uniform grid with `steps` intervals of `dt = end / steps` from 0 to
    /// `end`, preceded by `lead` intervals of the same width before 0.
    pub fn with_lead(end: Time, steps: Size, lead: Size) -> Result<Self> {
        ensure!(steps > 0, InvalidArgument, "time grid needs at least one step");
        let dt = end / steps as Real;
        ensure!(
            dt > 0.0 && dt.is_finite(),
            InvalidArgument,
            "non-positive step duration {dt} (end = {end}, steps = {steps})"
        );
        let mut times: Vec<Time> = (0..lead + steps)
            .map(|i| (i as Real - lead as Real) * dt)
            .collect();
        // Pin the last point so that rounding never moves maturity.
        times.push(end);
        Ok(Self {
            times,
            dt,
            origin: lead,
        })
    }

    /// Number of time points (= steps + 1).
    pub fn size(&self) -> Size {
        self.times.len()
    }

    /// Number of steps (= time points − 1).
    pub fn steps(&self) -> Size {
        self.times.len() - 1
    }

    /// Time at index `i`.
    pub fn time(&self, i: Size) -> Time {
        self.times[i]
    }

    /// Duration of every step.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Final time.
    pub fn end(&self) -> Time {
        self.times[self.times.len() - 1]
    }

    /// All time points.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Index of the point at time 0.
    pub fn origin(&self) -> Size {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lg_core::ErrorKind;

    #[test]
    fn uniform_grid_shape() {
        let grid = TimeGrid::uniform(1.0, 4).unwrap();
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.steps(), 4);
        assert_abs_diff_eq!(grid.dt(), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(grid.time(2), 0.5, epsilon = 1e-15);
        assert_eq!(grid.end(), 1.0);
        assert_eq!(grid.times()[0], 0.0);
    }

    #[test]
    fn lead_steps_precede_the_origin() {
        let grid = TimeGrid::with_lead(1.0, 4, 2).unwrap();
        assert_eq!(grid.steps(), 6);
        assert_eq!(grid.origin(), 2);
        assert_abs_diff_eq!(grid.dt(), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(grid.time(0), -0.5, epsilon = 1e-15);
        assert_eq!(grid.time(2), 0.0);
        assert_eq!(grid.end(), 1.0);
        assert_eq!(TimeGrid::uniform(1.0, 4).unwrap().origin(), 0);
    }

    #[test]
    fn last_point_is_exact_maturity() {
        let grid = TimeGrid::uniform(0.7, 3).unwrap();
        assert_eq!(grid.end(), 0.7);
    }

    #[test]
    fn rejects_zero_steps_and_non_positive_end() {
        assert_eq!(TimeGrid::uniform(1.0, 0).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(TimeGrid::uniform(0.0, 10).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(TimeGrid::uniform(-1.0, 10).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            TimeGrid::uniform(Real::NAN, 10).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}
