//! The Black-Scholes lattice: a binomial tree plus flat discounting.
//!
//! Rolling back one step applies the discounted risk-neutral expectation
//!
//! `v(i, j) = e^{−r·Δt} · (p · v(i+1, j+1) + (1 − p) · v(i+1, j))`
//!
//! node by node, left to right.

use super::binomial_tree::BinomialTree;
use lg_core::{ensure, errors::Result, DiscountFactor, Rate, Real, Size, Time};

/// Node-price lookup and backward induction between adjacent time steps.
pub trait Lattice: std::fmt::Debug {
    /// Number of time steps.
    fn time_steps(&self) -> Size;

    /// Number of nodes at time step `i`.
    fn size(&self, i: Size) -> Size;

    /// Time of step `i`, in years from valuation.
    fn time(&self, i: Size) -> Time;

    /// Underlying price at node `(i, index)`.
    fn underlying(&self, i: Size, index: Size) -> Real;

    /// Roll the values held at step `from` back to step `from − 1`.
    ///
    /// `values` must hold exactly `size(from)` entries; the result holds
    /// `size(from − 1)`.
    fn rollback(&self, from: Size, values: &[Real]) -> Result<Vec<Real>>;
}

/// Binomial tree with a flat risk-free rate.
#[derive(Debug, Clone, PartialEq)]
pub struct BlackScholesLattice {
    tree: BinomialTree,
    risk_free_rate: Rate,
    discount: DiscountFactor,
}

impl BlackScholesLattice {
    /// Wrap `tree`, discounting every step at `risk_free_rate`.
    pub fn new(tree: BinomialTree, risk_free_rate: Rate) -> Self {
        let discount = (-risk_free_rate * tree.dt()).exp();
        Self {
            tree,
            risk_free_rate,
            discount,
        }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &BinomialTree {
        &self.tree
    }

    /// Flat risk-free rate.
    pub fn risk_free_rate(&self) -> Rate {
        self.risk_free_rate
    }

    /// One-step discount factor.
    pub fn discount(&self) -> DiscountFactor {
        self.discount
    }
}

impl Lattice for BlackScholesLattice {
    fn time_steps(&self) -> Size {
        self.tree.steps()
    }

    fn size(&self, i: Size) -> Size {
        self.tree.size(i)
    }

    fn time(&self, i: Size) -> Time {
        self.tree.time_grid().time(i)
    }

    fn underlying(&self, i: Size, index: Size) -> Real {
        self.tree.underlying(i, index)
    }

    fn rollback(&self, from: Size, values: &[Real]) -> Result<Vec<Real>> {
        ensure!(
            from >= 1 && from <= self.time_steps(),
            InvalidArgument,
            "cannot roll back from time step {from} of {}",
            self.time_steps()
        );
        ensure!(
            values.len() == self.size(from),
            InvalidArgument,
            "{} values given for the {} nodes of time step {from}",
            values.len(),
            self.size(from)
        );
        let pu = self.tree.probability();
        let pd = 1.0 - pu;
        let df = self.discount;
        Ok(values
            .windows(2)
            .map(|pair| df * (pu * pair[1] + pd * pair[0]))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::tree_model::CoxRossRubinstein;
    use crate::lattice::TimeGrid;
    use approx::assert_abs_diff_eq;
    use lg_core::ErrorKind;

    fn lattice(steps: Size) -> BlackScholesLattice {
        let grid = TimeGrid::uniform(1.0, steps).unwrap();
        let tree = BinomialTree::new(&CoxRossRubinstein, 100.0, 0.20, 0.05, grid).unwrap();
        BlackScholesLattice::new(tree, 0.05)
    }

    #[test]
    fn rollback_shrinks_by_one() {
        let lattice = lattice(4);
        let out = lattice.rollback(4, &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn rollback_discounts_expectation() {
        let lattice = lattice(4);
        let p = lattice.tree().probability();
        let df = lattice.discount();
        assert_abs_diff_eq!(df, (-0.05_f64 * 0.25).exp(), epsilon = 1e-15);

        let out = lattice.rollback(1, &[2.0, 6.0]).unwrap();
        assert_eq!(out, vec![df * (p * 6.0 + (1.0 - p) * 2.0)]);
    }

    #[test]
    fn constant_values_discount_to_zero_coupon() {
        let lattice = lattice(8);
        let mut values = vec![1.0; 9];
        for from in (1..=8).rev() {
            values = lattice.rollback(from, &values).unwrap();
        }
        assert_eq!(values.len(), 1);
        assert_abs_diff_eq!(values[0], (-0.05_f64).exp(), epsilon = 1e-14);
    }

    #[test]
    fn rollback_checks_shape() {
        let lattice = lattice(4);
        assert_eq!(
            lattice.rollback(0, &[1.0]).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            lattice.rollback(5, &[1.0; 6]).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            lattice.rollback(3, &[1.0; 5]).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn step_times_follow_the_grid() {
        let grid = TimeGrid::with_lead(1.0, 4, 2).unwrap();
        let tree = BinomialTree::new(&CoxRossRubinstein, 100.0, 0.20, 0.05, grid).unwrap();
        let lattice = BlackScholesLattice::new(tree, 0.05);
        assert_eq!(lattice.time_steps(), 6);
        assert_abs_diff_eq!(lattice.time(0), -0.5, epsilon = 1e-15);
        assert_eq!(lattice.time(2), 0.0);
        assert_eq!(lattice.time(6), 1.0);
    }

    #[test]
    fn rollback_is_deterministic() {
        let lattice = lattice(3);
        let v = [0.0, 1.5, 7.25, 20.0];
        assert_eq!(lattice.rollback(3, &v).unwrap(), lattice.rollback(3, &v).unwrap());
    }
}
