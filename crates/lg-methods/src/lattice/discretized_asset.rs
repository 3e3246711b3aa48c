//! Discretized assets: value vectors rolled back through a lattice.
//!
//! An asset holds the values of an instrument on the nodes of one time step.
//! [`DiscretizedAsset::step_back`] replaces them with the values one step
//! earlier, then gives the asset a chance to adjust them (early exercise,
//! barriers, coupons).

use super::bsm_lattice::Lattice;
use lg_core::{ensure, errors::Result, Real, Size, Time};

/// Values of an instrument on one time layer of a lattice.
///
/// After `k` calls to [`step_back`](Self::step_back) starting from maturity
/// `N`, the asset sits at time step `N − k` and holds `N + 1 − k` values.
pub trait DiscretizedAsset {
    /// Time step the current values belong to.
    fn time_step(&self) -> Size;

    /// Values on the nodes of [`time_step`](Self::time_step).
    fn values(&self) -> &[Real];

    /// Replace the held values with those of `time_step`.
    fn set_values(&mut self, time_step: Size, values: Vec<Real>);

    /// Hook applied after every rollback step. No-op by default.
    fn adjust_values(&mut self, _lattice: &dyn Lattice) {}

    /// Roll back one time step and adjust.
    fn step_back(&mut self, lattice: &dyn Lattice) -> Result<()> {
        let from = self.time_step();
        ensure!(from > 0, InvalidArgument, "cannot roll back past time step 0");
        let values = lattice.rollback(from, self.values())?;
        self.set_values(from - 1, values);
        self.adjust_values(lattice);
        Ok(())
    }

    /// Roll back until the asset sits at time step `to`.
    fn rollback_to(&mut self, lattice: &dyn Lattice, to: Size) -> Result<()> {
        ensure!(
            to <= self.time_step(),
            InvalidArgument,
            "cannot roll back from time step {} forward to {to}",
            self.time_step()
        );
        while self.time_step() > to {
            self.step_back(lattice)?;
        }
        Ok(())
    }
}

/// A vanilla option on a lattice.
///
/// Seeded at maturity with `payoff(S)` on every terminal node. With early
/// exercise from time `t₀`, every rollback step landing on a time `t ≥ t₀`
/// is followed by `v(i, j) = max(v(i, j), payoff(S(i, j)))`.
pub struct DiscretizedVanillaOption<'a> {
    payoff: &'a (dyn Fn(Real) -> Real + 'a),
    exercise_from: Option<Time>,
    time_step: Size,
    values: Vec<Real>,
}

impl<'a> DiscretizedVanillaOption<'a> {
    /// Seed the option at the last time step of `lattice`.
    ///
    /// `exercise_from` is the earliest early-exercise time, in years from
    /// valuation; `None` allows exercise at maturity only.
    pub fn at_maturity(
        lattice: &dyn Lattice,
        payoff: &'a (dyn Fn(Real) -> Real + 'a),
        exercise_from: Option<Time>,
    ) -> Self {
        let n = lattice.time_steps();
        let values = (0..lattice.size(n))
            .map(|j| payoff(lattice.underlying(n, j)))
            .collect();
        Self {
            payoff,
            exercise_from,
            time_step: n,
            values,
        }
    }

    /// Earliest early-exercise time, if any.
    pub fn exercise_from(&self) -> Option<Time> {
        self.exercise_from
    }
}

impl std::fmt::Debug for DiscretizedVanillaOption<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscretizedVanillaOption")
            .field("exercise_from", &self.exercise_from)
            .field("time_step", &self.time_step)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

impl DiscretizedAsset for DiscretizedVanillaOption<'_> {
    fn time_step(&self) -> Size {
        self.time_step
    }

    fn values(&self) -> &[Real] {
        &self.values
    }

    fn set_values(&mut self, time_step: Size, values: Vec<Real>) {
        self.time_step = time_step;
        self.values = values;
    }

    fn adjust_values(&mut self, lattice: &dyn Lattice) {
        let i = self.time_step;
        match self.exercise_from {
            Some(from) if lattice.time(i) >= from => {}
            _ => return,
        }
        for (j, v) in self.values.iter_mut().enumerate() {
            *v = v.max((self.payoff)(lattice.underlying(i, j)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{BinomialTree, BlackScholesLattice, CoxRossRubinstein, TimeGrid};
    use lg_core::ErrorKind;

    fn lattice(steps: Size, r: Real) -> BlackScholesLattice {
        let grid = TimeGrid::uniform(1.0, steps).unwrap();
        let tree = BinomialTree::new(&CoxRossRubinstein, 100.0, 0.20, r, grid).unwrap();
        BlackScholesLattice::new(tree, r)
    }

    fn put(s: Real) -> Real {
        (100.0 - s).max(0.0)
    }

    #[test]
    fn seeded_with_terminal_payoff() {
        let lattice = lattice(10, 0.05);
        let option = DiscretizedVanillaOption::at_maturity(&lattice, &put, None);
        assert_eq!(option.time_step(), 10);
        assert_eq!(option.values().len(), 11);
        for (j, v) in option.values().iter().enumerate() {
            assert_eq!(*v, put(lattice.underlying(10, j)));
        }
    }

    #[test]
    fn size_tracks_time_step() {
        let lattice = lattice(10, 0.05);
        let mut option = DiscretizedVanillaOption::at_maturity(&lattice, &put, None);
        for k in 1..=8 {
            option.step_back(&lattice).unwrap();
            assert_eq!(option.time_step(), 10 - k);
            assert_eq!(option.values().len(), 11 - k);
        }
    }

    #[test]
    fn rollback_to_stops_at_target() {
        let lattice = lattice(2, 0.05);
        let mut option = DiscretizedVanillaOption::at_maturity(&lattice, &put, None);
        option.rollback_to(&lattice, 2).unwrap();
        assert_eq!(option.values().len(), 3);
        option.rollback_to(&lattice, 0).unwrap();
        assert_eq!(option.values().len(), 1);
        assert_eq!(
            option.rollback_to(&lattice, 1).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(option.step_back(&lattice).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn early_exercise_never_lowers_values() {
        let lattice = lattice(50, 0.08);
        let mut european = DiscretizedVanillaOption::at_maturity(&lattice, &put, None);
        let mut american = DiscretizedVanillaOption::at_maturity(&lattice, &put, Some(0.0));
        european.rollback_to(&lattice, 0).unwrap();
        american.rollback_to(&lattice, 0).unwrap();
        assert!(american.values()[0] > european.values()[0]);
    }

    #[test]
    fn early_exercise_dominates_intrinsic_at_every_node() {
        let lattice = lattice(20, 0.08);
        let mut american = DiscretizedVanillaOption::at_maturity(&lattice, &put, Some(0.0));
        while american.time_step() > 0 {
            american.step_back(&lattice).unwrap();
            let i = american.time_step();
            for (j, v) in american.values().iter().enumerate() {
                assert!(*v >= put(lattice.underlying(i, j)));
            }
        }
    }

    #[test]
    fn exercise_window_opening_late_skips_earlier_steps() {
        let lattice = lattice(40, 0.08);
        let price = |from: Option<Time>| {
            let mut option = DiscretizedVanillaOption::at_maturity(&lattice, &put, from);
            option.rollback_to(&lattice, 0).unwrap();
            option.values()[0]
        };
        let european = price(None);
        let american = price(Some(0.0));
        let half = price(Some(0.5));
        // no step lands after t = 0.99
        assert_eq!(price(Some(0.99)), european);
        assert!(european < half && half < american, "{european} {half} {american}");
    }
}
