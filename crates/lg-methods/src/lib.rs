//! # lg-methods
//!
//! Lattice methods: tree models, recombining binomial trees, the
//! Black-Scholes lattice with its discounted-expectation rollback, and
//! discretized assets that are rolled back through it.
//!
//! # Modules
//!
//! * [`lattice`] — time grids, tree models, binomial trees and backward
//!   induction

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: tree models, binomial trees, backward induction.
pub mod lattice;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{
    AdditiveEqp, BinomialTree, BlackScholesLattice, CoxRossRubinstein, DiscretizedAsset,
    DiscretizedVanillaOption, JarrowRudd, Lattice, StepParameters, Tian, TimeGrid, TreeKind,
    TreeModel, Trigeorgis,
};
