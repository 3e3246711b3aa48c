//! # lattice-greeks
//!
//! Binomial-lattice pricing of vanilla options, with value, delta, gamma
//! and theta produced by a single backward induction.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `lg-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use lattice_greeks::instruments::{OptionType, VanillaOption};
//! use lattice_greeks::pricingengines::BinomialVanillaEngine;
//! use lattice_greeks::processes::GeneralizedBlackScholesProcess;
//! use lattice_greeks::termstructures::{BlackConstantVol, FlatForward};
//! use lattice_greeks::time::{Actual365Fixed, Date};
//!
//! let today = Date::from_ymd(2025, 1, 15)?;
//! let process = Arc::new(GeneralizedBlackScholesProcess::new(
//!     100.0,
//!     Arc::new(FlatForward::continuous(today, 0.05, Actual365Fixed)),
//!     Arc::new(FlatForward::continuous(today, 0.0, Actual365Fixed)),
//!     Arc::new(BlackConstantVol::new(today, 0.20, Actual365Fixed)),
//! ));
//! let engine = BinomialVanillaEngine::new(process, 200)?;
//!
//! let call = VanillaOption::european(OptionType::Call, 100.0, Date::from_ymd(2026, 1, 15)?);
//! let results = call.price(&engine)?;
//! assert!((results.delta - 0.637).abs() < 0.01);
//! # Ok::<(), lattice_greeks::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use lg_core as core;

/// Dates and day counters.
pub use lg_time as time;

/// Yield curves and volatility surfaces.
pub use lg_termstructures as termstructures;

/// Black-Scholes process and flat market snapshots.
pub use lg_processes as processes;

/// Payoffs, exercises and the vanilla option.
pub use lg_instruments as instruments;

/// Tree models, lattices and backward induction.
pub use lg_methods as methods;

/// Binomial and analytic pricing engines.
pub use lg_pricingengines as pricingengines;
