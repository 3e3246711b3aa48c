//! # lg-processes
//!
//! The generalized Black-Scholes process as a bundle of market data (spot,
//! rate and dividend curves, volatility surface), and the constant-coefficient
//! [`MarketSnapshot`] the lattice engines actually run on.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod black_scholes_process;
pub mod market_snapshot;

pub use black_scholes_process::{black_scholes_process, GeneralizedBlackScholesProcess};
pub use market_snapshot::MarketSnapshot;
