//! # lg-pricingengines
//!
//! Pricing engines for vanilla options.
//!
//! ## Engines
//!
//! - [`BinomialVanillaEngine`] — binomial lattice; value, delta and gamma
//!   from one rollback, theta from the Black-Scholes PDE
//! - [`AnalyticEuropeanEngine`] — Black-Scholes-Merton closed form for
//!   European options

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod binomial_engine;
pub mod greeks;

pub use analytic_european_engine::{black_scholes_merton, AnalyticEuropeanEngine};
pub use binomial_engine::{binomial_vanilla, BinomialEngineConfig, BinomialVanillaEngine};
pub use greeks::black_scholes_theta;
