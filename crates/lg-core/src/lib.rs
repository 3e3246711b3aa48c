//! # lg-core
//!
//! Core types and error definitions for lattice-greeks.
//!
//! This crate provides the building blocks shared by every other crate in the
//! workspace: the floating-point type aliases used for prices, rates and
//! times, and the error taxonomy reported by the pricing engines.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `ensure_post!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A continuously-compounded rate expressed as a decimal (0.05 = 5 %).
pub type Rate = Real;

/// A discount factor in (0, 1].
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// An annualised volatility expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, ErrorKind, Result};
