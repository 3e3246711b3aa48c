//! # lg-termstructures
//!
//! Yield curves and Black-volatility surfaces consumed by the pricing
//! engines as market-data providers.
//!
//! Only flat implementations live here. Richer curves can be plugged in by
//! implementing [`YieldTermStructure`] or [`BlackVolTermStructure`]; the
//! binomial engine reads them at the option's maturity and flattens them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TermStructure` — base trait for all term structures.
pub mod term_structure;

/// `YieldTermStructure` — interest-rate and dividend-yield curves.
pub mod yield_term_structure;

/// `FlatForward` — constant continuously-compounded rate.
pub mod flat_forward;

/// `BlackVolTermStructure` and `BlackConstantVol`.
pub mod black_vol_term_structure;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use black_vol_term_structure::{BlackConstantVol, BlackVolTermStructure};
pub use flat_forward::FlatForward;
pub use term_structure::{TermStructure, TermStructureData};
pub use yield_term_structure::YieldTermStructure;
