//! # lg-instruments
//!
//! Vanilla option instruments: payoffs, exercise schedules, the
//! [`PricingEngine`] seam and the [`OptionResults`] bundle engines return.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod instrument;
pub mod option;
pub mod payoff;

pub use exercise::{Exercise, ExerciseType};
pub use instrument::{OptionResults, PricingEngine};
pub use option::{VanillaOption, VanillaOptionArguments};
pub use payoff::{AssetOrNothingPayoff, CashOrNothingPayoff, OptionType, Payoff, PlainVanillaPayoff};
