//! Vanilla option instrument.

use crate::exercise::Exercise;
use crate::instrument::{OptionResults, PricingEngine};
use crate::payoff::{OptionType, Payoff, PlainVanillaPayoff};
use lg_core::{errors::Result, Real};
use lg_time::Date;
use std::sync::Arc;

/// Arguments handed to a pricing engine.
#[derive(Debug, Clone)]
pub struct VanillaOptionArguments {
    /// The payoff.
    pub payoff: Arc<dyn Payoff>,
    /// Exercise terms.
    pub exercise: Exercise,
}

/// An option on a single underlying asset.
#[derive(Debug, Clone)]
pub struct VanillaOption {
    payoff: Arc<dyn Payoff>,
    exercise: Exercise,
}

impl VanillaOption {
    /// Create a new option.
    pub fn new(payoff: Arc<dyn Payoff>, exercise: Exercise) -> Self {
        Self { payoff, exercise }
    }

    /// Convenience: a European call/put with a plain-vanilla payoff.
    pub fn european(option_type: OptionType, strike: Real, expiry: Date) -> Self {
        Self::new(
            Arc::new(PlainVanillaPayoff::new(option_type, strike)),
            Exercise::european(expiry),
        )
    }

    /// Convenience: an American call/put exercisable from `earliest` to
    /// `expiry`.
    pub fn american(option_type: OptionType, strike: Real, earliest: Date, expiry: Date) -> Self {
        Self::new(
            Arc::new(PlainVanillaPayoff::new(option_type, strike)),
            Exercise::american(earliest, expiry),
        )
    }

    /// The strike price.
    pub fn strike(&self) -> Real {
        self.payoff.strike()
    }

    /// The option type (call/put).
    pub fn option_type(&self) -> OptionType {
        self.payoff.option_type()
    }

    /// The payoff.
    pub fn payoff(&self) -> &dyn Payoff {
        &*self.payoff
    }

    /// The exercise.
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    /// The arguments a pricing engine works from.
    pub fn arguments(&self) -> VanillaOptionArguments {
        VanillaOptionArguments {
            payoff: Arc::clone(&self.payoff),
            exercise: self.exercise.clone(),
        }
    }

    /// Price this option using the given engine.
    pub fn price(&self, engine: &dyn PricingEngine<VanillaOptionArguments>) -> Result<OptionResults> {
        engine.calculate(&self.arguments())
    }
}
