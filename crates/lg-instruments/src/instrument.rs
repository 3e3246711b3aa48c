//! The pricing-engine seam and the result bundle it produces.

use lg_core::{errors::Result, Real};

/// Value and sensitivities of an option, produced together by one engine
/// invocation.
///
/// Greeks are per unit of the underlying (delta, gamma) and per year
/// (theta).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OptionResults {
    /// Present value.
    pub value: Real,
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂t, per year.
    pub theta: Real,
}

/// Base trait for all pricing engines.
///
/// A pricing engine computes [`OptionResults`] for the instrument described
/// by `Args`. Engines hold no mutable state, so a single engine may serve
/// concurrent calls.
pub trait PricingEngine<Args>: std::fmt::Debug + Send + Sync {
    /// Price the instrument described by `args`.
    fn calculate(&self, args: &Args) -> Result<OptionResults>;
}
