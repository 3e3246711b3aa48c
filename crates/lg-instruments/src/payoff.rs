//! Option payoffs.
//!
//! Payoffs describe the value of an option at exercise as a function of the
//! underlying asset price. Lattice engines only accept the plain-vanilla
//! shape; the digital payoffs exist so that callers can describe them and get
//! a clear rejection instead of a wrong number.

use lg_core::Real;
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Base trait for option payoffs.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// Compute the payoff given the underlying price at exercise/expiry.
    fn value(&self, price: Real) -> Real;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> String {
        self.name().to_string()
    }

    /// The option type (call / put).
    fn option_type(&self) -> OptionType;

    /// The strike price.
    fn strike(&self) -> Real;

    /// `Some` if this payoff is the plain-vanilla `max(φ(S − K), 0)` shape.
    fn as_plain_vanilla(&self) -> Option<&PlainVanillaPayoff> {
        None
    }
}

/// Standard "plain vanilla" European/American option payoff.
///
/// `payoff = max(φ(S − K), 0)` where `φ = +1` for Call, `−1` for Put.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// Create a new plain vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for PlainVanillaPayoff {
    fn value(&self, price: Real) -> Real {
        (self.option_type.sign() * (price - self.strike)).max(0.0)
    }

    fn name(&self) -> &str {
        "Vanilla"
    }

    fn description(&self) -> String {
        format!("{} {} @ {}", self.name(), self.option_type, self.strike)
    }

    fn option_type(&self) -> OptionType {
        self.option_type
    }

    fn strike(&self) -> Real {
        self.strike
    }

    fn as_plain_vanilla(&self) -> Option<&PlainVanillaPayoff> {
        Some(self)
    }
}

/// Cash-or-nothing payoff: pays a fixed amount if in the money.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashOrNothingPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
    /// Fixed cash payoff.
    pub cash_payoff: Real,
}

impl CashOrNothingPayoff {
    /// Create a new cash-or-nothing payoff.
    pub fn new(option_type: OptionType, strike: Real, cash_payoff: Real) -> Self {
        Self {
            option_type,
            strike,
            cash_payoff,
        }
    }
}

impl Payoff for CashOrNothingPayoff {
    fn value(&self, price: Real) -> Real {
        if self.option_type.sign() * (price - self.strike) > 0.0 {
            self.cash_payoff
        } else {
            0.0
        }
    }

    fn name(&self) -> &str {
        "CashOrNothing"
    }

    fn option_type(&self) -> OptionType {
        self.option_type
    }

    fn strike(&self) -> Real {
        self.strike
    }
}

/// Asset-or-nothing payoff: pays the underlying price if in the money.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetOrNothingPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl AssetOrNothingPayoff {
    /// Create a new asset-or-nothing payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for AssetOrNothingPayoff {
    fn value(&self, price: Real) -> Real {
        if self.option_type.sign() * (price - self.strike) > 0.0 {
            price
        } else {
            0.0
        }
    }

    fn name(&self) -> &str {
        "AssetOrNothing"
    }

    fn option_type(&self) -> OptionType {
        self.option_type
    }

    fn strike(&self) -> Real {
        self.strike
    }
}
