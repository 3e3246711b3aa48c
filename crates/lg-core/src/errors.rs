//! Error types for lattice-greeks.
//!
//! Every fallible operation in the workspace returns [`Result`]. The variants
//! of [`Error`] form a closed taxonomy: input validation failures are detected
//! before any lattice is built, while [`Error::NumericalDegeneracy`] can only
//! surface once the rollback has finished and the Greeks stencil is read.
//!
//! The [`ensure!`](crate::ensure) and [`ensure_post!`](crate::ensure_post)
//! macros are the short form used at call sites.

use thiserror::Error;

/// The top-level error type used throughout lattice-greeks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A structural argument is out of range (step count, step duration,
    /// node index, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A market input lies outside its mathematical domain (non-positive
    /// spot, negative volatility, non-positive time to maturity, ...).
    #[error("domain error: {0}")]
    Domain(String),

    /// The payoff is not a plain-vanilla call or put.
    #[error("unsupported payoff: {0}")]
    UnsupportedPayoff(String),

    /// A finite-difference denominator vanished, so the Greeks cannot be
    /// computed for the given inputs.
    #[error("numerical degeneracy: {0}")]
    NumericalDegeneracy(String),

    /// An internal postcondition failed after a computation.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Invalid calendar date.
    #[error("date error: {0}")]
    Date(String),
}

/// Field-less discriminant of [`Error`], convenient for matching on the
/// taxonomy without caring about the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::InvalidArgument`].
    InvalidArgument,
    /// See [`Error::Domain`].
    Domain,
    /// See [`Error::UnsupportedPayoff`].
    UnsupportedPayoff,
    /// See [`Error::NumericalDegeneracy`].
    NumericalDegeneracy,
    /// See [`Error::Postcondition`].
    Postcondition,
    /// See [`Error::Date`].
    Date,
}

impl Error {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::Domain(_) => ErrorKind::Domain,
            Error::UnsupportedPayoff(_) => ErrorKind::UnsupportedPayoff,
            Error::NumericalDegeneracy(_) => ErrorKind::NumericalDegeneracy,
            Error::Postcondition(_) => ErrorKind::Postcondition,
            Error::Date(_) => ErrorKind::Date,
        }
    }
}

/// Shorthand `Result` type used throughout lattice-greeks.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::$kind(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lg_core::{ensure, errors::{ErrorKind, Result}};
/// fn positive(x: f64) -> Result<f64> {
///     ensure!(x > 0.0, Domain, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert_eq!(positive(-1.0).unwrap_err().kind(), ErrorKind::Domain);
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

/// Returns `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lg_core::{ensure_post, errors::Result};
/// fn halve(n: usize) -> Result<usize> {
///     let h = n / 2;
///     ensure_post!(h * 2 == n, "{n} is odd");
///     Ok(h)
/// }
/// assert!(halve(4).is_ok());
/// assert!(halve(3).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(format!($($msg)*)));
        }
    };
}
