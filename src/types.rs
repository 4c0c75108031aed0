//! Core types for Boys function computation.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::fmt;

use crate::algo::constants::{
    FULL_RANGE_TURNOVER, FULL_RANGE_TURNOVER_OFFSET, RANGE_LIMITED_TURNOVER,
    RANGE_LIMITED_TURNOVER_OFFSET, SMALL_ORDER_LIMIT,
};
use crate::machine::BoysFloat;

/// Evaluation path taken for one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Power series for F_M, then downward recurrence to F_0.
    Series,
    /// Closed-form F_0 via the error function, then upward recurrence.
    Recurrence,
    /// t·lower² is past the underflow bound; every order was set to zero.
    Underflow,
}

impl Regime {
    /// Regime for the full-range integral over [0, 1].
    #[inline]
    pub(crate) fn full_range<T: BoysFloat>(m: usize, t: T) -> Regime {
        let turnover = if m < SMALL_ORDER_LIMIT {
            m as f64 + FULL_RANGE_TURNOVER_OFFSET
        } else {
            FULL_RANGE_TURNOVER
        };
        Regime::select(t, turnover)
    }

    /// Regime for the integral over [lower, 1]. The two-exponential series
    /// converges a little slower, so it hands over earlier.
    #[inline]
    pub(crate) fn range_limited<T: BoysFloat>(m: usize, t: T) -> Regime {
        let turnover = if m < SMALL_ORDER_LIMIT {
            m as f64 + RANGE_LIMITED_TURNOVER_OFFSET
        } else {
            RANGE_LIMITED_TURNOVER
        };
        Regime::select(t, turnover)
    }

    #[inline]
    fn select<T: BoysFloat>(t: T, turnover: f64) -> Regime {
        if t < T::from_f64(turnover) {
            Regime::Series
        } else {
            Regime::Recurrence
        }
    }
}

/// Result of a sequence computation, returned by `_seq` functions
/// (e.g., [`boys_seq`](crate::boys_seq)).
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq)]
pub struct BoysResult<T: BoysFloat> {
    /// F_0(t), F_1(t), ..., F_M(t).
    pub values: Vec<T>,
    /// Path the evaluation took.
    pub regime: Regime,
}

/// Error type for Boys function computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Output slice is empty; it needs room for at least F_0.
    EmptyOutput,
    /// Argument t is negative, NaN, or infinite.
    InvalidArgument,
    /// Lower integration bound is outside [0, 1] or NaN.
    InvalidLowerBound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyOutput => {
                write!(f, "empty output: the buffer must hold at least one order")
            }
            Error::InvalidArgument => {
                write!(f, "invalid argument: t must be finite and non-negative")
            }
            Error::InvalidLowerBound => {
                write!(f, "invalid lower bound: must lie in [0, 1]")
            }
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_range_turnover_points() {
        assert_eq!(Regime::full_range(0, 1.49), Regime::Series);
        assert_eq!(Regime::full_range(0, 1.5), Regime::Recurrence);
        assert_eq!(Regime::full_range(2, 3.49), Regime::Series);
        assert_eq!(Regime::full_range(2, 3.5), Regime::Recurrence);
        assert_eq!(Regime::full_range(3, 4.99), Regime::Series);
        assert_eq!(Regime::full_range(40, 5.0), Regime::Recurrence);
        assert_eq!(Regime::full_range(7, 0.0), Regime::Series);
    }

    #[test]
    fn range_limited_turnover_points() {
        assert_eq!(Regime::range_limited(0, 0.49), Regime::Series);
        assert_eq!(Regime::range_limited(0, 0.5), Regime::Recurrence);
        assert_eq!(Regime::range_limited(2, 2.5), Regime::Recurrence);
        assert_eq!(Regime::range_limited(3, 3.99), Regime::Series);
        assert_eq!(Regime::range_limited(3, 4.0), Regime::Recurrence);
    }

    #[test]
    fn error_messages() {
        extern crate std;
        use std::string::ToString;
        assert!(Error::EmptyOutput.to_string().starts_with("empty output"));
        assert!(Error::InvalidLowerBound.to_string().contains("[0, 1]"));
    }
}
