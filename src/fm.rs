//! Full-range Boys function upper interface.
//!
//! Validates the argument, selects the regime, and dispatches to
//! `boys_series` (t below the turnover point) or `boys_upward`.

use crate::algo::series::boys_series;
use crate::algo::upward::boys_upward;
use crate::machine::BoysFloat;
use crate::types::{Error, Regime};

/// Compute F_0(t), ..., F_M(t) into the provided slice, M = `f.len() - 1`.
///
/// # Errors
/// - `EmptyOutput`: `f` is empty
/// - `InvalidArgument`: t < 0, NaN, or infinite
#[inline]
pub(crate) fn boys_full<T: BoysFloat>(t: T, f: &mut [T]) -> Result<Regime, Error> {
    if f.is_empty() {
        return Err(Error::EmptyOutput);
    }
    check_argument(t)?;

    let regime = Regime::full_range(f.len() - 1, t);
    match regime {
        Regime::Series => boys_series(t, f),
        _ => boys_upward(t, f),
    }
    Ok(regime)
}

/// `t` must be finite and non-negative. NaN fails the comparison.
#[inline]
pub(crate) fn check_argument<T: BoysFloat>(t: T) -> Result<(), Error> {
    if !(t >= T::ZERO) || !t.is_finite() {
        return Err(Error::InvalidArgument);
    }
    Ok(())
}
