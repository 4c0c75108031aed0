//! Range-limited Boys function upper interface.
//!
//! Evaluates ∫_lower^1 u^(2m) e^(-t u²) du for m = 0..M, the piece needed by
//! range-separated (short-range/long-range) interaction kernels.

use crate::algo::series::boys_range_series;
use crate::algo::upward::boys_range_upward;
use crate::fm::{boys_full, check_argument};
use crate::machine::BoysFloat;
use crate::types::{Error, Regime};

/// Compute the range-limited integrals of orders 0..M into the provided slice.
///
/// A zero lower bound (or one whose square underflows) is the full-range
/// problem and is handed to [`boys_full`] unchanged.
///
/// With the `range-cutoff` feature, t·lower² beyond
/// [`BoysFloat::UNDERFLOW_BOUND`] zeroes the slice and reports
/// [`Regime::Underflow`]; every order is then below the smallest
/// representable magnitude of the working precision.
///
/// # Errors
/// - `EmptyOutput`: `f` is empty
/// - `InvalidArgument`: t < 0, NaN, or infinite
/// - `InvalidLowerBound`: lower outside [0, 1] or NaN
#[inline]
pub(crate) fn boys_range_limited<T: BoysFloat>(
    t: T,
    lower: T,
    f: &mut [T],
) -> Result<Regime, Error> {
    if f.is_empty() {
        return Err(Error::EmptyOutput);
    }
    check_argument(t)?;
    if !(lower >= T::ZERO && lower <= T::ONE) {
        return Err(Error::InvalidLowerBound);
    }

    let lower2 = lower * lower;
    if lower2 == T::ZERO {
        return boys_full(t, f);
    }

    if cfg!(feature = "range-cutoff") && t * lower2 > T::UNDERFLOW_BOUND {
        f.fill(T::ZERO);
        return Ok(Regime::Underflow);
    }

    let regime = Regime::range_limited(f.len() - 1, t);
    match regime {
        Regime::Series => boys_range_series(t, lower, f),
        _ => boys_range_upward(t, lower, f),
    }
    Ok(regime)
}
