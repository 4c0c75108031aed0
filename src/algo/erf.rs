//! Error function and complementary error function for any `BoysFloat`.
//!
//! Used by the precisions that have no libm counterpart. For x >= 0:
//!
//! - x < 2.5: the positive-term Maclaurin series
//!   erf(x) = (2/√π) e^(-x²) Σ 2ⁿ x^(2n+1) / (1·3·…·(2n+1)),
//!   which has no cancellation; erfc = 1 − erf loses at most ~4 digits here.
//! - x >= 2.5: the Laplace continued fraction
//!   erfc(x) = e^(-x²) / (√π (x + (1/2)/(x + 1/(x + (3/2)/(x + …))))),
//!   evaluated forward with the modified Lentz method; erf = 1 − erfc.

use crate::algo::constants::{ERFC_MAX_FRACTION_TERMS, ERF_MAX_SERIES_TERMS, ERF_SERIES_LIMIT};
use crate::machine::BoysFloat;

/// erf(x).
pub(crate) fn erf<T: BoysFloat>(x: T) -> T {
    if x < T::ZERO {
        return -erf(-x);
    }
    if x < T::from_f64(ERF_SERIES_LIMIT) {
        erf_series(x)
    } else {
        T::ONE - erfc_continued_fraction(x)
    }
}

/// erfc(x).
pub(crate) fn erfc<T: BoysFloat>(x: T) -> T {
    if x < T::ZERO {
        return T::from_f64(2.0) - erfc(-x);
    }
    if x < T::from_f64(ERF_SERIES_LIMIT) {
        T::ONE - erf_series(x)
    } else {
        erfc_continued_fraction(x)
    }
}

/// Caller guarantees `x >= 0`.
fn erf_series<T: BoysFloat>(x: T) -> T {
    let two = T::from_f64(2.0);
    let x2 = x * x;
    let ratio = two * x2;

    let mut term = x;
    let mut sum = x;
    let mut denom = T::ONE;
    for _ in 0..ERF_MAX_SERIES_TERMS {
        denom += two;
        term *= ratio / denom;
        sum += term;
        if term <= T::TOLERANCE * sum {
            break;
        }
    }
    // 2/√π = 1 / (√π/2)
    sum * (-x2).exp() / T::FRAC_SQRT_PI_2
}

/// Caller guarantees `x > 0`; intended for `x >= 2.5`.
fn erfc_continued_fraction<T: BoysFloat>(x: T) -> T {
    let mut f = x;
    let mut c = x;
    let mut d = T::ZERO;
    let mut a = T::ZERO;
    for _ in 0..ERFC_MAX_FRACTION_TERMS {
        a += T::HALF;
        d = T::ONE / (x + a * d);
        c = x + a / c;
        let delta = c * d;
        f *= delta;
        if (delta - T::ONE).abs() <= T::TOLERANCE {
            break;
        }
    }
    // √π = 2 · (√π/2)
    (-(x * x)).exp() / (T::from_f64(2.0) * T::FRAC_SQRT_PI_2 * f)
}
