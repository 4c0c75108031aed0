//! Boys function kernels for Gaussian-basis molecular integrals.
//!
//! Evaluates the auxiliary integral
//!
//! ```text
//!           1
//! F_m(t) =  ∫  u^(2m) e^(-t u²) du
//!           0
//! ```
//!
//! for every order m = 0..M in one call, following Taketa, Huzinaga and
//! O-ohata, J. Phys. Soc. Jpn. 21, 2313 (1966). Below an order-dependent
//! turnover point the highest order is summed as a power series and the rest
//! follow by downward recurrence; above it F_0 comes from the error function
//! and the rest follow by upward recurrence.
//!
//! A range-limited variant integrates over [lower, 1] instead, for
//! range-separated Coulomb kernels.
//!
//! # Precision
//!
//! Every entry point is generic over [`BoysFloat`]:
//!
//! | Type | Series floor | erf/erfc |
//! |---|---|---|
//! | `f64` | 1e-16 | libm |
//! | [`DoubleDouble`] | 1e-20 | series / continued fraction |
//! | `f128` (feature `quad`, nightly) | 1e-34 | series / continued fraction |
//!
//! The wider types give guard digits against the error growth of the upward
//! recurrence at high order. That growth is worst at the turnover point
//! t = 5, where `f64` keeps about 14 digits at M = 10 and 9 at M = 20, and has
//! no correct digits left by M = 30. [`DoubleDouble`] is still good to about
//! 1e-18 at M = 30 and 1e-10 at M = 40; use it when high orders are needed.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "quad", feature(f128))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub(crate) mod algo;
pub mod double_double;
pub(crate) mod fm;
pub(crate) mod fm_range;
pub mod machine;
pub mod types;
pub(crate) mod utils;

pub use double_double::DoubleDouble;
pub use machine::BoysFloat;
#[cfg(feature = "alloc")]
pub use types::BoysResult;
pub use types::{Error, Regime};

#[cfg(feature = "alloc")]
use alloc::vec;

// ── Slice functions (no allocation) ──

/// Compute F_0(t), ..., F_M(t) into `out`, where M = `out.len() - 1`.
///
/// Every element of `out` is overwritten. Returns the path taken.
///
/// With `T = f64` the highest orders lose accuracy near t = 5 once M passes
/// about 15, and are meaningless past M = 30 (see the crate docs). Use
/// [`DoubleDouble`] there.
///
/// # Errors
/// - [`Error::EmptyOutput`] if `out` is empty
/// - [`Error::InvalidArgument`] if t is negative, NaN, or infinite
#[inline]
pub fn boys_into<T: BoysFloat>(t: T, out: &mut [T]) -> Result<Regime, Error> {
    fm::boys_full(t, out)
}

/// Compute ∫_lower^1 u^(2m) e^(-t u²) du for m = 0..M into `out`.
///
/// `lower = 0` gives exactly the output of [`boys_into`].
///
/// # Errors
/// - [`Error::EmptyOutput`] if `out` is empty
/// - [`Error::InvalidArgument`] if t is negative, NaN, or infinite
/// - [`Error::InvalidLowerBound`] if `lower` is outside [0, 1]
#[inline]
pub fn boys_range_into<T: BoysFloat>(t: T, lower: T, out: &mut [T]) -> Result<Regime, Error> {
    fm_range::boys_range_limited(t, lower, out)
}

// ── Sequence functions ──

/// Compute F_0(t), ..., F_m(t).
#[cfg(feature = "alloc")]
pub fn boys_seq<T: BoysFloat>(m: usize, t: T) -> Result<BoysResult<T>, Error> {
    let mut values = vec![T::ZERO; m + 1];
    let regime = fm::boys_full(t, &mut values)?;
    Ok(BoysResult { values, regime })
}

/// Compute the range-limited integrals of orders 0..=m.
#[cfg(feature = "alloc")]
pub fn boys_range_seq<T: BoysFloat>(m: usize, t: T, lower: T) -> Result<BoysResult<T>, Error> {
    let mut values = vec![T::ZERO; m + 1];
    let regime = fm_range::boys_range_limited(t, lower, &mut values)?;
    Ok(BoysResult { values, regime })
}

// ── Single-value convenience functions ──

/// Boys function F_m(t).
#[cfg(feature = "alloc")]
pub fn boys<T: BoysFloat>(m: usize, t: T) -> Result<T, Error> {
    boys_seq(m, t).map(|r| r.values[m])
}

/// Range-limited integral ∫_lower^1 u^(2m) e^(-t u²) du.
#[cfg(feature = "alloc")]
pub fn boys_range<T: BoysFloat>(m: usize, t: T, lower: T) -> Result<T, Error> {
    boys_range_seq(m, t, lower).map(|r| r.values[m])
}
