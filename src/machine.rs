//! Precision constants and the `BoysFloat` trait.
//!
//! Each implementation fixes the working precision of the kernels: the
//! arithmetic type, the transcendental function set, and the convergence
//! floor of the power series.

#![allow(clippy::excessive_precision)]

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;

use crate::algo::erf;
use crate::double_double::DoubleDouble;

/// Floating-point trait for Boys function computation.
///
/// Implemented for `f64`, [`DoubleDouble`], and `f128` (feature `quad`).
pub trait BoysFloat:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const HALF: Self;
    /// √π / 2, correct to the full width of the type.
    const FRAC_SQRT_PI_2: Self;
    /// Series terms at or below this value end the power-series summation.
    const CONVERGENCE_FLOOR: Self;
    /// Relative termination tolerance of the erf/erfc expansions.
    const TOLERANCE: Self;
    /// Largest t·lower² for which erfc(lower·√t) is still representable.
    const UNDERFLOW_BOUND: Self;

    /// Conversion from f64. Exact for every supported type.
    fn from_f64(x: f64) -> Self;

    fn exp(self) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn erf(self) -> Self;
    fn erfc(self) -> Self;
    fn is_finite(self) -> bool;
}

impl BoysFloat for f64 {
    const ZERO: f64 = 0.0;
    const ONE: f64 = 1.0;
    const HALF: f64 = 0.5;
    const FRAC_SQRT_PI_2: f64 = 0.8862269254527580136490837416705725913987747280611935641069;
    const CONVERGENCE_FLOOR: f64 = 1.0e-16;
    const TOLERANCE: f64 = f64::EPSILON;
    const UNDERFLOW_BOUND: f64 = 705.0;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn exp(self) -> f64 {
        Float::exp(self)
    }
    #[inline]
    fn sqrt(self) -> f64 {
        Float::sqrt(self)
    }
    #[inline]
    fn abs(self) -> f64 {
        Float::abs(self)
    }
    #[inline]
    fn erf(self) -> f64 {
        libm::erf(self)
    }
    #[inline]
    fn erfc(self) -> f64 {
        libm::erfc(self)
    }
    #[inline]
    fn is_finite(self) -> bool {
        Float::is_finite(self)
    }
}

impl BoysFloat for DoubleDouble {
    const ZERO: DoubleDouble = DoubleDouble::new(0.0, 0.0);
    const ONE: DoubleDouble = DoubleDouble::new(0.0, 1.0);
    const HALF: DoubleDouble = DoubleDouble::new(0.0, 0.5);
    const FRAC_SQRT_PI_2: DoubleDouble =
        DoubleDouble::new(-3.8332932499128993e-17, 0.886226925452758);
    const CONVERGENCE_FLOOR: DoubleDouble = DoubleDouble::new(0.0, 1.0e-20);
    const TOLERANCE: DoubleDouble = DoubleDouble::new(0.0, 1.0e-32);
    // Same exponent range as f64.
    const UNDERFLOW_BOUND: DoubleDouble = DoubleDouble::new(0.0, 705.0);

    #[inline]
    fn from_f64(x: f64) -> DoubleDouble {
        DoubleDouble::from_f64(x)
    }
    #[inline]
    fn exp(self) -> DoubleDouble {
        DoubleDouble::exp(self)
    }
    #[inline]
    fn sqrt(self) -> DoubleDouble {
        DoubleDouble::sqrt(self)
    }
    #[inline]
    fn abs(self) -> DoubleDouble {
        DoubleDouble::abs(self)
    }
    #[inline]
    fn erf(self) -> DoubleDouble {
        erf::erf(self)
    }
    #[inline]
    fn erfc(self) -> DoubleDouble {
        erf::erfc(self)
    }
    #[inline]
    fn is_finite(self) -> bool {
        self.hi.is_finite() && self.lo.is_finite()
    }
}

#[cfg(feature = "quad")]
impl BoysFloat for f128 {
    const ZERO: f128 = 0.0;
    const ONE: f128 = 1.0;
    const HALF: f128 = 0.5;
    const FRAC_SQRT_PI_2: f128 = 0.8862269254527580136490837416705725913987747280611935641069;
    const CONVERGENCE_FLOOR: f128 = 1.0e-34;
    // A few ulps near 1; the continued fraction cannot settle closer.
    const TOLERANCE: f128 = 1.0e-33;
    const UNDERFLOW_BOUND: f128 = 11350.0;

    #[inline]
    fn from_f64(x: f64) -> f128 {
        x as f128
    }
    #[inline]
    fn exp(self) -> f128 {
        f128::exp(self)
    }
    #[inline]
    fn sqrt(self) -> f128 {
        f128::sqrt(self)
    }
    #[inline]
    fn abs(self) -> f128 {
        f128::abs(self)
    }
    #[inline]
    fn erf(self) -> f128 {
        erf::erf(self)
    }
    #[inline]
    fn erfc(self) -> f128 {
        erf::erfc(self)
    }
    #[inline]
    fn is_finite(self) -> bool {
        f128::is_finite(self)
    }
}
