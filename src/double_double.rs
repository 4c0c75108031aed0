//! Double-double arithmetic.
//!
//! A value is the unevaluated sum `hi + lo` of two f64 with
//! `|lo| <= ulp(hi) / 2`, giving roughly 106 significant bits. This is the
//! extended-precision tier of the kernels.

#![allow(clippy::excessive_precision)]

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;

/// ln 2 split into leading and trailing parts.
const LN2: DoubleDouble = DoubleDouble::new(2.319046813846299558e-17, 6.931471805599452862e-01);

/// exp(x) is zero below this argument, even as a subnormal.
const EXP_UNDERFLOW: f64 = -745.2;
/// exp(x) overflows above this argument.
const EXP_OVERFLOW: f64 = 709.8;
/// Squarings applied after the Taylor step; the reduced argument is scaled by 2^-10.
const EXP_SQUARINGS: usize = 10;

/// Number represented as `hi + lo`.
///
/// Field order makes the derived `PartialOrd` compare `hi` first, which is
/// the correct ordering for normalized values.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct DoubleDouble {
    pub hi: f64,
    pub lo: f64,
}

/// s + e = a + b exactly.
#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// s + e = a + b exactly, provided |a| >= |b|.
#[inline]
fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let e = b - (s - a);
    (s, e)
}

/// p + e = a * b exactly.
#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    (p, fma(a, b, -p))
}

#[cfg(feature = "std")]
#[inline]
fn fma(a: f64, b: f64, c: f64) -> f64 {
    Float::mul_add(a, b, c)
}

// Error-free products need a correctly rounded FMA, so no_std goes through
// libm's software implementation.
#[cfg(not(feature = "std"))]
#[inline]
fn fma(a: f64, b: f64, c: f64) -> f64 {
    libm::fma(a, b, c)
}

impl DoubleDouble {
    /// Build from a trailing and a leading part. The pair must already be
    /// normalized.
    #[inline]
    pub const fn new(lo: f64, hi: f64) -> DoubleDouble {
        DoubleDouble { hi, lo }
    }

    #[inline]
    pub const fn from_f64(x: f64) -> DoubleDouble {
        DoubleDouble { hi: x, lo: 0.0 }
    }

    /// Round to the nearest f64.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    #[inline]
    pub fn abs(self) -> DoubleDouble {
        if self.hi < 0.0 {
            -self
        } else {
            self
        }
    }

    #[inline]
    fn from_sum(a: f64, b: f64) -> DoubleDouble {
        let (hi, lo) = fast_two_sum(a, b);
        DoubleDouble::new(lo, hi)
    }

    #[inline]
    fn mul_f64(self, b: f64) -> DoubleDouble {
        let (p, e) = two_prod(self.hi, b);
        DoubleDouble::from_sum(p, e + self.lo * b)
    }

    /// Multiply by 2^k.
    #[inline]
    fn ldexp(self, k: i32) -> DoubleDouble {
        DoubleDouble::new(libm::scalbn(self.lo, k), libm::scalbn(self.hi, k))
    }

    /// Square root: one Newton correction of the f64 reciprocal square root.
    pub fn sqrt(self) -> DoubleDouble {
        if self.hi <= 0.0 {
            return if self.hi == 0.0 {
                DoubleDouble::default()
            } else {
                DoubleDouble::from_f64(f64::NAN)
            };
        }
        let x = 1.0 / Float::sqrt(self.hi);
        let ax = self.hi * x;
        let (p, e) = two_prod(ax, ax);
        let correction = (self - DoubleDouble::new(e, p)).hi * (x * 0.5);
        let (hi, lo) = two_sum(ax, correction);
        DoubleDouble::new(lo, hi)
    }

    /// Exponential function.
    ///
    /// Reduces x = k·ln2 + r with |r| <= ln2/2, evaluates expm1(r / 2^10) by
    /// its Taylor series, undoes the scaling with `s <- s·(s + 2)`, and
    /// multiplies by 2^k.
    pub fn exp(self) -> DoubleDouble {
        if self.hi < EXP_UNDERFLOW {
            return DoubleDouble::default();
        }
        if self.hi > EXP_OVERFLOW {
            return DoubleDouble::from_f64(f64::INFINITY);
        }
        if self.hi == 0.0 {
            return DoubleDouble::from_f64(1.0);
        }

        let k = Float::floor(self.hi / LN2.hi + 0.5);
        let r = (self - LN2.mul_f64(k)).ldexp(-(EXP_SQUARINGS as i32));

        let mut term = r;
        let mut sum = r;
        let mut n = 1.0;
        while n < 30.0 {
            n += 1.0;
            term = term * r / DoubleDouble::from_f64(n);
            sum += term;
            if Float::abs(term.hi) <= 1.0e-34 * Float::abs(sum.hi) {
                break;
            }
        }

        let two = DoubleDouble::from_f64(2.0);
        for _ in 0..EXP_SQUARINGS {
            sum = sum * (sum + two);
        }
        (sum + DoubleDouble::from_f64(1.0)).ldexp(k as i32)
    }
}

impl From<f64> for DoubleDouble {
    #[inline]
    fn from(x: f64) -> DoubleDouble {
        DoubleDouble::from_f64(x)
    }
}

impl Neg for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn neg(self) -> DoubleDouble {
        DoubleDouble::new(-self.lo, -self.hi)
    }
}

impl Add for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn add(self, rhs: DoubleDouble) -> DoubleDouble {
        let (s1, s2) = two_sum(self.hi, rhs.hi);
        let (t1, t2) = two_sum(self.lo, rhs.lo);
        let (s1, s2) = fast_two_sum(s1, s2 + t1);
        DoubleDouble::from_sum(s1, s2 + t2)
    }
}

impl Sub for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn sub(self, rhs: DoubleDouble) -> DoubleDouble {
        self + (-rhs)
    }
}

impl Mul for DoubleDouble {
    type Output = DoubleDouble;

    #[inline]
    fn mul(self, rhs: DoubleDouble) -> DoubleDouble {
        let (p, e) = two_prod(self.hi, rhs.hi);
        DoubleDouble::from_sum(p, e + (self.hi * rhs.lo + self.lo * rhs.hi))
    }
}

impl Div for DoubleDouble {
    type Output = DoubleDouble;

    /// Long division: three f64 quotient digits, two of them corrections.
    #[inline]
    fn div(self, rhs: DoubleDouble) -> DoubleDouble {
        let q1 = self.hi / rhs.hi;
        let r = self - rhs.mul_f64(q1);
        let q2 = r.hi / rhs.hi;
        let r = r - rhs.mul_f64(q2);
        let q3 = r.hi / rhs.hi;
        DoubleDouble::from_sum(q1, q2) + DoubleDouble::from_f64(q3)
    }
}

impl AddAssign for DoubleDouble {
    #[inline]
    fn add_assign(&mut self, rhs: DoubleDouble) {
        *self = *self + rhs;
    }
}

impl SubAssign for DoubleDouble {
    #[inline]
    fn sub_assign(&mut self, rhs: DoubleDouble) {
        *self = *self - rhs;
    }
}

impl MulAssign for DoubleDouble {
    #[inline]
    fn mul_assign(&mut self, rhs: DoubleDouble) {
        *self = *self * rhs;
    }
}

impl DivAssign for DoubleDouble {
    #[inline]
    fn div_assign(&mut self, rhs: DoubleDouble) {
        *self = *self / rhs;
    }
}
