//! Small arithmetic helpers shared by the kernels.

use crate::machine::BoysFloat;

/// `base^exponent` by repeated squaring.
///
/// One multiplication per set bit of `exponent` plus one squaring per bit,
/// so lower^(2m) costs O(log m) products and no general `powf`.
#[inline]
pub(crate) fn pow_uint<T: BoysFloat>(mut base: T, mut exponent: usize) -> T {
    let mut result = T::ONE;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result *= base;
        }
        exponent >>= 1;
        if exponent > 0 {
            base *= base;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::double_double::DoubleDouble;

    #[test]
    fn pow_uint_small_integers() {
        assert_eq!(pow_uint(3.0_f64, 0), 1.0);
        assert_eq!(pow_uint(3.0_f64, 1), 3.0);
        assert_eq!(pow_uint(3.0_f64, 5), 243.0);
        assert_eq!(pow_uint(2.0_f64, 10), 1024.0);
        assert_eq!(pow_uint(0.5_f64, 6), 0.015625);
    }

    #[test]
    fn pow_uint_zero_base() {
        assert_eq!(pow_uint(0.0_f64, 0), 1.0);
        assert_eq!(pow_uint(0.0_f64, 7), 0.0);
    }

    #[test]
    fn pow_uint_matches_repeated_multiplication() {
        let base = 0.81_f64;
        let mut want = 1.0;
        for n in 0..40 {
            let got = pow_uint(base, n);
            assert!((got - want).abs() <= 1e-14 * want, "n={n}");
            want *= base;
        }
    }

    #[test]
    fn pow_uint_double_double() {
        let x = DoubleDouble::from_f64(1.0) / DoubleDouble::from_f64(3.0);
        let got = pow_uint(x, 4) * DoubleDouble::from_f64(81.0);
        let err = (got - DoubleDouble::from_f64(1.0)).abs().hi;
        assert!(err < 1e-30, "err = {err:e}");
    }
}
