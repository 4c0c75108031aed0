//! Closed-form seed with upward recurrence.
//!
//! For arguments past the turnover point F_0 comes from the error function
//! and higher orders follow from
//!
//! ```text
//! F_m(t) = [ (2m − 1) F_{m−1}(t) − e^(-t) ] / 2t
//! ```
//!
//! Rounding error is multiplied by (2m − 1)/2t per step, so the recurrence is
//! only run where t is large enough to keep that factor in check.

use crate::machine::BoysFloat;

/// F_0(t)..F_M(t) over [0, 1] into `f`, where M = `f.len() - 1`.
///
/// F_0(t) = (√π / 2) · erf(√t) / √t. Caller guarantees `t > 0`.
pub(crate) fn boys_upward<T: BoysFloat>(t: T, f: &mut [T]) {
    if f.is_empty() {
        return;
    }

    let tt = t.sqrt();
    f[0] = T::FRAC_SQRT_PI_2 / tt * tt.erf();
    if f.len() > 1 {
        let e = (-t).exp();
        let b = T::HALF / t;
        for i in 1..f.len() {
            f[i] = b * (T::from_f64((2 * i - 1) as f64) * f[i - 1] - e);
        }
    }
}

/// ∫_lower^1 u^(2i) e^(-t u²) du for i = 0..M into `f`.
///
/// The seed uses erfc(lower·√t) − erfc(√t) rather than the erf difference;
/// both arguments may be large, where erf rounds to 1 and the difference
/// vanishes. The boundary term at u = lower gains a factor lower² per order.
/// Caller guarantees `t > 0`.
pub(crate) fn boys_range_upward<T: BoysFloat>(t: T, lower: T, f: &mut [T]) {
    if f.is_empty() {
        return;
    }

    let lower2 = lower * lower;
    let tt = t.sqrt();
    let mut val = T::FRAC_SQRT_PI_2 / tt * ((lower * tt).erfc() - tt.erfc());
    f[0] = val;
    if f.len() > 1 {
        let e = (-t).exp();
        let mut e1 = (-(t * lower2)).exp() * lower;
        let b = T::HALF / t;
        for i in 0..f.len() - 1 {
            val = b * (T::from_f64((2 * i + 1) as f64) * val - e + e1);
            e1 *= lower2;
            f[i + 1] = val;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::series::{boys_range_series, boys_series};
    use crate::double_double::DoubleDouble;
    use crate::types::Regime;

    fn turnover(m: usize) -> f64 {
        if m < 3 {
            m as f64 + 1.5
        } else {
            5.0
        }
    }

    #[test]
    fn large_argument_reference() {
        // F_6(7), F_8(12), F_10(30) from quadrature
        for (m, t, want) in [
            (6, 7.0, 0.0002895574630354076),
            (8, 12.0, 4.148441054539184e-06),
            (10, 30.0, 1.7519749414066368e-10),
        ] {
            let mut buf = [0.0; 11];
            let f = &mut buf[..=m];
            boys_upward(t, f);
            assert!((f[m] - want).abs() < 1e-14 * want, "F_{m}({t}) = {}", f[m]);
        }
    }

    #[test]
    fn branches_agree_at_turnover() {
        for m in 0..=8 {
            let t = turnover(m);
            assert_eq!(Regime::full_range(m, t), Regime::Recurrence);
            let mut series = [0.0; 9];
            let mut upward = [0.0; 9];
            boys_series(t, &mut series[..=m]);
            boys_upward(t, &mut upward[..=m]);
            for (i, (s, u)) in series[..=m].iter().zip(&upward[..=m]).enumerate() {
                assert!((s - u).abs() <= 1e-14 * u, "m={m} i={i}: {s} vs {u}");
            }
        }
    }

    #[test]
    fn double_double_branches_agree_at_turnover() {
        for m in [0, 1, 2, 5, 12] {
            let t = DoubleDouble::from_f64(turnover(m));
            let mut series = [DoubleDouble::default(); 13];
            let mut upward = [DoubleDouble::default(); 13];
            boys_series(t, &mut series[..=m]);
            boys_upward(t, &mut upward[..=m]);
            for (i, (s, u)) in series[..=m].iter().zip(&upward[..=m]).enumerate() {
                let err = ((*s - *u) / *u).abs().hi;
                assert!(err < 1e-18, "m={m} i={i}: {err:e}");
            }
        }
    }

    #[test]
    fn range_branches_agree_at_turnover() {
        for m in 0..=5 {
            let t = if m < 3 { m as f64 + 0.5 } else { 4.0 };
            for lower in [0.2, 0.6, 0.95] {
                let mut series = [0.0; 6];
                let mut upward = [0.0; 6];
                boys_range_series(t, lower, &mut series[..=m]);
                boys_range_upward(t, lower, &mut upward[..=m]);
                for (i, (s, u)) in series[..=m].iter().zip(&upward[..=m]).enumerate() {
                    assert!(
                        (s - u).abs() <= 1e-12 * u,
                        "m={m} lower={lower} i={i}: {s} vs {u}"
                    );
                }
            }
        }
    }

    #[test]
    fn range_upward_reference() {
        // ∫_0.7^1 u^8 e^(-6u²) du and ∫_0.9^1 u² e^(-20u²) du
        let mut f = [0.0; 5];
        boys_range_upward(6.0, 0.7, &mut f);
        assert!((f[4] - 0.0009866539817026188).abs() < 1e-14 * 0.0009866539817026188);

        let mut f = [0.0; 2];
        boys_range_upward(20.0, 0.9, &mut f);
        assert!((f[1] - 2.0824411712712762e-09).abs() < 1e-13 * 2.0824411712712762e-09);
    }
}
