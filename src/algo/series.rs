//! Power-series paths with downward recurrence.
//!
//! Integrating by parts,
//!
//! ```text
//! ∫_l^1 u^(2m) e^(-t u²) du = [ ½e^(-t) − ½e^(-t l²) l^(2m+1) + t ∫_l^1 u^(2m+2) e^(-t u²) du ] / (m + ½)
//! ```
//!
//! Unrolling the recursion in m gives a series in t/(b+1), t/(b+1)(b+2), …
//! with b = m + ½ that converges quickly while t is below the turnover
//! point. Read downward, the same relation gives F_{m−1} from F_m, which is
//! stable because every step divides by a positive, decreasing b.

use crate::machine::BoysFloat;
use crate::utils::pow_uint;

/// F_0(t)..F_M(t) over [0, 1] into `f`, where M = `f.len() - 1`.
///
/// With b = M + ½,
///
/// ```text
///          e^(-t)  ⎡      t        t²                t³              ⎤
/// F_M(t) = ------ ⎢ 1 + ----- + ------------ + ------------------- + …⎥
///            2b   ⎣     b + 1   (b+1)(b+2)    (b+1)(b+2)(b+3)        ⎦
/// ```
///
/// At t = 0 only the leading term survives and F_i = 1/(2i + 1).
pub(crate) fn boys_series<T: BoysFloat>(t: T, f: &mut [T]) {
    let Some(m) = f.len().checked_sub(1) else {
        return;
    };

    let mut b = T::from_f64(m as f64 + 0.5);
    let e = T::HALF * (-t).exp();
    let mut x = e;
    let mut s = e;
    let mut bi = b + T::ONE;
    while x > T::CONVERGENCE_FLOOR {
        x *= t / bi;
        s += x;
        bi += T::ONE;
    }
    f[m] = s / b;

    for i in (1..=m).rev() {
        b -= T::ONE;
        f[i - 1] = (e + t * f[i]) / b;
    }
}

/// ∫_lower^1 u^(2i) e^(-t u²) du for i = 0..M into `f`.
///
/// Carries the boundary terms at u = 1 (`e`) and u = lower (`e1`, holding
/// lower^(2M+1)) side by side. Each series term is formed as
/// (e − e1·lower^(2k))·Π t/bᵢ so the difference of the two boundary terms is
/// taken before the product grows, which keeps lower → 1 from cancelling.
///
/// The order-i boundary term is rebuilt from order 0 on every downward
/// step, so orders whose lower^(2i+1) is representable keep it even when
/// lower^(2M+1) underflows. Caller guarantees `lower * lower > 0`.
pub(crate) fn boys_range_series<T: BoysFloat>(t: T, lower: T, f: &mut [T]) {
    let Some(m) = f.len().checked_sub(1) else {
        return;
    };

    let lower2 = lower * lower;
    let mut b = T::from_f64(m as f64 + 0.5);
    let e = T::HALF * (-t).exp();
    // Boundary term at u = lower for order 0; order i carries lower^(2i) more.
    let e1_base = T::HALF * (-(t * lower2)).exp() * lower;
    let e1 = e1_base * pow_uint(lower2, m);

    let x = e;
    let mut x1 = e1;
    let mut s = e - e1;
    let mut div = T::ONE;
    let mut delta = s;
    let mut bi = b + T::ONE;
    while delta.abs() > T::CONVERGENCE_FLOOR {
        div *= t / bi;
        x1 *= lower2;
        delta = (x - x1) * div;
        s += delta;
        bi += T::ONE;
    }

    let mut val = s / b;
    f[m] = val;
    for i in (1..=m).rev() {
        b -= T::ONE;
        // Rebuilt from order 0; dividing the order-M term back up fails
        // once lower^(2M+1) has underflowed.
        let e1 = e1_base * pow_uint(lower2, i - 1);
        val = (e - e1 + t * val) / b;
        f[i - 1] = val;
    }
}
