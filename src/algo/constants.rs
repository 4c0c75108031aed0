//! Shared constants of the Boys function kernels.
//!
//! The turnover points are empirical. They keep the power series short and
//! confine the upward recurrence to arguments large enough to damp its
//! rounding error; changing them degrades precision without any visible
//! failure.

/// Orders below this use an order-dependent turnover point.
pub(crate) const SMALL_ORDER_LIMIT: usize = 3;

/// Full range: turnover is m + 1.5 for small orders...
pub(crate) const FULL_RANGE_TURNOVER_OFFSET: f64 = 1.5;
/// ...and 5 otherwise.
pub(crate) const FULL_RANGE_TURNOVER: f64 = 5.0;

/// Range limited: turnover is m + 0.5 for small orders...
pub(crate) const RANGE_LIMITED_TURNOVER_OFFSET: f64 = 0.5;
/// ...and 4 otherwise.
pub(crate) const RANGE_LIMITED_TURNOVER: f64 = 4.0;

/// erf switches from the Maclaurin series to the erfc continued fraction here.
pub(crate) const ERF_SERIES_LIMIT: f64 = 2.5;

/// Iteration caps for the erf/erfc expansions. Never reached for x >= 0
/// at the supported precisions.
pub(crate) const ERF_MAX_SERIES_TERMS: usize = 500;
pub(crate) const ERFC_MAX_FRACTION_TERMS: usize = 10_000;
