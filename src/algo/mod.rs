//! Internal algorithm modules for Boys function computation.
//!
//! All functions are `pub(crate)`; they are not part of the public API.
//!
//! # Conventions
//!
//! Kernels take the output slice and derive the highest order M from its
//! length. They have no error channel: the argument checks live in the upper
//! interface ([`crate::fm`], [`crate::fm_range`]), and the kernels only assume
//! what those checks establish. An empty slice is a no-op.

pub(crate) mod constants;
pub(crate) mod erf;

// Below the turnover point
pub(crate) mod series;

// At and above the turnover point
pub(crate) mod upward;
