//! Direct centered running mean.
//!
//! ## Purpose
//!
//! This module computes the centered moving average in a single pass over
//! the data, without building any matrix. It is the reference result the
//! matrix-based pipelines are checked against and the baseline they are
//! timed against.
//!
//! ## Design notes
//!
//! * **Running sum**: Both window edges only move forward, so each value is
//!   added once and removed once. Total cost is `O(n)` regardless of `k`.
//! * **Policy-driven edges**: The normalization and the missing marker come
//!   from `EdgePolicy`, shared with the matrix pipelines.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * With `k = 0` the output reproduces the input exactly.
//! * Input is finite; a non-finite value would stay in the running sum for
//!   every later window.
//!
//! ## Non-goals
//!
//! * Results are not bit-identical to the matrix route; summation order
//!   differs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::weights::EdgePolicy;
use crate::primitives::errors::BandMeanError;
use crate::primitives::window::CenteredWindow;

/// Centered running mean of half-width `k`.
///
/// # Errors
///
/// `EmptyInput` when `x` is empty, `InvalidNumericValue` for non-finite
/// data, `InvalidArgument` when `k >= x.len()`.
pub fn direct_running_mean<T: Float>(
    x: &[T],
    k: usize,
    policy: EdgePolicy,
) -> Result<Vec<Option<T>>, BandMeanError> {
    Validator::validate_non_empty(x)?;
    Validator::validate_finite(x)?;
    let n = x.len();
    Validator::validate_dimensions(n, k)?;

    if k == 0 {
        return Ok(x.iter().map(|&v| Some(v)).collect());
    }

    let window = CenteredWindow::new(k);
    let mut out = Vec::with_capacity(n);

    // Current window is x[lo..hi].
    let mut sum = T::zero();
    let mut lo = 0;
    let mut hi = 0;

    for i in 0..n {
        let bounds = window.bounds(i, n);
        while hi <= bounds.right {
            sum = sum + x[hi];
            hi += 1;
        }
        while lo < bounds.left {
            sum = sum - x[lo];
            lo += 1;
        }
        out.push(policy.weight(&window, i, n).map(|w: T| sum * w));
    }

    Ok(out)
}
