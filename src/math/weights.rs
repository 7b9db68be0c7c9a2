//! Per-position normalization weights for band sums.
//!
//! ## Purpose
//!
//! This module turns a running sum into a running mean. It produces, for
//! every output position, the weight that scales the band sum, or the
//! missing marker `None` where no weight is defined.
//!
//! ## Design notes
//!
//! * **Explicit missing marker**: `Option<T>` instead of NaN sentinels.
//! * **Strategy Pattern**: `EdgePolicy` selects how positions near the ends
//!   are treated.
//!
//! ## Key concepts
//!
//! * **Missing** (default): only positions with a full `2k + 1` window get
//!   `1 / (2k + 1)`; the first and last `k` positions are `None`.
//! * **Shrink**: every position gets `1 / len` where `len` is the length of
//!   its window clipped to the sequence.
//!
//! ## Invariants
//!
//! * The weight vector has length `n`.
//! * Under `Missing`, `None` appears exactly at `0..k` and `n-k..n`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::BandMeanError;
use crate::primitives::window::CenteredWindow;

/// Policy for positions whose centered window extends past the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgePolicy {
    /// Report the missing marker where the full window is unavailable.
    #[default]
    Missing,

    /// Average over the part of the window that lies inside the data.
    Shrink,
}

impl EdgePolicy {
    /// Weight for `center` under this policy, or `None` if undefined.
    #[inline]
    pub fn weight<T: Float>(
        &self,
        window: &CenteredWindow,
        center: usize,
        n: usize,
    ) -> Option<T> {
        match self {
            EdgePolicy::Missing => {
                if window.is_full(center, n) {
                    T::from(window.span()).map(|span| T::one() / span)
                } else {
                    None
                }
            }
            EdgePolicy::Shrink => {
                T::from(window.bounds(center, n).len()).map(|len| T::one() / len)
            }
        }
    }
}

/// Build the weight vector for an `n`-point sequence and half-width `k`.
///
/// # Errors
///
/// `InvalidArgument` when `n == 0` or `k >= n`.
pub fn edge_weights<T: Float>(
    n: usize,
    k: usize,
    policy: EdgePolicy,
) -> Result<Vec<Option<T>>, BandMeanError> {
    Validator::validate_dimensions(n, k)?;

    let window = CenteredWindow::new(k);
    Ok((0..n).map(|i| policy.weight(&window, i, n)).collect())
}

/// Multiply band sums by their weights, propagating the missing marker.
#[inline]
pub fn apply_weights<T: Float>(sums: &[T], weights: &[Option<T>]) -> Vec<Option<T>> {
    sums.iter()
        .zip(weights)
        .map(|(&s, w)| w.map(|w| s * w))
        .collect()
}
