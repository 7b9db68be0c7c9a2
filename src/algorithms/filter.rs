//! Two-sided fixed-kernel convolution filter.
//!
//! ## Purpose
//!
//! This module provides a centered, non-recursive convolution filter with an
//! arbitrary odd-length kernel. With the uniform kernel `1 / (2k + 1)` it is
//! one more way of computing the centered running mean, and serves as an
//! independent comparison candidate.
//!
//! ## Design notes
//!
//! * **Convolution order**: `y[i] = Σ_j w[j] · x[i + m - j]` where `m` is the
//!   kernel half-length, so the kernel is applied reversed.
//! * **Cost**: `O(n · len(kernel))`, evaluated point by point.
//! * **Edges**: `Missing` reports `None`; `Shrink` rescales the partial sum by
//!   `total_mass / available_mass`.
//!
//! ## Invariants
//!
//! * The kernel is non-empty, odd-length and finite.
//!
//! ## Non-goals
//!
//! * No recursive (autoregressive) filtering.
//! * No one-sided (causal) filters.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
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

/// Centered convolution filter.
#[derive(Debug, Clone, PartialEq)]
pub struct CenteredFilter<T> {
    kernel: Vec<T>,
    mass: T,
}

impl<T: Float> CenteredFilter<T> {
    /// Create a filter from an odd-length kernel.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty or even-length kernel,
    /// `InvalidNumericValue` for a non-finite coefficient.
    pub fn new(kernel: Vec<T>) -> Result<Self, BandMeanError> {
        Validator::validate_kernel(&kernel)?;
        let mass = kernel.iter().fold(T::zero(), |acc, &w| acc + w);
        Ok(Self { kernel, mass })
    }

    /// Uniform kernel of length `2k + 1`, each coefficient `1 / (2k + 1)`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `2k + 1` overflows `usize`.
    pub fn uniform(k: usize) -> Result<Self, BandMeanError> {
        let span = k
            .checked_mul(2)
            .and_then(|s| s.checked_add(1))
            .ok_or_else(|| BandMeanError::InvalidArgument(format!("half-width {} too large", k)))?;
        let w = T::from(span)
            .map(|s| T::one() / s)
            .ok_or_else(|| BandMeanError::InvalidArgument(format!("kernel length {}", span)))?;
        Self::new(vec![w; span])
    }

    /// Kernel coefficients.
    #[inline]
    pub fn kernel(&self) -> &[T] {
        &self.kernel
    }

    /// Kernel half-length `m`.
    #[inline]
    pub fn half_width(&self) -> usize {
        self.kernel.len() / 2
    }

    /// Filter `x`, handling the ends according to `policy`.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for empty `x`, `InvalidNumericValue` for non-finite data,
    /// `InvalidArgument` when the half-length is not smaller than `x.len()`.
    pub fn apply(&self, x: &[T], policy: EdgePolicy) -> Result<Vec<Option<T>>, BandMeanError> {
        Validator::validate_non_empty(x)?;
        Validator::validate_finite(x)?;
        let n = x.len();
        let m = self.half_width();
        Validator::validate_dimensions(n, m)?;

        let window = CenteredWindow::new(m);
        let out = (0..n)
            .map(|i| {
                if window.is_full(i, n) {
                    return Some(self.convolve_at(x, i, 0, self.kernel.len() - 1));
                }
                match policy {
                    EdgePolicy::Missing => None,
                    EdgePolicy::Shrink => self.partial_at(x, i, &window),
                }
            })
            .collect();

        Ok(out)
    }

    /// Sum over kernel taps `j_first..=j_last` at position `i`.
    #[inline]
    fn convolve_at(&self, x: &[T], i: usize, j_first: usize, j_last: usize) -> T {
        let m = self.half_width();
        (j_first..=j_last).fold(T::zero(), |acc, j| acc + self.kernel[j] * x[i + m - j])
    }

    /// Rescaled partial sum where only part of the kernel overlaps the data.
    fn partial_at(&self, x: &[T], i: usize, window: &CenteredWindow) -> Option<T> {
        let n = x.len();
        let m = self.half_width();
        let bounds = window.bounds(i, n);

        // Tap j reads x[i + m - j]; keep taps whose read index lies in bounds.
        let j_first = i + m - bounds.right;
        let j_last = i + m - bounds.left;

        let available = self.kernel[j_first..=j_last]
            .iter()
            .fold(T::zero(), |acc, &w| acc + w);
        if available == T::zero() {
            return None;
        }

        let partial = self.convolve_at(x, i, j_first, j_last);
        Some(partial * (self.mass / available))
    }
}
