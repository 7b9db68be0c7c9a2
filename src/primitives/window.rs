//! Centered window primitives for running means.
//!
//! ## Purpose
//!
//! This module provides the index geometry shared by every running-mean
//! method: the inclusive bounds of a centered window of half-width `k`
//! around a position, clipped to the sequence, and the range of positions
//! where the full `2k + 1` window fits.
//!
//! ## Design notes
//!
//! * **Index-only**: Windows are plain `[left, right]` views into the data.
//! * **Clipped**: Bounds never leave `0..n`, so callers index without checks.
//!
//! ## Invariants
//!
//! * A valid window satisfies `left <= right`.
//! * `interior(n)` is empty when `n < 2k + 1`.
//!
//! ## Visibility
//!
//! This module is an internal detail used by the math and algorithms layers.

use core::ops::Range;

/// Inclusive window bounds `[left, right]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    /// Left boundary index (inclusive).
    pub left: usize,

    /// Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    /// Create a new window if `left <= right`.
    #[inline]
    pub fn new(left: usize, right: usize) -> Option<Self> {
        if left <= right {
            Some(Self { left, right })
        } else {
            None
        }
    }

    /// Returns the number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// Always `false`: a constructed window holds at least one point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A symmetric window of `2 * half_width + 1` positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CenteredWindow {
    /// Number of positions on each side of the center.
    pub half_width: usize,
}

impl CenteredWindow {
    /// Create a centered window with the given half-width.
    #[inline]
    pub fn new(half_width: usize) -> Self {
        Self { half_width }
    }

    /// Full window length `2k + 1`.
    #[inline]
    pub fn span(&self) -> usize {
        2 * self.half_width + 1
    }

    /// Bounds of the window around `center`, clipped to `0..n`.
    #[inline]
    pub fn bounds(&self, center: usize, n: usize) -> Window {
        debug_assert!(center < n, "bounds: center out of range");
        Window {
            left: center.saturating_sub(self.half_width),
            right: (center + self.half_width).min(n - 1),
        }
    }

    /// Whether the unclipped window around `center` fits inside `0..n`.
    #[inline]
    pub fn is_full(&self, center: usize, n: usize) -> bool {
        center >= self.half_width && center + self.half_width < n
    }

    /// Positions whose full window fits: `k..n-k`, empty if none do.
    #[inline]
    pub fn interior(&self, n: usize) -> Range<usize> {
        let k = self.half_width;
        if n < self.span() {
            return k.min(n)..k.min(n);
        }
        k..n - k
    }
}
