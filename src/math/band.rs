//! Compressed-sparse-column index of a symmetric band matrix.
//!
//! ## Purpose
//!
//! This module builds the sparsity pattern of an `n x n` matrix whose nonzero
//! entries lie within `k` diagonals of the main diagonal. Multiplying this
//! 0/1 pattern by a vector yields the unnormalized running sum.
//!
//! ## Design notes
//!
//! * **Direct construction**: Row indices are emitted column by column; no
//!   dense `n x n` array is ever allocated by `new`.
//! * **Implicit values**: Every stored entry is 1, so only indices are kept.
//! * **Naive contrast**: `from_dense` sparsifies a dense matrix by scanning all
//!   `n²` entries. It exists for benchmarking, not for production use.
//!
//! ## Key concepts
//!
//! * **CSC layout**: `column_offsets[c]..column_offsets[c + 1]` is the slice of
//!   `row_indices` holding the nonzero rows of column `c`.
//!
//! ## Invariants
//!
//! * Rows of column `c` are exactly `max(c - k, 0)..=min(c + k, n - 1)`,
//!   strictly increasing.
//! * `column_offsets.len() == n + 1` and `Some(column_offsets[n]) == band_nnz(n, k)`.
//! * The index is immutable after construction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::dense::DenseBandMatrix;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::BandMeanError;
use crate::primitives::window::CenteredWindow;

/// Number of nonzero entries in an `n x n` band of half-width `k`.
///
/// Equals `(2k + 1)(n - 2k) + 3k² + k` whenever `n > 2k`. Returns `None`
/// when `k >= n` or the count does not fit in `usize`.
#[inline]
pub fn band_nnz(n: usize, k: usize) -> Option<usize> {
    if k >= n {
        return None;
    }
    let span = k.checked_mul(2)?.checked_add(1)?;
    let clipped = k.checked_mul(k + 1)?;
    n.checked_mul(span)?.checked_sub(clipped)
}

/// Sparsity pattern of a symmetric band matrix in CSC layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandedMatrixIndex {
    size: usize,
    half_bandwidth: usize,
    row_indices: Vec<usize>,
    column_offsets: Vec<usize>,
}

impl BandedMatrixIndex {
    /// Build the band pattern for dimension `n` and half-bandwidth `k`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `n == 0`, `k >= n`, or the entry count
    /// overflows `usize`.
    pub fn new(n: usize, k: usize) -> Result<Self, BandMeanError> {
        Validator::validate_dimensions(n, k)?;

        let window = CenteredWindow::new(k);
        let nnz = band_nnz(n, k).ok_or_else(|| {
            BandMeanError::InvalidArgument(format!(
                "band of size {} and half-width {} is too large",
                n, k
            ))
        })?;
        let mut row_indices = Vec::with_capacity(nnz);
        let mut column_offsets = Vec::with_capacity(n + 1);

        for c in 0..n {
            column_offsets.push(row_indices.len());
            let bounds = window.bounds(c, n);
            row_indices.extend(bounds.left..=bounds.right);
        }
        column_offsets.push(row_indices.len());

        Ok(Self {
            size: n,
            half_bandwidth: k,
            row_indices,
            column_offsets,
        })
    }

    /// Sparsify a dense band matrix by scanning every entry.
    ///
    /// Produces the same index as `new(dense.size(), dense.half_bandwidth())`,
    /// at `O(n²)` cost.
    pub fn from_dense<T: FloatLinalg>(dense: &DenseBandMatrix<T>) -> Self {
        let n = dense.size();
        let mut row_indices = Vec::new();
        let mut column_offsets = Vec::with_capacity(n + 1);

        for column in dense.columns() {
            column_offsets.push(row_indices.len());
            row_indices.extend(
                column
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| **v != T::zero())
                    .map(|(r, _)| r),
            );
        }
        column_offsets.push(row_indices.len());

        Self {
            size: n,
            half_bandwidth: dense.half_bandwidth(),
            row_indices,
            column_offsets,
        }
    }

    /// Matrix dimension `n`.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Half-bandwidth `k`.
    #[inline]
    pub fn half_bandwidth(&self) -> usize {
        self.half_bandwidth
    }

    /// Total number of stored (nonzero) entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.row_indices.len()
    }

    /// Flat row indices, column-major.
    #[inline]
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    /// Column start offsets into `row_indices`, length `n + 1`.
    #[inline]
    pub fn column_offsets(&self) -> &[usize] {
        &self.column_offsets
    }

    /// Nonzero rows of column `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c >= size()`.
    #[inline]
    pub fn column_rows(&self, c: usize) -> &[usize] {
        &self.row_indices[self.column_offsets[c]..self.column_offsets[c + 1]]
    }

    /// Number of nonzero rows in column `c`.
    #[inline]
    pub fn column_len(&self, c: usize) -> usize {
        self.column_offsets[c + 1] - self.column_offsets[c]
    }

    /// Iterate over the row slices of every column, in order.
    pub fn columns(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.column_offsets
            .windows(2)
            .map(move |w| &self.row_indices[w[0]..w[1]])
    }
}
