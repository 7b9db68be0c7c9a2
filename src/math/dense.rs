//! Dense storage of a band matrix.
//!
//! ## Purpose
//!
//! This module materializes the band pattern as a full column-major `n x n`
//! array of ones and zeros. It is the fair dense counterpart of
//! `BandedMatrixIndex` in benchmarks: same band, `O(n²)` memory and product.
//!
//! ## Design notes
//!
//! * **Column-major**: Matches the layout nalgebra expects for `DMatrixView`.
//! * **Backend**: Products go through `FloatLinalg::dense_matvec`.
//!
//! ## Non-goals
//!
//! * Not a general dense matrix type. Only 0/1 band patterns are stored.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::BandMeanError;
use crate::primitives::window::CenteredWindow;

/// Dense `n x n` band matrix with unit entries inside the band.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseBandMatrix<T> {
    size: usize,
    half_bandwidth: usize,
    data: Vec<T>,
}

impl<T: FloatLinalg> DenseBandMatrix<T> {
    /// Allocate the full matrix and set the band entries to one.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `n == 0`, `k >= n`, or `n * n` overflows
    /// `usize`.
    pub fn new(n: usize, k: usize) -> Result<Self, BandMeanError> {
        Validator::validate_dimensions(n, k)?;
        let len = n.checked_mul(n).ok_or_else(|| {
            BandMeanError::InvalidArgument(format!("dense matrix of size {} is too large", n))
        })?;

        let window = CenteredWindow::new(k);
        let mut data = vec![T::zero(); len];
        for c in 0..n {
            let bounds = window.bounds(c, n);
            for entry in &mut data[c * n + bounds.left..=c * n + bounds.right] {
                *entry = T::one();
            }
        }

        Ok(Self {
            size: n,
            half_bandwidth: k,
            data,
        })
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

    /// Entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[col * self.size + row]
    }

    /// Column-major backing storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the columns as contiguous slices.
    pub fn columns(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.size)
    }

    /// Dense product `y = M x`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when `x.len() != size()`.
    pub fn matvec(&self, x: &[T]) -> Result<Vec<T>, BandMeanError> {
        Validator::validate_vector_length(self.size, x.len())?;
        Ok(T::dense_matvec(&self.data, self.size, x))
    }
}
