//! Linear algebra backend abstraction for running means.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the two numeric
//! kernels whose fast paths depend on the concrete float type: the gathered
//! sum used by the sparse product and the dense matrix-vector product.
//!
//! ## Design notes
//!
//! * Dense products delegate to nalgebra, the general-purpose dense backend.
//! * The f64 gather sum uses `wide` two-lane SIMD; f32 stays scalar.
//! * Generic code is written against `FloatLinalg`, implemented for f32 and f64.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to SIMD and nalgebra kernels.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Sum `values[i]` over every `i` in `indices`.
    fn gather_sum(values: &[Self], indices: &[usize]) -> Self;

    /// Multiply a column-major `n x n` matrix by a vector of length `n`.
    fn dense_matvec(matrix: &[Self], n: usize, x: &[Self]) -> Vec<Self>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn gather_sum(values: &[Self], indices: &[usize]) -> Self {
        gather_sum_simd(values, indices)
    }

    #[inline]
    fn dense_matvec(matrix: &[Self], n: usize, x: &[Self]) -> Vec<Self> {
        nalgebra_backend::dense_matvec_f64(matrix, n, x)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn gather_sum(values: &[Self], indices: &[usize]) -> Self {
        gather_sum_scalar(values, indices)
    }

    #[inline]
    fn dense_matvec(matrix: &[Self], n: usize, x: &[Self]) -> Vec<Self> {
        nalgebra_backend::dense_matvec_f32(matrix, n, x)
    }
}

// ============================================================================
// Gather Sums
// ============================================================================

/// Scalar gathered sum, in index order.
#[inline]
pub fn gather_sum_scalar<T: Float>(values: &[T], indices: &[usize]) -> T {
    indices
        .iter()
        .fold(T::zero(), |acc, &idx| acc + values[idx])
}

/// Gathered sum using two f64 lanes.
#[inline]
pub fn gather_sum_simd(values: &[f64], indices: &[usize]) -> f64 {
    let n = indices.len();
    let mut acc = f64x2::splat(0.0);
    let mut i = 0;

    // Indices are arbitrary rows, so lanes are filled manually.
    while i + 2 <= n {
        acc += f64x2::new([values[indices[i]], values[indices[i + 1]]]);
        i += 2;
    }

    let mut total = acc.reduce_add();
    if i < n {
        total += values[indices[i]];
    }
    total
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based dense operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrixView, DVectorView};

    /// Dense `y = M x` for a column-major f64 matrix.
    pub fn dense_matvec_f64(matrix: &[f64], n: usize, x: &[f64]) -> Vec<f64> {
        let m = DMatrixView::from_slice(matrix, n, n);
        let v = DVectorView::from_slice(x, n);
        (&m * &v).as_slice().to_vec()
    }

    /// Dense `y = M x` for a column-major f32 matrix.
    pub fn dense_matvec_f32(matrix: &[f32], n: usize, x: &[f32]) -> Vec<f32> {
        let m = DMatrixView::from_slice(matrix, n, n);
        let v = DVectorView::from_slice(x, n);
        (&m * &v).as_slice().to_vec()
    }
}
