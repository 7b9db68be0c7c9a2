//! Sparse band matrix-vector product.
//!
//! ## Purpose
//!
//! This module applies a `BandedMatrixIndex`, read as a 0/1 incidence matrix,
//! to a dense vector. Output position `c` receives the sum of `x[r]` over the
//! nonzero rows `r` of column `c`, which is the running sum of the window
//! around `c`.
//!
//! ## Design notes
//!
//! * **Cost**: `O(nnz) = O(n k)`, against `O(n²)` for the dense product.
//! * **Kernel**: Each column is a gathered sum delegated to
//!   `FloatLinalg::gather_sum` (SIMD for f64).
//!
//! ## Invariants
//!
//! * Output length equals the matrix size.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::band::BandedMatrixIndex;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::BandMeanError;

/// Compute `y = Aᵀ x` for the unit-valued band pattern `A`.
///
/// The band is symmetric, so this is also `A x`.
///
/// # Errors
///
/// `DimensionMismatch` when `x.len() != index.size()`.
pub fn sparse_matvec<T: FloatLinalg>(
    index: &BandedMatrixIndex,
    x: &[T],
) -> Result<Vec<T>, BandMeanError> {
    Validator::validate_vector_length(index.size(), x.len())?;

    Ok(index.columns().map(|rows| T::gather_sum(x, rows)).collect())
}
