//! Execution of the running-mean pipelines.
//!
//! ## Purpose
//!
//! This module wires the math and algorithms layers into complete running
//! mean computations, one per `Method`, behind a single `execute` entry
//! point. The fluent API and the benchmark harness both go through here.
//!
//! ## Design notes
//!
//! * **Fresh outputs**: Every call builds what it needs and returns a new
//!   vector. No matrices or buffers are cached between calls.
//! * **Same contract**: Every method returns `Vec<Option<T>>` with the same
//!   missing positions for the same `EdgePolicy`.
//!
//! ## Key concepts
//!
//! * **Sparse**: direct CSC build, sparse product, weights.
//! * **SparsifiedDense**: dense build, sparsify, sparse product, weights.
//! * **Dense**: dense build, nalgebra product, weights.
//! * **Direct**: single-pass running sum.
//! * **Filter**: uniform-kernel convolution.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;

// Internal dependencies
use crate::algorithms::direct::direct_running_mean;
use crate::algorithms::filter::CenteredFilter;
use crate::algorithms::spmv::sparse_matvec;
use crate::engine::validator::Validator;
use crate::math::band::BandedMatrixIndex;
use crate::math::dense::DenseBandMatrix;
use crate::math::linalg::FloatLinalg;
use crate::math::weights::{EdgePolicy, apply_weights, edge_weights};
use crate::primitives::errors::BandMeanError;

/// Running-mean computation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Single-pass running sum, no matrix.
    #[default]
    Direct,

    /// Directly built CSC band index times the data.
    Sparse,

    /// Dense band matrix times the data through nalgebra.
    Dense,

    /// Dense band matrix converted to CSC, then the sparse product.
    SparsifiedDense,

    /// Uniform-kernel two-sided convolution.
    Filter,
}

impl Method {
    /// All methods, in reporting order.
    pub const ALL: [Method; 5] = [
        Method::Direct,
        Method::Sparse,
        Method::Dense,
        Method::SparsifiedDense,
        Method::Filter,
    ];

    /// Short lowercase name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Direct => "direct",
            Method::Sparse => "sparse",
            Method::Dense => "dense",
            Method::SparsifiedDense => "sparsified_dense",
            Method::Filter => "filter",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Pipelines
// ============================================================================

/// Run `method` over `x` with half-width `k`.
///
/// # Errors
///
/// `EmptyInput` for empty `x`, `InvalidNumericValue` for non-finite data,
/// `InvalidArgument` when `k >= x.len()`.
pub fn execute<T: FloatLinalg>(
    method: Method,
    x: &[T],
    k: usize,
    policy: EdgePolicy,
) -> Result<Vec<Option<T>>, BandMeanError> {
    match method {
        Method::Direct => direct_running_mean(x, k, policy),
        Method::Sparse => sparse_running_mean(x, k, policy),
        Method::Dense => dense_running_mean(x, k, policy),
        Method::SparsifiedDense => sparsified_running_mean(x, k, policy),
        Method::Filter => {
            Validator::validate_non_empty(x)?;
            Validator::validate_dimensions(x.len(), k)?;
            CenteredFilter::uniform(k)?.apply(x, policy)
        }
    }
}

/// Running mean through the directly built band index.
pub fn sparse_running_mean<T: FloatLinalg>(
    x: &[T],
    k: usize,
    policy: EdgePolicy,
) -> Result<Vec<Option<T>>, BandMeanError> {
    Validator::validate_non_empty(x)?;
    Validator::validate_finite(x)?;
    let n = x.len();
    let index = BandedMatrixIndex::new(n, k)?;
    let sums = sparse_matvec(&index, x)?;
    let weights = edge_weights(n, k, policy)?;
    Ok(apply_weights(&sums, &weights))
}

/// Running mean through a dense band matrix product.
pub fn dense_running_mean<T: FloatLinalg>(
    x: &[T],
    k: usize,
    policy: EdgePolicy,
) -> Result<Vec<Option<T>>, BandMeanError> {
    Validator::validate_non_empty(x)?;
    Validator::validate_finite(x)?;
    let n = x.len();
    let dense = DenseBandMatrix::new(n, k)?;
    let sums = dense.matvec(x)?;
    let weights = edge_weights(n, k, policy)?;
    Ok(apply_weights(&sums, &weights))
}

/// Running mean through a band index obtained by sparsifying a dense matrix.
pub fn sparsified_running_mean<T: FloatLinalg>(
    x: &[T],
    k: usize,
    policy: EdgePolicy,
) -> Result<Vec<Option<T>>, BandMeanError> {
    Validator::validate_non_empty(x)?;
    Validator::validate_finite(x)?;
    let n = x.len();
    let dense = DenseBandMatrix::<T>::new(n, k)?;
    let index = BandedMatrixIndex::from_dense(&dense);
    let sums = sparse_matvec(&index, x)?;
    let weights = edge_weights(n, k, policy)?;
    Ok(apply_weights(&sums, &weights))
}
