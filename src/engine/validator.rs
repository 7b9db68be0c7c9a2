//! Input validation for running-mean configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions shared by the band builder,
//! the products, the direct and filter algorithms, the fluent API and the
//! benchmark harness. It checks sizes, half-widths, vector lengths, finite
//! values and harness parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Data validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not coerce mismatched sizes or drop bad values.
//! * This module does not perform the computation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::BandMeanError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for running-mean configuration and input data.
///
/// All methods return `Result<(), BandMeanError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that an input vector is non-empty.
    #[inline]
    pub fn validate_non_empty<T>(x: &[T]) -> Result<(), BandMeanError> {
        if x.is_empty() {
            return Err(BandMeanError::EmptyInput);
        }
        Ok(())
    }

    /// Validate matrix size `n` and half-bandwidth `k`.
    ///
    /// Requires `n >= 1` and `k < n`.
    pub fn validate_dimensions(n: usize, k: usize) -> Result<(), BandMeanError> {
        if n == 0 {
            return Err(BandMeanError::InvalidArgument(
                "size must be at least 1, got 0".into(),
            ));
        }
        if k >= n {
            return Err(BandMeanError::InvalidArgument(format!(
                "half-width {} must be smaller than size {}",
                k, n
            )));
        }
        Ok(())
    }

    /// Validate that a vector length matches a matrix size.
    #[inline]
    pub fn validate_vector_length(expected: usize, got: usize) -> Result<(), BandMeanError> {
        if expected != got {
            return Err(BandMeanError::DimensionMismatch { expected, got });
        }
        Ok(())
    }

    /// Validate that all values are finite.
    pub fn validate_finite<T: Float>(x: &[T]) -> Result<(), BandMeanError> {
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(BandMeanError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a convolution kernel: non-empty, odd length, finite.
    pub fn validate_kernel<T: Float>(kernel: &[T]) -> Result<(), BandMeanError> {
        if kernel.is_empty() {
            return Err(BandMeanError::InvalidArgument("kernel is empty".into()));
        }
        if kernel.len() % 2 == 0 {
            return Err(BandMeanError::InvalidArgument(format!(
                "kernel length {} must be odd",
                kernel.len()
            )));
        }
        for (i, &w) in kernel.iter().enumerate() {
            if !w.is_finite() {
                return Err(BandMeanError::InvalidNumericValue(format!(
                    "kernel[{}]={}",
                    i,
                    w.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that a required half-width was configured.
    pub fn validate_half_width(half_width: Option<usize>) -> Result<usize, BandMeanError> {
        half_width.ok_or_else(|| BandMeanError::InvalidArgument("half_width must be set".into()))
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), BandMeanError> {
        if let Some(param) = duplicate_param {
            return Err(BandMeanError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Harness Validation
    // ========================================================================

    /// Validate benchmark input sizes against the half-width.
    ///
    /// Every size must exceed `half_width`.
    pub fn validate_sizes(sizes: &[usize], half_width: usize) -> Result<(), BandMeanError> {
        if sizes.is_empty() {
            return Err(BandMeanError::InvalidArgument(
                "at least one input size is required".into(),
            ));
        }
        for &n in sizes {
            Self::validate_dimensions(n, half_width)?;
        }
        Ok(())
    }

    /// Validate the number of timed repetitions per cell.
    pub fn validate_repetitions(repetitions: usize) -> Result<(), BandMeanError> {
        if repetitions == 0 {
            return Err(BandMeanError::InvalidArgument(
                "repetitions must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Validate that at least one candidate is registered.
    pub fn validate_candidates(count: usize) -> Result<(), BandMeanError> {
        if count == 0 {
            return Err(BandMeanError::InvalidArgument(
                "at least one candidate is required".into(),
            ));
        }
        Ok(())
    }

    /// Validate the consistency-check tolerance.
    pub fn validate_tolerance(tol: f64) -> Result<(), BandMeanError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(BandMeanError::InvalidArgument(format!(
                "tolerance {} must be > 0 and finite",
                tol
            )));
        }
        Ok(())
    }
}
