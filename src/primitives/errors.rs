//! Error types for running-mean computation and benchmarking.
//!
//! ## Purpose
//!
//! This module defines `BandMeanError`, the single error type returned by
//! every fallible operation in the crate: band construction, sparse and dense
//! products, direct running means, filters and the benchmark harness.
//!
//! ## Design notes
//!
//! * **no_std**: Built on `thiserror` without its `std` feature, so the core
//!   stays usable with `alloc` only.
//! * **Fail-fast**: Construction and multiply errors are returned to the
//!   immediate caller with `?`.
//! * **Localized**: `CandidateFailure` is produced by the harness and stored in
//!   the report instead of being propagated.
//!
//! ## Non-goals
//!
//! * No retry hints. Every operation is deterministic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

/// Error type for all fallible operations in the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BandMeanError {
    /// The input vector is empty.
    #[error("Input vector is empty")]
    EmptyInput,

    /// Malformed construction parameters (size, half-width, kernel, sizes, repetitions).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Vector length does not match the matrix size at multiply time.
    #[error("Dimension mismatch: matrix has size {expected}, vector has length {got}")]
    DimensionMismatch {
        /// Matrix dimension n.
        expected: usize,
        /// Length of the supplied vector.
        got: usize,
    },

    /// A non-finite value was found where a finite one is required.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// A builder parameter was set more than once.
    #[error("Parameter '{parameter}' was set multiple times")]
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },

    /// A benchmark candidate failed while being timed.
    #[error("Candidate '{candidate}' failed at size {size}: {reason}")]
    CandidateFailure {
        /// Name of the failing candidate.
        candidate: String,
        /// Input size of the aborted measurement.
        size: usize,
        /// Error message or panic payload.
        reason: String,
    },
}
