//! # bandmean: Centered Running Means via Banded Matrices
//!
//! Computes the centered running mean of a sequence several independent ways
//! and benchmarks them against each other.
//!
//! ## What is a centered running mean?
//!
//! For a sequence `x` of length `n` and a half-width `k`, the running mean at
//! position `i` averages the `2k + 1` values `x[i-k..=i+k]`. Positions closer
//! than `k` to either end have no full window; by default they are reported
//! as missing (`None`).
//!
//! Written as linear algebra, the running sum is `B · x` where `B` is the
//! `n × n` band matrix with ones on the main diagonal and the `k` diagonals
//! on either side. This crate builds `B` directly in compressed sparse column
//! (CSC) form, without ever allocating the dense `n²` intermediate, so the
//! whole computation is `O(n · k)` in time and memory.
//!
//! **Available methods:**
//! - `Direct` (default): single-pass running sum, no matrix
//! - `Sparse`: directly built CSC band index times the data
//! - `Dense`: dense band matrix times the data (nalgebra)
//! - `SparsifiedDense`: dense matrix converted to CSC, then the sparse product
//! - `Filter`: two-sided uniform-kernel convolution
//!
//! All five agree to within floating-point rounding and report the same
//! missing positions.
//!
//! ## Quick Start
//!
//! ```rust
//! use bandmean::prelude::*;
//!
//! let x: Vec<f64> = (1..=9).map(|i| i as f64).collect();
//!
//! let model = RunningMean::new()
//!     .half_width(2)
//!     .method(Sparse)
//!     .build()?;
//!
//! let result = model.smooth(&x)?;
//!
//! assert_eq!(result.get(4), Some(5.0));
//! assert_eq!(result.get(0), None);
//! assert_eq!(result.defined_count(), 5);
//! println!("{}", result);
//! # Result::<(), BandMeanError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 9
//!   Method: sparse
//!   Half-width: 2
//!   Edge policy: Missing
//!   Defined: 5
//!
//! Running Mean:
//!    Index         Mean
//!   -------------------
//!        0           NA
//!        1           NA
//!        2      3.00000
//!        3      4.00000
//!        4      5.00000
//!        5      6.00000
//!        6      7.00000
//!        7           NA
//!        8           NA
//! ```
//!
//! ### Edge Policy
//!
//! `Shrink` averages over the part of the window that lies inside the data
//! instead of reporting `None`:
//!
//! ```rust
//! use bandmean::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let model = RunningMean::new()
//!     .half_width(1)
//!     .edge_policy(Shrink)
//!     .build()?;
//!
//! let result = model.smooth(&x)?;
//! assert_eq!(result.get(0), Some(1.5));
//! assert_eq!(result.get(4), Some(4.5));
//! # Result::<(), BandMeanError>::Ok(())
//! ```
//!
//! ### Lower-level building blocks
//!
//! ```rust
//! use bandmean::prelude::*;
//!
//! let index = BandedMatrixIndex::new(6, 1)?;
//! assert_eq!(Some(index.nnz()), band_nnz(6, 1));
//!
//! let sums = sparse_matvec(&index, &[1.0_f64, 1.0, 1.0, 1.0, 1.0, 1.0])?;
//! assert_eq!(sums, vec![2.0, 3.0, 3.0, 3.0, 3.0, 2.0]);
//! # Result::<(), BandMeanError>::Ok(())
//! ```
//!
//! ## Benchmarking
//!
//! With the default `std` feature the `BenchmarkHarness` times every
//! registered candidate at every input size on the same seeded input. A
//! candidate that fails or panics is recorded as a failed cell and the rest
//! of the run continues.
//!
//! ```rust
//! use bandmean::prelude::*;
//!
//! # #[cfg(feature = "std")] {
//! let report = BenchmarkHarness::builder()
//!     .sizes(&[64, 128])
//!     .half_width(2)
//!     .repetitions(3)
//!     .methods(&[Direct, Sparse, Dense])
//!     .check_consistency(1e-9)
//!     .build()?
//!     .run();
//!
//! assert_eq!(report.results.len(), 6);
//! assert!(report.all_consistent());
//! println!("{}", report);
//! # }
//! # Result::<(), BandMeanError>::Ok(())
//! ```
//!
//! ## Features
//!
//! | Feature    | Default | Effect                                            |
//! |------------|---------|---------------------------------------------------|
//! | `std`      | yes     | Standard library, benchmark harness, tracing      |
//! | `parallel` | no      | Evaluate benchmark cells on a rayon pool          |
//! | `serde`    | no      | Serialize reports, deserialize `BenchmarkConfig`  |
//! | `dev`      | no      | Expose `internals` for testing                    |
//!
//! Without `std` the crate is `no_std` + `alloc`; every method stays
//! available, only the harness is removed.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error taxonomy and window geometry.
mod primitives;

// Layer 2: Math - band index, dense storage, weights and float kernels.
mod math;

// Layer 3: Algorithms - sparse product, direct running mean, filter.
mod algorithms;

// Layer 4: Engine - validation, method dispatch and result assembly.
mod engine;

// High-level fluent API.
//
// Provides the `RunningMean` builder and re-exports the building blocks.
mod api;

// Layer 6: Bench - candidates, harness and reports (requires `std`).
#[cfg(feature = "std")]
mod bench;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use bandmean::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        BandMeanError, BandedMatrixIndex, CenteredFilter, DenseBandMatrix,
        EdgePolicy::{Missing, Shrink},
        Method::{Dense, Direct, Filter, Sparse, SparsifiedDense},
        RunningMeanBuilder as RunningMean, RunningMeanModel, RunningMeanResult, band_nnz,
        direct_running_mean, edge_weights, sparse_matvec,
    };

    #[cfg(feature = "std")]
    pub use crate::bench::{
        candidate::{Candidate, CandidateOutput, FnCandidate, MethodCandidate},
        harness::{BenchmarkBuilder, BenchmarkConfig, BenchmarkHarness},
        report::{BenchmarkReport, BenchmarkResult, Outcome, TimingSummary},
    };
}

pub use api::{EdgePolicy, Method};

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math structures and kernels.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
    /// Internal benchmarking layer.
    #[cfg(feature = "std")]
    pub mod bench {
        pub use crate::bench::*;
    }
}
