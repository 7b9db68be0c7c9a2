//! High-level API for centered running means.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for choosing the half-width, the computation method and
//! the edge policy, and re-exports the lower-level building blocks.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for everything except the
//!   half-width.
//! * **Validated**: Configuration is validated when `.build()` is called;
//!   data is validated on every `.smooth()` call.
//! * **Type-Safe**: `smooth` is generic over `FloatLinalg` (f32 and f64).
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RunningMeanBuilder`] via `RunningMean::new()`.
//! 2. Chain configuration methods (`.half_width()`, `.method()`, `.edge_policy()`).
//! 3. Call `.build()` to get a [`RunningMeanModel`].
//! 4. Call `.smooth(&x)` as often as needed.

// Internal dependencies
use crate::engine::executor::execute;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::algorithms::direct::direct_running_mean;
pub use crate::algorithms::filter::CenteredFilter;
pub use crate::algorithms::spmv::sparse_matvec;
pub use crate::engine::executor::Method;
pub use crate::engine::output::RunningMeanResult;
pub use crate::math::band::{BandedMatrixIndex, band_nnz};
pub use crate::math::dense::DenseBandMatrix;
pub use crate::math::weights::{EdgePolicy, edge_weights};
pub use crate::primitives::errors::BandMeanError;

/// Fluent builder for configuring a running mean.
#[derive(Debug, Clone, Default)]
pub struct RunningMeanBuilder {
    /// Window half-width `k` (required).
    pub half_width: Option<usize>,

    /// Computation method (default: `Direct`).
    pub method: Option<Method>,

    /// Edge handling (default: `Missing`).
    pub edge_policy: Option<EdgePolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl RunningMeanBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window half-width `k`; the window spans `2k + 1` points.
    pub fn half_width(mut self, k: usize) -> Self {
        if self.half_width.is_some() {
            self.duplicate_param = Some("half_width");
        }
        self.half_width = Some(k);
        self
    }

    /// Set the computation method.
    pub fn method(mut self, method: Method) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the edge handling policy.
    pub fn edge_policy(mut self, policy: EdgePolicy) -> Self {
        if self.edge_policy.is_some() {
            self.duplicate_param = Some("edge_policy");
        }
        self.edge_policy = Some(policy);
        self
    }

    /// Validate the configuration and build a reusable model.
    pub fn build(self) -> Result<RunningMeanModel, BandMeanError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let half_width = Validator::validate_half_width(self.half_width)?;

        Ok(RunningMeanModel {
            half_width,
            method: self.method.unwrap_or_default(),
            edge_policy: self.edge_policy.unwrap_or_default(),
        })
    }
}

/// A validated running-mean configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningMeanModel {
    half_width: usize,
    method: Method,
    edge_policy: EdgePolicy,
}

impl RunningMeanModel {
    /// Window half-width `k`.
    pub fn half_width(&self) -> usize {
        self.half_width
    }

    /// Computation method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Edge handling policy.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    /// Compute the running mean of `x`.
    ///
    /// # Errors
    ///
    /// `EmptyInput`, `InvalidNumericValue` for non-finite data, or
    /// `InvalidArgument` when the half-width is not smaller than `x.len()`.
    pub fn smooth<T: FloatLinalg>(&self, x: &[T]) -> Result<RunningMeanResult<T>, BandMeanError> {
        Validator::validate_non_empty(x)?;
        Validator::validate_dimensions(x.len(), self.half_width)?;
        Validator::validate_finite(x)?;

        let values = execute(self.method, x, self.half_width, self.edge_policy)?;

        Ok(RunningMeanResult {
            values,
            method: self.method,
            half_width: self.half_width,
            edge_policy: self.edge_policy,
        })
    }
}
