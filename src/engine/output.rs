//! Output types for running-mean computations.
//!
//! ## Purpose
//!
//! This module defines `RunningMeanResult`, the container returned by the
//! fluent API, and its human-readable table rendering.
//!
//! ## Design notes
//!
//! * **Explicit missing values**: Undefined positions are `None` and render
//!   as `NA`.
//! * **Self-describing**: The result records the method, half-width and edge
//!   policy that produced it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::Method;
use crate::math::weights::EdgePolicy;

/// Smoothed sequence plus the configuration that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningMeanResult<T> {
    /// Running mean per position; `None` where undefined.
    pub values: Vec<Option<T>>,

    /// Method used.
    pub method: Method,

    /// Half-width `k` of the window.
    pub half_width: usize,

    /// Edge policy applied.
    pub edge_policy: EdgePolicy,
}

impl<T: Float> RunningMeanResult<T> {
    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the result is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of positions with a defined value.
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Value at `i`, `None` if undefined or out of range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<T> {
        self.values.get(i).copied().flatten()
    }

    /// Values with undefined positions replaced by `fill`.
    pub fn filled(&self, fill: T) -> Vec<T> {
        self.values.iter().map(|v| v.unwrap_or(fill)).collect()
    }
}

impl<T: Float + Display> Display for RunningMeanResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.values.len())?;
        writeln!(f, "  Method: {}", self.method)?;
        writeln!(f, "  Half-width: {}", self.half_width)?;
        writeln!(f, "  Edge policy: {:?}", self.edge_policy)?;
        writeln!(f, "  Defined: {}", self.defined_count())?;
        writeln!(f)?;

        writeln!(f, "Running Mean:")?;
        writeln!(f, "{:>8} {:>12}", "Index", "Mean")?;
        writeln!(f, "  {}", "-".repeat(19))?;
        for (i, v) in self.values.iter().enumerate() {
            match v {
                Some(v) => writeln!(f, "{:>8} {:>12.5}", i, v)?,
                None => writeln!(f, "{:>8} {:>12}", i, "NA")?,
            }
        }
        Ok(())
    }
}
