//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the running-mean computations themselves:
//! - Sparse band product (unnormalized running sum)
//! - Direct single-pass running mean
//! - Two-sided fixed-kernel filter
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Direct running mean without any matrix.
pub mod direct;

/// Centered two-sided convolution filter.
pub mod filter;

/// Sparse band matrix-vector product.
pub mod spmv;
