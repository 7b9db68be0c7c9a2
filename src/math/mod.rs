//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the matrix structures and numeric kernels used by
//! the running-mean pipelines:
//! - Band sparsity patterns in CSC layout
//! - Dense band storage for fair dense comparisons
//! - Edge weight vectors
//! - Float-type specific SIMD and nalgebra kernels
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Compressed-sparse-column band index.
pub mod band;

/// Dense band matrix storage.
pub mod dense;

/// Float kernels with SIMD and nalgebra backends.
pub mod linalg;

/// Edge weight policies and weight vectors.
pub mod weights;
