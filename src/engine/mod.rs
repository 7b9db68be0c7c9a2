//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates complete computations: input validation, method
//! dispatch and result assembly.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Method dispatch and pipelines.
pub mod executor;

/// Result container and formatting.
pub mod output;

/// Parameter and input validation.
pub mod validator;
