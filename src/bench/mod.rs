//! Layer 6: Benchmarking
//!
//! # Purpose
//!
//! This layer times running-mean implementations against each other over a
//! range of input sizes and reports median latencies. It requires `std`
//! for wall-clock timing and unwinding.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Bench ← You are here
//!   ↓
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//! ```

/// Timed callables: the `Candidate` trait and its implementations.
pub mod candidate;

/// Harness configuration and the measurement loop.
pub mod harness;

/// Benchmark results, summaries and tabular output.
pub mod report;
