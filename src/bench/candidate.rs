//! Benchmark candidates.
//!
//! ## Purpose
//!
//! This module defines what the harness times: anything that maps an input
//! vector and a half-width to a running mean. Built-in methods and arbitrary
//! closures both implement `Candidate`.
//!
//! ## Design notes
//!
//! * **Opaque**: The harness never inspects a candidate beyond its name and
//!   its output.
//! * **Thread-safe**: Candidates are `Send + Sync` so cells can run on a
//!   rayon pool.

// Internal dependencies
use crate::engine::executor::{Method, execute};
use crate::math::weights::EdgePolicy;
use crate::primitives::errors::BandMeanError;

/// Output of one candidate invocation.
pub type CandidateOutput = Vec<Option<f64>>;

/// A timed running-mean implementation.
pub trait Candidate: Send + Sync {
    /// Name used in reports.
    fn name(&self) -> &str;

    /// Compute the running mean of `x` with half-width `k`.
    fn run(&self, x: &[f64], k: usize) -> Result<CandidateOutput, BandMeanError>;
}

/// A built-in `Method` as a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodCandidate {
    /// Method to execute.
    pub method: Method,

    /// Edge policy passed to the method.
    pub edge_policy: EdgePolicy,
}

impl MethodCandidate {
    /// Wrap `method` with the given edge policy.
    pub fn new(method: Method, edge_policy: EdgePolicy) -> Self {
        Self {
            method,
            edge_policy,
        }
    }
}

impl Candidate for MethodCandidate {
    fn name(&self) -> &str {
        self.method.name()
    }

    fn run(&self, x: &[f64], k: usize) -> Result<CandidateOutput, BandMeanError> {
        execute(self.method, x, k, self.edge_policy)
    }
}

/// A named closure as a candidate.
pub struct FnCandidate<F> {
    name: String,
    f: F,
}

impl<F> FnCandidate<F>
where
    F: Fn(&[f64], usize) -> Result<CandidateOutput, BandMeanError> + Send + Sync,
{
    /// Wrap `f` under `name`.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Candidate for FnCandidate<F>
where
    F: Fn(&[f64], usize) -> Result<CandidateOutput, BandMeanError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, x: &[f64], k: usize) -> Result<CandidateOutput, BandMeanError> {
        (self.f)(x, k)
    }
}
