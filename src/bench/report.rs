//! Benchmark results and reporting.
//!
//! ## Purpose
//!
//! This module holds what a harness run produces: one `BenchmarkResult` per
//! (candidate, size) cell, gathered into a `BenchmarkReport` that can be
//! queried, printed as a table or serialized for an external plotter.
//!
//! ## Design notes
//!
//! * **Plain data**: Results are created once by the harness and never
//!   mutated afterwards.
//! * **Localized failure**: A failed cell carries its `CandidateFailure`
//!   error instead of a timing.
//!
//! ## Key concepts
//!
//! * **Scaling ratio**: `median(to) / median(from)` for one method.
//! * **Scaling exponent**: `log(ratio) / log(to / from)`; about 1 for linear
//!   cost and about 2 for quadratic cost.

// External dependencies
use std::fmt::{Display, Formatter, Result};
use std::time::Duration;

// Internal dependencies
use crate::math::weights::EdgePolicy;
use crate::primitives::errors::BandMeanError;

// ============================================================================
// Timing Summary
// ============================================================================

/// Summary statistics over the timed repetitions of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimingSummary {
    /// Median wall-clock duration.
    pub median: Duration,

    /// Fastest repetition.
    pub min: Duration,

    /// Slowest repetition.
    pub max: Duration,

    /// Arithmetic mean duration.
    pub mean: Duration,

    /// Number of timed repetitions.
    pub samples: usize,
}

impl TimingSummary {
    /// Summarize raw samples; `None` when there are none.
    ///
    /// The slice is sorted in place.
    pub fn from_samples(samples: &mut [Duration]) -> Option<Self> {
        let n = samples.len();
        if n == 0 {
            return None;
        }
        samples.sort_unstable();

        let mid = n / 2;
        let median = if n % 2 == 0 {
            (samples[mid - 1] + samples[mid]) / 2
        } else {
            samples[mid]
        };

        let total: Duration = samples.iter().sum();
        let mean = Duration::from_nanos((total.as_nanos() / n as u128) as u64);

        Some(Self {
            median,
            min: samples[0],
            max: samples[n - 1],
            mean,
            samples: n,
        })
    }

    /// Median in seconds.
    #[inline]
    pub fn median_secs(&self) -> f64 {
        self.median.as_secs_f64()
    }
}

// ============================================================================
// Per-cell Result
// ============================================================================

/// Outcome of one (candidate, size) cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    /// All repetitions completed.
    Timed(TimingSummary),

    /// The candidate failed; measurement for this cell was aborted.
    Failed(BandMeanError),
}

/// Measurement of one candidate at one input size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BenchmarkResult {
    /// Candidate name.
    pub method: String,

    /// Input length `n`.
    pub size: usize,

    /// Timing summary or failure.
    pub outcome: Outcome,

    /// Agreement with the reference candidate, when consistency checking ran.
    pub consistent: Option<bool>,
}

impl BenchmarkResult {
    /// Timing summary, if the cell completed.
    pub fn timing(&self) -> Option<&TimingSummary> {
        match &self.outcome {
            Outcome::Timed(t) => Some(t),
            Outcome::Failed(_) => None,
        }
    }

    /// Median latency, if the cell completed.
    pub fn median(&self) -> Option<Duration> {
        self.timing().map(|t| t.median)
    }

    /// Failure, if the cell was aborted.
    pub fn failure(&self) -> Option<&BandMeanError> {
        match &self.outcome {
            Outcome::Failed(e) => Some(e),
            Outcome::Timed(_) => None,
        }
    }

    /// Whether the cell was aborted.
    pub fn is_failure(&self) -> bool {
        self.failure().is_some()
    }
}

// ============================================================================
// Report
// ============================================================================

/// All results of one harness run plus its parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BenchmarkReport {
    /// Window half-width used for every cell.
    pub half_width: usize,

    /// Edge policy passed to built-in candidates.
    pub edge_policy: EdgePolicy,

    /// Timed repetitions per cell.
    pub repetitions: usize,

    /// Seed of the input generator.
    pub seed: u64,

    /// Results in (candidate, size) registration order.
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    /// Result for `method` at `size`.
    pub fn get(&self, method: &str, size: usize) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.method == method && r.size == size)
    }

    /// Median latency for `method` at `size`.
    pub fn median(&self, method: &str, size: usize) -> Option<Duration> {
        self.get(method, size).and_then(BenchmarkResult::median)
    }

    /// Aborted cells.
    pub fn failures(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// Candidate names in first-seen order.
    pub fn methods(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for r in &self.results {
            if !names.contains(&r.method.as_str()) {
                names.push(&r.method);
            }
        }
        names
    }

    /// Input sizes in first-seen order.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        for r in &self.results {
            if !sizes.contains(&r.size) {
                sizes.push(r.size);
            }
        }
        sizes
    }

    /// `median(to) / median(from)` for `method`.
    pub fn scaling_ratio(&self, method: &str, from: usize, to: usize) -> Option<f64> {
        let a = self.median(method, from)?.as_secs_f64();
        let b = self.median(method, to)?.as_secs_f64();
        if a <= 0.0 {
            return None;
        }
        Some(b / a)
    }

    /// Empirical growth exponent between two sizes for `method`.
    pub fn scaling_exponent(&self, method: &str, from: usize, to: usize) -> Option<f64> {
        if from == 0 || to == from {
            return None;
        }
        let ratio = self.scaling_ratio(method, from, to)?;
        Some(ratio.ln() / (to as f64 / from as f64).ln())
    }

    /// Whether no checked cell disagreed with its reference.
    pub fn all_consistent(&self) -> bool {
        self.results.iter().all(|r| r.consistent != Some(false))
    }
}

impl Display for BenchmarkReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Half-width: {}", self.half_width)?;
        writeln!(f, "  Edge policy: {:?}", self.edge_policy)?;
        writeln!(f, "  Repetitions: {}", self.repetitions)?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(f)?;

        writeln!(f, "Timings:")?;
        writeln!(
            f,
            "{:>18} {:>8} {:>14} {:>14} {:>14} {:>10}",
            "Method", "Size", "Median(us)", "Min(us)", "Max(us)", "Status"
        )?;
        writeln!(f, "  {}", "-".repeat(81))?;

        for r in &self.results {
            let status = match r.consistent {
                Some(false) => "MISMATCH",
                _ if r.is_failure() => "FAILED",
                _ => "ok",
            };
            match r.timing() {
                Some(t) => writeln!(
                    f,
                    "{:>18} {:>8} {:>14.3} {:>14.3} {:>14.3} {:>10}",
                    r.method,
                    r.size,
                    t.median.as_secs_f64() * 1e6,
                    t.min.as_secs_f64() * 1e6,
                    t.max.as_secs_f64() * 1e6,
                    status
                )?,
                None => writeln!(
                    f,
                    "{:>18} {:>8} {:>14} {:>14} {:>14} {:>10}",
                    r.method, r.size, "-", "-", "-", status
                )?,
            }
        }

        let failures: Vec<&BenchmarkResult> = self.failures().collect();
        if !failures.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failures:")?;
            for r in failures {
                if let Some(e) = r.failure() {
                    writeln!(f, "  {}", e)?;
                }
            }
        }
        Ok(())
    }
}
