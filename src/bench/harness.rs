//! Benchmark configuration and the measurement loop.
//!
//! ## Purpose
//!
//! This module times every registered candidate at every configured input
//! size and collects the medians into a `BenchmarkReport`.
//!
//! ## Design notes
//!
//! * **Same input**: Each size gets one seeded standard-normal vector shared
//!   by every candidate.
//! * **Cell isolation**: An `Err` or a panic from a candidate aborts only its
//!   (candidate, size) cell. The cell is recorded as failed and the run
//!   continues.
//! * **Deferred validation**: The builder records settings and validates
//!   them all at `build()`.
//! * **Ordered output**: Results follow registration order, then size order,
//!   also when cells run on a rayon pool.
//!
//! ## Key concepts
//!
//! * **Warmup**: Untimed invocations before the timed repetitions.
//! * **Consistency check**: With a tolerance set, each successful cell is
//!   compared with the built-in direct method at the same size, or with the
//!   first successful candidate when direct is not registered or failed.
//!   Missing markers must coincide and defined values must agree within the
//!   tolerance.
//!
//! ## Non-goals
//!
//! * This module does not plot or persist results.
//! * This module does not retry failed cells.

// External dependencies
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::any::Any;
use std::hint::black_box;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::bench::candidate::{Candidate, CandidateOutput, MethodCandidate};
use crate::bench::report::{BenchmarkReport, BenchmarkResult, Outcome, TimingSummary};
use crate::engine::executor::Method;
use crate::engine::validator::Validator;
use crate::math::weights::EdgePolicy;
use crate::primitives::errors::BandMeanError;

// ============================================================================
// Configuration
// ============================================================================

/// Plain harness configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BenchmarkConfig {
    /// Input lengths to benchmark.
    pub sizes: Vec<usize>,

    /// Timed repetitions per cell.
    pub repetitions: usize,

    /// Untimed invocations before timing.
    pub warmup: usize,

    /// Window half-width `k`.
    pub half_width: usize,

    /// Seed for input generation.
    pub seed: u64,

    /// Edge policy for built-in candidates.
    pub edge_policy: EdgePolicy,

    /// Built-in methods used by `BenchmarkHarness::from_config`.
    pub methods: Vec<Method>,

    /// Tolerance for the cross-candidate check; `None` disables it.
    pub consistency_tolerance: Option<f64>,

    /// Evaluate cells on the rayon pool (feature `parallel`).
    pub parallel: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![512, 1024, 2048],
            repetitions: 10,
            warmup: 1,
            half_width: 2,
            seed: 42,
            edge_policy: EdgePolicy::Missing,
            methods: Method::ALL.to_vec(),
            consistency_tolerance: None,
            parallel: false,
        }
    }
}

impl BenchmarkConfig {
    fn validate(&self, candidates: usize) -> Result<(), BandMeanError> {
        Validator::validate_sizes(&self.sizes, self.half_width)?;
        Validator::validate_repetitions(self.repetitions)?;
        Validator::validate_candidates(candidates)?;
        if let Some(tol) = self.consistency_tolerance {
            Validator::validate_tolerance(tol)?;
        }
        Ok(())
    }
}

// ============================================================================
// Builder
// ============================================================================

enum Registration {
    Method(Method),
    Custom(Box<dyn Candidate>),
}

/// Fluent builder for a `BenchmarkHarness`.
#[derive(Default)]
pub struct BenchmarkBuilder {
    sizes: Option<Vec<usize>>,
    repetitions: Option<usize>,
    warmup: Option<usize>,
    half_width: Option<usize>,
    seed: Option<u64>,
    edge_policy: Option<EdgePolicy>,
    consistency_tolerance: Option<f64>,
    parallel: Option<bool>,
    registrations: Vec<Registration>,
    duplicate_param: Option<&'static str>,
}

impl BenchmarkBuilder {
    /// Create a builder with default settings and no candidates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input lengths.
    pub fn sizes(mut self, sizes: &[usize]) -> Self {
        if self.sizes.is_some() {
            self.duplicate_param = Some("sizes");
        }
        self.sizes = Some(sizes.to_vec());
        self
    }

    /// Set the number of timed repetitions per cell.
    pub fn repetitions(mut self, repetitions: usize) -> Self {
        if self.repetitions.is_some() {
            self.duplicate_param = Some("repetitions");
        }
        self.repetitions = Some(repetitions);
        self
    }

    /// Set the number of untimed warmup invocations per cell.
    pub fn warmup(mut self, warmup: usize) -> Self {
        if self.warmup.is_some() {
            self.duplicate_param = Some("warmup");
        }
        self.warmup = Some(warmup);
        self
    }

    /// Set the window half-width `k`.
    pub fn half_width(mut self, k: usize) -> Self {
        if self.half_width.is_some() {
            self.duplicate_param = Some("half_width");
        }
        self.half_width = Some(k);
        self
    }

    /// Set the input generator seed.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set the edge policy used by built-in candidates.
    pub fn edge_policy(mut self, policy: EdgePolicy) -> Self {
        if self.edge_policy.is_some() {
            self.duplicate_param = Some("edge_policy");
        }
        self.edge_policy = Some(policy);
        self
    }

    /// Compare candidate outputs at each size within `tol`.
    pub fn check_consistency(mut self, tol: f64) -> Self {
        if self.consistency_tolerance.is_some() {
            self.duplicate_param = Some("check_consistency");
        }
        self.consistency_tolerance = Some(tol);
        self
    }

    /// Evaluate cells on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Register a custom candidate.
    pub fn candidate<C: Candidate + 'static>(mut self, candidate: C) -> Self {
        self.registrations
            .push(Registration::Custom(Box::new(candidate)));
        self
    }

    /// Register a built-in method.
    pub fn method(mut self, method: Method) -> Self {
        self.registrations.push(Registration::Method(method));
        self
    }

    /// Register several built-in methods in order.
    pub fn methods(mut self, methods: &[Method]) -> Self {
        self.registrations
            .extend(methods.iter().copied().map(Registration::Method));
        self
    }

    /// Validate the configuration and build the harness.
    pub fn build(self) -> Result<BenchmarkHarness, BandMeanError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = BenchmarkConfig::default();
        let edge_policy = self.edge_policy.unwrap_or(defaults.edge_policy);

        let mut methods = Vec::new();
        let mut reference = None;
        let candidates: Vec<Box<dyn Candidate>> = self
            .registrations
            .into_iter()
            .enumerate()
            .map(|(i, r)| match r {
                Registration::Method(m) => {
                    if m == Method::Direct && reference.is_none() {
                        reference = Some(i);
                    }
                    methods.push(m);
                    Box::new(MethodCandidate::new(m, edge_policy)) as Box<dyn Candidate>
                }
                Registration::Custom(c) => c,
            })
            .collect();

        let config = BenchmarkConfig {
            sizes: self.sizes.unwrap_or(defaults.sizes),
            repetitions: self.repetitions.unwrap_or(defaults.repetitions),
            warmup: self.warmup.unwrap_or(defaults.warmup),
            half_width: self.half_width.unwrap_or(defaults.half_width),
            seed: self.seed.unwrap_or(defaults.seed),
            edge_policy,
            methods,
            consistency_tolerance: self.consistency_tolerance,
            parallel: self.parallel.unwrap_or(defaults.parallel),
        };
        config.validate(candidates.len())?;

        Ok(BenchmarkHarness {
            config,
            candidates,
            reference,
        })
    }
}

// ============================================================================
// Harness
// ============================================================================

/// A validated benchmark over candidates and input sizes.
pub struct BenchmarkHarness {
    config: BenchmarkConfig,
    candidates: Vec<Box<dyn Candidate>>,

    // Index of the built-in direct method, the preferred consistency reference.
    reference: Option<usize>,
}

impl BenchmarkHarness {
    /// Start configuring a harness.
    pub fn builder() -> BenchmarkBuilder {
        BenchmarkBuilder::new()
    }

    /// Build a harness over `config.methods` from a plain configuration.
    pub fn from_config(config: BenchmarkConfig) -> Result<Self, BandMeanError> {
        let candidates: Vec<Box<dyn Candidate>> = config
            .methods
            .iter()
            .map(|&m| Box::new(MethodCandidate::new(m, config.edge_policy)) as Box<dyn Candidate>)
            .collect();
        config.validate(candidates.len())?;
        let reference = config.methods.iter().position(|&m| m == Method::Direct);
        Ok(Self {
            config,
            candidates,
            reference,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Registered candidate names in order.
    pub fn candidate_names(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.name()).collect()
    }

    /// Time every candidate at every size.
    pub fn run(&self) -> BenchmarkReport {
        let cfg = &self.config;
        info!(
            candidates = self.candidates.len(),
            sizes = ?cfg.sizes,
            half_width = cfg.half_width,
            repetitions = cfg.repetitions,
            "starting benchmark run"
        );

        let inputs: Vec<Vec<f64>> = cfg
            .sizes
            .iter()
            .map(|&n| generate_input(n, cfg.seed))
            .collect();

        let cells: Vec<(usize, usize)> = (0..self.candidates.len())
            .flat_map(|c| (0..cfg.sizes.len()).map(move |s| (c, s)))
            .collect();

        let measured = self.measure_cells(&cells, &inputs);

        let (mut results, outputs): (Vec<BenchmarkResult>, Vec<Option<CandidateOutput>>) =
            measured.into_iter().unzip();

        if let Some(tol) = cfg.consistency_tolerance {
            mark_consistency(
                &cells,
                &mut results,
                &outputs,
                cfg.sizes.len(),
                self.reference,
                tol,
            );
        }

        let failed = results.iter().filter(|r| r.is_failure()).count();
        info!(cells = results.len(), failed, "benchmark run finished");

        BenchmarkReport {
            half_width: cfg.half_width,
            edge_policy: cfg.edge_policy,
            repetitions: cfg.repetitions,
            seed: cfg.seed,
            results,
        }
    }

    fn measure_cells(
        &self,
        cells: &[(usize, usize)],
        inputs: &[Vec<f64>],
    ) -> Vec<(BenchmarkResult, Option<CandidateOutput>)> {
        let cell = |&(c, s): &(usize, usize)| self.measure_cell(c, &inputs[s]);

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return cells.par_iter().map(cell).collect();
            }
        }

        cells.iter().map(cell).collect()
    }

    fn measure_cell(&self, c: usize, x: &[f64]) -> (BenchmarkResult, Option<CandidateOutput>) {
        let candidate = self.candidates[c].as_ref();
        let cfg = &self.config;
        let size = x.len();

        let (outcome, output) = match time_candidate(candidate, x, cfg) {
            Ok((summary, output)) => {
                debug!(
                    candidate = candidate.name(),
                    size,
                    median_us = summary.median.as_secs_f64() * 1e6,
                    "cell timed"
                );
                (Outcome::Timed(summary), Some(output))
            }
            Err(reason) => {
                warn!(candidate = candidate.name(), size, %reason, "cell failed");
                let err = BandMeanError::CandidateFailure {
                    candidate: candidate.name().to_string(),
                    size,
                    reason,
                };
                (Outcome::Failed(err), None)
            }
        };

        let result = BenchmarkResult {
            method: candidate.name().to_string(),
            size,
            outcome,
            consistent: None,
        };
        (result, output)
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// Seeded standard-normal input of length `size`.
pub fn generate_input(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed ^ size as u64);
    (0..size).map(|_| rng.sample::<f64, _>(StandardNormal)).collect()
}

fn time_candidate(
    candidate: &dyn Candidate,
    x: &[f64],
    cfg: &BenchmarkConfig,
) -> Result<(TimingSummary, CandidateOutput), String> {
    for _ in 0..cfg.warmup {
        black_box(invoke(candidate, x, cfg.half_width)?);
    }

    let mut samples: Vec<Duration> = Vec::with_capacity(cfg.repetitions);
    let mut last = None;
    for _ in 0..cfg.repetitions {
        let start = Instant::now();
        let output = black_box(invoke(candidate, x, cfg.half_width)?);
        samples.push(start.elapsed());
        last = Some(output);
    }

    match (TimingSummary::from_samples(&mut samples), last) {
        (Some(summary), Some(output)) => Ok((summary, output)),
        _ => Err("no repetitions were timed".to_string()),
    }
}

fn invoke(candidate: &dyn Candidate, x: &[f64], k: usize) -> Result<CandidateOutput, String> {
    match catch_unwind(AssertUnwindSafe(|| candidate.run(black_box(x), k))) {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => Err(format!("panicked: {}", panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}

// ============================================================================
// Consistency
// ============================================================================

fn mark_consistency(
    cells: &[(usize, usize)],
    results: &mut [BenchmarkResult],
    outputs: &[Option<CandidateOutput>],
    sizes: usize,
    direct_index: Option<usize>,
    tol: f64,
) {
    for s in 0..sizes {
        let in_size: Vec<usize> = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.1 == s)
            .map(|(i, _)| i)
            .collect();

        // The direct method when it succeeded, else the first success.
        let direct = in_size
            .iter()
            .find(|&&i| Some(cells[i].0) == direct_index)
            .and_then(|&i| outputs[i].as_ref());
        let Some(reference) = direct.or_else(|| in_size.iter().find_map(|&i| outputs[i].as_ref()))
        else {
            continue;
        };

        for &i in &in_size {
            if let Some(output) = &outputs[i] {
                let agrees = outputs_agree(reference, output, tol);
                if !agrees {
                    warn!(
                        candidate = results[i].method.as_str(),
                        size = results[i].size,
                        "output disagrees with reference"
                    );
                }
                results[i].consistent = Some(agrees);
            }
        }
    }
}

fn outputs_agree(a: &[Option<f64>], b: &[Option<f64>], tol: f64) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(u, v)| match (u, v) {
            (Some(u), Some(v)) => (u - v).abs() <= tol,
            (None, None) => true,
            _ => false,
        })
}
