#![cfg(feature = "dev")]
//! Tests for the fluent API and cross-method equivalence.
//!
//! ## Test Organization
//!
//! 1. **Builder** - defaults, duplicates and required parameters
//! 2. **Smoothing** - reference values and input validation
//! 3. **Equivalence** - every method against the direct running mean
//! 4. **Result** - accessors and formatting

use approx::assert_relative_eq;
use bandmean::prelude::*;

use bandmean::internals::engine::executor::{Method, execute};
use bandmean::internals::math::weights::EdgePolicy;

fn signal(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            (t * 0.05).sin() * 3.0 + (t * 0.71).cos() + t * 0.01
        })
        .collect()
}

fn assert_same_running_mean(a: &[Option<f64>], b: &[Option<f64>], tol: f64) {
    assert_eq!(a.len(), b.len());
    for (i, (u, v)) in a.iter().zip(b.iter()).enumerate() {
        match (u, v) {
            (Some(u), Some(v)) => assert_relative_eq!(*u, *v, epsilon = tol),
            (None, None) => {}
            _ => panic!("missing markers differ at position {}", i),
        }
    }
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults.
#[test]
fn test_builder_defaults() {
    let model = RunningMean::new().half_width(3).build().expect("valid");
    assert_eq!(model.half_width(), 3);
    assert_eq!(model.method(), Method::Direct);
    assert_eq!(model.edge_policy(), EdgePolicy::Missing);
}

/// Test that the half-width is required.
#[test]
fn test_builder_requires_half_width() {
    let err = RunningMean::new().method(Sparse).build().unwrap_err();
    assert_eq!(
        format!("{}", err),
        "Invalid argument: half_width must be set"
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_builder_duplicate_parameters() {
    let err = RunningMean::new()
        .half_width(2)
        .half_width(3)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BandMeanError::DuplicateParameter {
            parameter: "half_width"
        }
    );

    let err = RunningMean::new()
        .half_width(2)
        .method(Dense)
        .method(Sparse)
        .build()
        .unwrap_err();
    assert_eq!(err, BandMeanError::DuplicateParameter { parameter: "method" });

    let err = RunningMean::new()
        .half_width(2)
        .edge_policy(Shrink)
        .edge_policy(Missing)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BandMeanError::DuplicateParameter {
            parameter: "edge_policy"
        }
    );
}

// ============================================================================
// Smoothing Tests
// ============================================================================

/// Test the reference scenario through every method.
#[test]
fn test_smooth_reference_all_methods() {
    let x: Vec<f64> = (1..=9).map(|i| i as f64).collect();

    for method in Method::ALL {
        let result = RunningMean::new()
            .half_width(2)
            .method(method)
            .build()
            .expect("valid")
            .smooth(&x)
            .expect("valid input");

        assert_eq!(result.len(), 9, "{}", method);
        assert_eq!(result.defined_count(), 5, "{}", method);
        assert_relative_eq!(result.get(4).expect("defined"), 5.0, epsilon = 1e-12);
        for i in [0, 1, 7, 8] {
            assert_eq!(result.get(i), None, "{} at {}", method, i);
        }
    }
}

/// Test input validation in `smooth`.
#[test]
fn test_smooth_invalid_input() {
    let model = RunningMean::new().half_width(2).build().expect("valid");

    let empty: Vec<f64> = Vec::new();
    assert_eq!(model.smooth(&empty).unwrap_err(), BandMeanError::EmptyInput);

    let short = vec![1.0, 2.0];
    assert!(matches!(
        model.smooth(&short).unwrap_err(),
        BandMeanError::InvalidArgument(_)
    ));

    let bad = vec![1.0, 2.0, f64::NAN, 4.0, 5.0];
    assert_eq!(
        model.smooth(&bad).unwrap_err(),
        BandMeanError::InvalidNumericValue("x[2]=NaN".to_string())
    );
}

/// Test f32 input.
#[test]
fn test_smooth_f32() {
    let x: Vec<f32> = (1..=7).map(|i| i as f32).collect();
    for method in Method::ALL {
        let result = RunningMean::new()
            .half_width(1)
            .method(method)
            .build()
            .expect("valid")
            .smooth(&x)
            .expect("valid input");
        assert_relative_eq!(result.get(3).expect("defined"), 4.0f32, epsilon = 1e-5);
    }
}

// ============================================================================
// Equivalence Tests
// ============================================================================

/// Test that every method agrees with the direct running mean.
#[test]
fn test_all_methods_match_direct() {
    for &(n, k) in &[(1, 0), (5, 2), (9, 2), (64, 3), (257, 10), (40, 19)] {
        let x = signal(n);
        for policy in [EdgePolicy::Missing, EdgePolicy::Shrink] {
            let reference = direct_running_mean(&x, k, policy).expect("valid input");
            for method in Method::ALL {
                let y = execute(method, &x, k, policy).expect("valid input");
                assert_same_running_mean(&y, &reference, 1e-9);
            }
        }
    }
}

/// Test that the zero half-width returns the input for every method.
#[test]
fn test_all_methods_zero_half_width() {
    let x = signal(16);
    for method in Method::ALL {
        let y = execute(method, &x, 0, EdgePolicy::Missing).expect("valid input");
        for (a, b) in y.iter().zip(x.iter()) {
            assert_relative_eq!(a.expect("defined"), *b, epsilon = 1e-12);
        }
    }
}

/// Test that every method rejects the same non-finite input.
#[test]
fn test_all_methods_reject_non_finite() {
    let mut x = signal(12);
    for bad in [f64::NAN, f64::INFINITY] {
        x[1] = bad;
        for method in Method::ALL {
            assert!(
                matches!(
                    execute(method, &x, 1, EdgePolicy::Missing).unwrap_err(),
                    BandMeanError::InvalidNumericValue(_)
                ),
                "{}",
                method
            );
        }
    }
}

/// Test that an oversized half-width is rejected by every method.
#[test]
fn test_all_methods_reject_huge_half_width() {
    let x = signal(8);
    for method in Method::ALL {
        assert!(
            matches!(
                execute(method, &x, usize::MAX, EdgePolicy::Missing).unwrap_err(),
                BandMeanError::InvalidArgument(_)
            ),
            "{}",
            method
        );
    }
}

// ============================================================================
// Result Tests
// ============================================================================

/// Test result accessors.
#[test]
fn test_result_accessors() {
    let x: Vec<f64> = (1..=5).map(|i| i as f64).collect();
    let result = RunningMean::new()
        .half_width(1)
        .build()
        .expect("valid")
        .smooth(&x)
        .expect("valid input");

    assert!(!result.is_empty());
    assert_eq!(result.half_width, 1);
    assert_eq!(result.method, Method::Direct);
    assert_eq!(result.get(99), None);

    let filled = result.filled(-1.0);
    assert_eq!(filled[0], -1.0);
    assert_eq!(filled[4], -1.0);
    assert_relative_eq!(filled[2], 3.0, epsilon = 1e-12);
}

/// Test result formatting.
#[test]
fn test_result_display() {
    let x: Vec<f64> = (1..=5).map(|i| i as f64).collect();
    let result = RunningMean::new()
        .half_width(1)
        .method(Filter)
        .build()
        .expect("valid")
        .smooth(&x)
        .expect("valid input");

    let text = format!("{}", result);
    assert!(text.contains("Method: filter"));
    assert!(text.contains("Defined: 3"));
    assert!(text.contains("NA"));
}

/// Test method names.
#[test]
fn test_method_names() {
    let names: Vec<&str> = Method::ALL.iter().map(|m| m.name()).collect();
    assert_eq!(
        names,
        vec!["direct", "sparse", "dense", "sparsified_dense", "filter"]
    );
    assert_eq!(format!("{}", Method::SparsifiedDense), "sparsified_dense");
}
