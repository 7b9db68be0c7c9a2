#![cfg(feature = "dev")]
//! Tests for band index construction and dense band storage.
//!
//! ## Test Organization
//!
//! 1. **Nonzero Count** - `band_nnz` against explicit counts
//! 2. **CSC Layout** - offsets and per-column rows
//! 3. **Dense Storage** - entries and nalgebra product
//! 4. **Sparsification** - dense-then-sparsify equals the direct build
//! 5. **Validation** - invalid sizes and half-widths

use approx::assert_relative_eq;

use bandmean::internals::math::band::{BandedMatrixIndex, band_nnz};
use bandmean::internals::math::dense::DenseBandMatrix;
use bandmean::internals::primitives::errors::BandMeanError;

// ============================================================================
// Nonzero Count Tests
// ============================================================================

/// Test the closed form against the interior/edge decomposition.
#[test]
fn test_band_nnz_matches_decomposition() {
    for k in 0..6usize {
        for n in (2 * k + 1)..40 {
            let expected = (2 * k + 1) * (n - 2 * k) + 3 * k * k + k;
            assert_eq!(band_nnz(n, k), Some(expected), "n={}, k={}", n, k);
        }
    }
}

/// Test that the built index stores exactly `band_nnz` entries.
#[test]
fn test_band_index_nnz() {
    for &(n, k) in &[(1, 0), (5, 2), (9, 2), (10, 4), (100, 3), (7, 6)] {
        let index = BandedMatrixIndex::new(n, k).expect("valid dimensions");
        assert_eq!(Some(index.nnz()), band_nnz(n, k), "n={}, k={}", n, k);
        assert_eq!(index.row_indices().len(), index.nnz());
    }
}

/// Test the count for a half-width that covers most of the matrix.
#[test]
fn test_band_nnz_wide_band() {
    // n=4, k=3 is a full 4x4 matrix.
    assert_eq!(band_nnz(4, 3), Some(16));
    let index = BandedMatrixIndex::new(4, 3).expect("valid dimensions");
    assert_eq!(index.nnz(), 16);
}

/// Test that the count is undefined outside `k < n` and on overflow.
#[test]
fn test_band_nnz_out_of_range() {
    assert_eq!(band_nnz(1, 5), None);
    assert_eq!(band_nnz(4, 4), None);
    assert_eq!(band_nnz(0, 0), None);
    assert_eq!(band_nnz(usize::MAX, usize::MAX / 2), None);
    assert_eq!(band_nnz(1, 0), Some(1));
}

// ============================================================================
// CSC Layout Tests
// ============================================================================

/// Test offsets and rows for n=9, k=2.
#[test]
fn test_band_index_layout() {
    let index = BandedMatrixIndex::new(9, 2).expect("valid dimensions");

    assert_eq!(index.size(), 9);
    assert_eq!(index.half_bandwidth(), 2);
    assert_eq!(
        index.column_offsets(),
        &[0, 3, 7, 12, 17, 22, 27, 32, 36, 39]
    );

    assert_eq!(index.column_rows(0), &[0, 1, 2]);
    assert_eq!(index.column_rows(1), &[0, 1, 2, 3]);
    assert_eq!(index.column_rows(4), &[2, 3, 4, 5, 6]);
    assert_eq!(index.column_rows(8), &[6, 7, 8]);
    assert_eq!(index.column_len(7), 4);
}

/// Test that every column lists distinct, ascending rows within the band.
#[test]
fn test_band_index_rows_sorted_and_banded() {
    let (n, k) = (50usize, 4usize);
    let index = BandedMatrixIndex::new(n, k).expect("valid dimensions");

    for (c, rows) in index.columns().enumerate() {
        assert!(rows.windows(2).all(|w| w[0] < w[1]));
        assert!(rows.iter().all(|&r| r.abs_diff(c) <= k));
        assert_eq!(rows.len(), index.column_len(c));
    }
    assert_eq!(index.columns().count(), n);
}

/// Test that the pattern is symmetric.
#[test]
fn test_band_index_symmetric() {
    let index = BandedMatrixIndex::new(20, 3).expect("valid dimensions");
    for c in 0..20 {
        for &r in index.column_rows(c) {
            assert!(index.column_rows(r).contains(&c));
        }
    }
}

/// Test the diagonal-only band.
#[test]
fn test_band_index_zero_half_width() {
    let index = BandedMatrixIndex::new(4, 0).expect("valid dimensions");
    assert_eq!(index.row_indices(), &[0, 1, 2, 3]);
    assert_eq!(index.column_offsets(), &[0, 1, 2, 3, 4]);
}

// ============================================================================
// Dense Storage Tests
// ============================================================================

/// Test dense entries inside and outside the band.
#[test]
fn test_dense_band_entries() {
    let dense = DenseBandMatrix::<f64>::new(6, 1).expect("valid dimensions");
    assert_eq!(dense.size(), 6);
    assert_eq!(dense.half_bandwidth(), 1);
    assert_eq!(dense.as_slice().len(), 36);

    for r in 0..6usize {
        for c in 0..6 {
            let expected = if r.abs_diff(c) <= 1 { 1.0 } else { 0.0 };
            assert_eq!(dense.get(r, c), expected, "({}, {})", r, c);
        }
    }
}

/// Test the dense product against a hand-computed running sum.
#[test]
fn test_dense_matvec() {
    let dense = DenseBandMatrix::<f64>::new(5, 1).expect("valid dimensions");
    let y = dense
        .matvec(&[1.0, 2.0, 3.0, 4.0, 5.0])
        .expect("matching length");
    let expected = [3.0, 6.0, 9.0, 12.0, 9.0];
    for (a, b) in y.iter().zip(expected.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12);
    }
}

/// Test the f32 dense product.
#[test]
fn test_dense_matvec_f32() {
    let dense = DenseBandMatrix::<f32>::new(4, 1).expect("valid dimensions");
    let y = dense.matvec(&[1.0, 1.0, 1.0, 1.0]).expect("matching length");
    assert_eq!(y, vec![2.0f32, 3.0, 3.0, 2.0]);
}

/// Test that the dense product rejects a wrong-length vector.
#[test]
fn test_dense_matvec_dimension_mismatch() {
    let dense = DenseBandMatrix::<f64>::new(5, 1).expect("valid dimensions");
    let err = dense.matvec(&[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        BandMeanError::DimensionMismatch {
            expected: 5,
            got: 2
        }
    );
}

// ============================================================================
// Sparsification Tests
// ============================================================================

/// Test that sparsifying the dense matrix reproduces the direct build.
#[test]
fn test_from_dense_equals_direct_build() {
    for &(n, k) in &[(1, 0), (5, 2), (9, 2), (16, 3), (33, 7)] {
        let direct = BandedMatrixIndex::new(n, k).expect("valid dimensions");
        let dense = DenseBandMatrix::<f64>::new(n, k).expect("valid dimensions");
        let sparsified = BandedMatrixIndex::from_dense(&dense);
        assert_eq!(sparsified, direct, "n={}, k={}", n, k);
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test rejection of an empty matrix.
#[test]
fn test_band_index_zero_size() {
    let err = BandedMatrixIndex::new(0, 0).unwrap_err();
    assert!(matches!(err, BandMeanError::InvalidArgument(_)));

    let err = DenseBandMatrix::<f64>::new(0, 0).unwrap_err();
    assert!(matches!(err, BandMeanError::InvalidArgument(_)));
}

/// Test that sizes whose storage overflows `usize` are rejected up front.
#[test]
fn test_band_size_overflow() {
    let err = DenseBandMatrix::<f64>::new(usize::MAX, 1).unwrap_err();
    assert!(matches!(err, BandMeanError::InvalidArgument(_)));

    let err = BandedMatrixIndex::new(usize::MAX, 1).unwrap_err();
    assert!(matches!(err, BandMeanError::InvalidArgument(_)));
}

/// Test rejection of a half-width not smaller than the size.
#[test]
fn test_band_index_half_width_too_large() {
    let err = BandedMatrixIndex::new(3, 3).unwrap_err();
    assert_eq!(
        format!("{}", err),
        "Invalid argument: half-width 3 must be smaller than size 3"
    );
}
