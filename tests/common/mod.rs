//! Shared test utilities, fixtures and oracles.

#![allow(dead_code)]

// ============================================================================
// DOCUMENTED CASES
// ============================================================================

/// `(input, expected)` pairs for reversal.
pub const REVERSE_CASES: &[(&[i64], &[i64])] = &[
    (&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1]),
    (&[1, 2, 3, 4], &[4, 3, 2, 1]),
    (&[42], &[42]),
    (&[], &[]),
];

/// `(input, expected)` pairs for the zero push.
pub const PUSH_ZERO_CASES: &[(&[i64], &[i64])] = &[
    (&[0, 1, 0, 3, 12], &[1, 3, 12, 0, 0]),
    (&[0, 0, 0, 0], &[0, 0, 0, 0]),
    (&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]),
    (&[0, 0, 1, 2, 3], &[1, 2, 3, 0, 0]),
    (&[0], &[0]),
];

// ============================================================================
// ORACLES
// ============================================================================

/// Allocating reversal: collect the elements back to front.
pub fn oracle_reverse(values: &[i64]) -> Vec<i64> {
    values.iter().rev().copied().collect()
}

/// Allocating zero push: keep the non-zeros, pad with zeros.
pub fn oracle_push_zeros(values: &[i64]) -> Vec<i64> {
    let mut kept: Vec<i64> = values.iter().copied().filter(|&v| v != 0).collect();
    kept.resize(values.len(), 0);
    kept
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Sorted copy, for multiset comparison.
pub fn sorted(values: &[i64]) -> Vec<i64> {
    let mut copy = values.to_vec();
    copy.sort_unstable();
    copy
}

/// Assert that all zeros in `values` form one contiguous suffix.
pub fn assert_zero_suffix(values: &[i64]) {
    let first_zero = values.iter().position(|&v| v == 0).unwrap_or(values.len());
    for (i, &v) in values.iter().enumerate().skip(first_zero) {
        assert_eq!(
            v, 0,
            "non-zero {} at {} after first zero at {}",
            v, i, first_zero
        );
    }
}
