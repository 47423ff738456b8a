// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the in-place rearrangements.
//!
//! Debug-mode assertions that verify what can be verified without keeping a
//! copy of the input. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Never allocate, so calling them keeps the O(1) space bound
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Property                                          |
//! |-----------------------------|---------------------------------------------------|
//! | `check_pointers_converged`  | reversal visited every mirrored pair exactly once |
//! | `check_zero_partition`      | non-zero prefix, zero suffix around the boundary  |
//! | `check_mirrored`            | `result[i] == original[len - 1 - i]`              |
//! | `check_nonzero_order`       | non-zero subsequence unchanged                    |
//!
//! The last two need the original, so only tests call them.

use num_traits::Zero;
use std::fmt::Debug;

// ============================================================================
// REVERSAL CONTRACTS
// ============================================================================

/// Check that the reversal pointers stopped exactly in the middle.
///
/// For odd lengths the pointers meet on the centre element; for even lengths
/// they cross with `left == right + 1`. Either way `left == len / 2`.
///
/// # Panics (debug builds only)
/// Panics if the loop stopped early or overshot.
#[inline]
pub fn check_pointers_converged(left: usize, right: usize, len: usize) {
    // INVARIANT: pointers meet (odd) or cross by one (even)
    debug_assert!(
        left == right || left == right + 1,
        "Contract violation: pointers did not converge - left {} right {}",
        left,
        right
    );
    // INVARIANT: exactly len / 2 swaps were made
    debug_assert_eq!(
        left,
        len / 2,
        "Contract violation: reversal stopped at {} for length {}",
        left,
        len
    );
}

/// Check that `result` is the mirror image of `original`.
///
/// # Panics (debug builds only)
/// Panics on the first position whose element is not the mirror's.
#[inline]
pub fn check_mirrored<T: PartialEq + Debug>(original: &[T], result: &[T]) {
    debug_assert_eq!(
        original.len(),
        result.len(),
        "Contract violation: reversal changed the length"
    );
    let len = result.len();
    for (i, value) in result.iter().enumerate() {
        // INVARIANT: output[i] == input[len - 1 - i]
        debug_assert!(
            *value == original[len - 1 - i],
            "Contract violation: result[{}] = {:?} but original[{}] = {:?}",
            i,
            value,
            len - 1 - i,
            original[len - 1 - i]
        );
    }
}

// ============================================================================
// ZERO-PUSH CONTRACTS
// ============================================================================

/// Check that everything before `boundary` is non-zero and everything after
/// is zero.
///
/// # Panics (debug builds only)
/// Panics if a zero is found in the prefix or a non-zero in the suffix.
#[inline]
pub fn check_zero_partition<T: Zero>(sequence: &[T], boundary: usize) {
    debug_assert!(
        boundary <= sequence.len(),
        "Contract violation: boundary {} past end {}",
        boundary,
        sequence.len()
    );
    if cfg!(debug_assertions) {
        // INVARIANT: prefix holds only non-zeros
        for (i, value) in sequence[..boundary].iter().enumerate() {
            debug_assert!(
                !value.is_zero(),
                "Contract violation: zero at {} inside non-zero prefix of length {}",
                i,
                boundary
            );
        }
        // INVARIANT: suffix holds only zeros
        for (i, value) in sequence[boundary..].iter().enumerate() {
            debug_assert!(
                value.is_zero(),
                "Contract violation: non-zero at {} inside zero suffix",
                boundary + i
            );
        }
    }
}

/// Check that the non-zero elements of `result` appear in the same order as
/// in `original`.
///
/// # Panics (debug builds only)
/// Panics on the first non-zero that differs, or if the counts differ.
#[inline]
pub fn check_nonzero_order<T: Zero + PartialEq + Debug>(original: &[T], result: &[T]) {
    let mut before = original.iter().filter(|v| !v.is_zero());
    let mut after = result.iter().filter(|v| !v.is_zero());
    let mut position = 0;
    loop {
        match (before.next(), after.next()) {
            (Some(a), Some(b)) => {
                // INVARIANT: stable relative order of non-zeros
                debug_assert!(
                    a == b,
                    "Contract violation: non-zero #{} was {:?}, now {:?}",
                    position,
                    a,
                    b
                );
            }
            (None, None) => break,
            (a, b) => {
                if cfg!(debug_assertions) {
                    panic!(
                        "Contract violation: non-zero count changed at #{} ({:?} vs {:?})",
                        position, a, b
                    );
                }
                break;
            }
        }
        position += 1;
    }
}
