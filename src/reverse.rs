// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-place reversal with two converging pointers.
//!
//! One pointer starts at the front, one at the back. Swap, step both inward,
//! stop when they meet or cross. Each element moves at most once, so the
//! whole thing is O(n) time and O(1) extra space.
//!
//! Empty and single-element slices need no special case: the loop condition
//! `left < right` is false before the first iteration.

use crate::verify::contracts::check_pointers_converged;

/// Reverse a slice in place and hand it back for chaining.
///
/// Output position `i` holds what input position `len - 1 - i` held.
///
/// ```
/// let mut values = [1, 2, 3, 4, 5];
/// swapwise::reverse(&mut values);
/// assert_eq!(values, [5, 4, 3, 2, 1]);
/// ```
pub fn reverse<T>(sequence: &mut [T]) -> &mut [T] {
    let len = sequence.len();
    if len == 0 {
        return sequence;
    }

    let mut left = 0;
    let mut right = len - 1;

    // INVARIANT: every position outside [left, right] already holds its mirror
    while left < right {
        sequence.swap(left, right);
        left += 1;
        right -= 1;
    }

    check_pointers_converged(left, right, len);
    sequence
}

/// Owning variant of [`reverse`]: reverses the vector's storage and returns it.
pub fn reversed<T>(mut sequence: Vec<T>) -> Vec<T> {
    reverse(&mut sequence);
    sequence
}
