// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stable zero compaction: push every zero to the back, keep non-zeros in order.
//!
//! A `write` pointer trails a `read` pointer. Each non-zero found by `read` is
//! swapped down to `write`, which then advances. Zeros are never moved on
//! purpose; they drift right because the non-zeros they were swapped with
//! took their place. When `read == write` the swap is a no-op.
//!
//! The trick that keeps this stable: `write` only ever points at a zero or at
//! `read` itself, so a swap never reorders two non-zeros.

use num_traits::Zero;

use crate::verify::contracts::check_zero_partition;
use crate::verify::ZeroSplit;

/// Move every zero to the end of the slice, preserving non-zero order.
///
/// Returns the same slice for chaining.
///
/// ```
/// let mut values = [0, 1, 0, 3, 12];
/// swapwise::push_zeros_to_end(&mut values);
/// assert_eq!(values, [1, 3, 12, 0, 0]);
/// ```
pub fn push_zeros_to_end<T: Zero>(sequence: &mut [T]) -> &mut [T] {
    compact_nonzero(sequence);
    sequence
}

/// Compact the non-zero elements to the front and return how many there are.
///
/// The return value is the boundary: `sequence[..boundary]` holds the
/// non-zeros in their original order, `sequence[boundary..]` holds only zeros.
pub fn compact_nonzero<T: Zero>(sequence: &mut [T]) -> usize {
    let mut write = 0;

    // INVARIANT: sequence[..write] holds the non-zeros seen so far, in order,
    // and sequence[write..read] holds only zeros
    for read in 0..sequence.len() {
        if !sequence[read].is_zero() {
            sequence.swap(write, read);
            write += 1;
        }
    }

    check_zero_partition(sequence, write);
    write
}

/// Compact the slice and return a witness that knows where the zeros start.
///
/// ```
/// let mut values = [0, 7, 0, 9];
/// let split = swapwise::split_zeros(&mut values);
/// assert_eq!(split.nonzero(), &[7, 9]);
/// assert_eq!(split.zeros().len(), 2);
/// ```
pub fn split_zeros<T: Zero>(sequence: &mut [T]) -> ZeroSplit<'_, T> {
    let boundary = compact_nonzero(sequence);
    ZeroSplit::from_compacted(sequence, boundary)
}
