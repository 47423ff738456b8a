// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the swapwise rearrangements.
//!
//! This standalone crate carries the two-pointer loops over `i32` slices and
//! proves them for every input up to `MAX_LEN` elements.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: neither loop indexes out of bounds or underflows
//! 2. **Mirror**: `reverse` leaves `out[i] == in[len - 1 - i]`
//! 3. **Partition**: after `compact_nonzero`, `[..b]` has no zeros, `[b..]` only zeros
//! 4. **Stability**: the non-zero subsequence is unchanged

/// Largest slice length the proofs quantify over.
pub const MAX_LEN: usize = 6;

// ============================================================================
// ALGORITHMS (same loops as src/reverse.rs and src/zeros.rs)
// ============================================================================

/// Reverse in place with two converging pointers.
pub fn reverse(sequence: &mut [i32]) {
    let len = sequence.len();
    if len == 0 {
        return;
    }
    let mut left = 0;
    let mut right = len - 1;
    while left < right {
        sequence.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Compact non-zeros to the front, return the boundary.
pub fn compact_nonzero(sequence: &mut [i32]) -> usize {
    let mut write = 0;
    for read in 0..sequence.len() {
        if sequence[read] != 0 {
            sequence.swap(write, read);
            write += 1;
        }
    }
    write
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic array plus a symbolic length no larger than MAX_LEN.
    fn any_prefix() -> ([i32; MAX_LEN], usize) {
        let values: [i32; MAX_LEN] = kani::any();
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        (values, len)
    }

    /// Verify reverse never panics and mirrors every position.
    #[kani::proof]
    #[kani::unwind(7)] // MAX_LEN + 1
    fn verify_reverse_mirrors() {
        let (original, len) = any_prefix();
        let mut values = original;
        reverse(&mut values[..len]);

        for i in 0..len {
            kani::assert(
                values[i] == original[len - 1 - i],
                "reverse must mirror every position",
            );
        }
        // Elements past len are untouched
        for i in len..MAX_LEN {
            kani::assert(values[i] == original[i], "reverse must stay in bounds");
        }
    }

    /// Verify reverse is an involution.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_reverse_involution() {
        let (original, len) = any_prefix();
        let mut values = original;
        reverse(&mut values[..len]);
        reverse(&mut values[..len]);
        kani::assert(values == original, "reverse twice must be identity");
    }

    /// Verify compact_nonzero partitions around its boundary.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_compact_partitions() {
        let (original, len) = any_prefix();
        let mut values = original;
        let boundary = compact_nonzero(&mut values[..len]);

        kani::assert(boundary <= len, "boundary must be in range");
        for i in 0..len {
            if i < boundary {
                kani::assert(values[i] != 0, "prefix must hold only non-zeros");
            } else {
                kani::assert(values[i] == 0, "suffix must hold only zeros");
            }
        }
    }

    /// Verify the non-zero subsequence survives in order.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_compact_is_stable() {
        let (original, len) = any_prefix();
        let mut values = original;
        let boundary = compact_nonzero(&mut values[..len]);

        let mut k = 0;
        for i in 0..len {
            if original[i] != 0 {
                kani::assert(k < boundary, "every non-zero lands in the prefix");
                kani::assert(values[k] == original[i], "non-zero order must be preserved");
                k += 1;
            }
        }
        kani::assert(k == boundary, "boundary equals the non-zero count");
    }
}
