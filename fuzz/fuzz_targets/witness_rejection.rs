// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the witness verifiers themselves.
//!
//! Verifiers that accept everything are worse than none. This target takes a
//! correct result, perturbs one position, and checks the verifier notices
//! whenever the perturbation actually changed the outcome.

#![no_main]

use libfuzzer_sys::fuzz_target;
use swapwise::{push_zeros_to_end, reverse, verify_reversal, verify_zero_push};

#[derive(Debug, arbitrary::Arbitrary)]
struct Perturbation {
    values: Vec<i64>,
    position: usize,
    replacement: i64,
}

fuzz_target!(|input: Perturbation| {
    let Perturbation {
        values,
        position,
        replacement,
    } = input;
    if values.is_empty() {
        return;
    }
    let position = position % values.len();

    // Verifier must never panic, even on unrelated garbage
    let _ = verify_reversal(&values, &[replacement]);
    let _ = verify_zero_push(&values, &[replacement]);

    let mut reversed = values.clone();
    reverse(&mut reversed);
    let mut broken = reversed.clone();
    broken[position] = replacement;
    if broken != reversed {
        assert!(
            verify_reversal(&values, &broken).is_err(),
            "perturbed reversal accepted: {:?} -> {:?}",
            values,
            broken
        );
    }

    let mut pushed = values.clone();
    push_zeros_to_end(&mut pushed);
    let mut broken = pushed.clone();
    broken[position] = replacement;
    if broken != pushed {
        assert!(
            verify_zero_push(&values, &broken).is_err(),
            "perturbed zero push accepted: {:?} -> {:?}",
            values,
            broken
        );
    }
});
