// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for in-place reversal.
//!
//! Any byte soup becomes a vector of i64. Reversal must never panic, must
//! mirror every position, and must undo itself.

#![no_main]

use libfuzzer_sys::fuzz_target;
use swapwise::{reverse, verify_reversal};

fuzz_target!(|values: Vec<i64>| {
    let mut result = values.clone();
    reverse(&mut result);

    // Property 1: mirror image of the input
    if let Err(e) = verify_reversal(&values, &result) {
        panic!("reversal of {:?} produced {:?}: {}", values, result, e);
    }

    // Property 2: involution
    reverse(&mut result);
    assert_eq!(result, values, "reverse(reverse(x)) != x");
});
