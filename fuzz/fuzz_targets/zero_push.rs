// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the stable zero push.
//!
//! Raw bytes are decoded with a bias toward zero so the interesting cases
//! (runs of zeros, zeros at both ends) show up early.

#![no_main]

use libfuzzer_sys::fuzz_target;
use swapwise::{compact_nonzero, VerificationReport};

/// Input that is zero about half the time.
#[derive(Debug, Clone)]
struct ZeroHeavy(Vec<i64>);

impl<'a> arbitrary::Arbitrary<'a> for ZeroHeavy {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=256)?;
        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            if u.arbitrary::<bool>()? {
                values.push(0);
            } else {
                values.push(u.arbitrary::<i64>()?);
            }
        }
        Ok(ZeroHeavy(values))
    }
}

fuzz_target!(|input: ZeroHeavy| {
    let values = input.0;
    let mut result = values.clone();
    let boundary = compact_nonzero(&mut result);

    let report = VerificationReport::for_zero_push(&values, &result);
    assert!(report.is_ok(), "{:?} -> {:?}: {}", values, result, report);

    // The boundary is exactly the non-zero count
    let nonzero = values.iter().filter(|&&v| v != 0).count();
    assert_eq!(boundary, nonzero);
});
