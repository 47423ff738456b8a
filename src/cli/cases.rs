// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Demonstration cases and the code that runs them.
//!
//! Every case runs on a copy of its literal input, so the original stays
//! available for display and, with `--verify`, as the witness.

use serde::{Serialize, Serializer};
use swapwise::{push_zeros_to_end, reverse, Operation, VerificationReport};
use tracing::{debug, warn};

/// Reversal demo inputs: odd length, even length, single element, empty.
pub const REVERSE_CASES: &[&[i64]] = &[&[1, 2, 3, 4, 5], &[1, 2, 3, 4], &[42], &[]];

/// Zero-push demo inputs: mixed, all zeros, no zeros, leading zeros, lone zero.
pub const PUSH_ZERO_CASES: &[&[i64]] = &[
    &[0, 1, 0, 3, 12],
    &[0, 0, 0, 0],
    &[1, 2, 3, 4, 5],
    &[0, 0, 1, 2, 3],
    &[0],
];

/// One rearrangement applied to one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    #[serde(serialize_with = "serialize_operation")]
    pub operation: Operation,
    pub original: Vec<i64>,
    pub result: Vec<i64>,
    /// Present only when the run was asked to verify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<String>,
}

impl CaseOutcome {
    /// True unless verification ran and found a violation.
    pub fn passed(&self) -> bool {
        self.verified != Some(false)
    }
}

/// Operations serialize as their command names.
fn serialize_operation<S: Serializer>(operation: &Operation, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(operation)
}

/// The demo inputs for `op`, or for both operations when `op` is `None`.
pub fn demo_cases(op: Option<Operation>) -> Vec<(Operation, Vec<i64>)> {
    let reverse_cases = REVERSE_CASES
        .iter()
        .map(|case| (Operation::Reverse, case.to_vec()));
    let zero_cases = PUSH_ZERO_CASES
        .iter()
        .map(|case| (Operation::PushZeros, case.to_vec()));

    reverse_cases
        .chain(zero_cases)
        .filter(|(case_op, _)| op.is_none() || op == Some(*case_op))
        .collect()
}

/// Apply `operation` to a copy of `values`.
pub fn run_case(operation: Operation, values: Vec<i64>, verify: bool) -> CaseOutcome {
    let mut result = values.clone();
    match operation {
        Operation::Reverse => {
            reverse(&mut result);
        }
        Operation::PushZeros => {
            push_zeros_to_end(&mut result);
        }
    }
    debug!(%operation, len = values.len(), "rearranged");

    let (verified, violations) = if verify {
        let report = match operation {
            Operation::Reverse => VerificationReport::for_reversal(&values, &result),
            Operation::PushZeros => VerificationReport::for_zero_push(&values, &result),
        };
        if !report.is_ok() {
            warn!(%report, "verification failed");
        }
        let violations = report.errors().iter().map(ToString::to_string).collect();
        (Some(report.is_ok()), violations)
    } else {
        (None, Vec::new())
    };

    CaseOutcome {
        operation,
        original: values,
        result,
        verified,
        violations,
    }
}
