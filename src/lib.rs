// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-place two-pointer sequence rearrangements.
//!
//! Two independent, stateless operations over a caller-owned slice:
//!
//! - [`reverse`] mirrors the slice with two converging pointers.
//! - [`push_zeros_to_end`] moves every zero to the back while the non-zeros
//!   keep their relative order, using a trailing write pointer.
//!
//! Both are total, O(n) time, O(1) extra space, and hand the same slice back
//! for chaining. Neither allocates.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────────────┐
//! │  reverse.rs  │     │        zeros.rs          │
//! │  (reverse,   │     │ (push_zeros_to_end,      │
//! │   reversed)  │     │  compact_nonzero,        │
//! │              │     │  split_zeros)            │
//! └──────────────┘     └──────────────────────────┘
//!        │                          │
//!        ▼                          ▼
//! ┌─────────────────────────────────────────────────┐
//! │                    verify/                      │
//! │  contracts (debug_assert!), verify_reversal,    │
//! │  verify_zero_push, VerificationReport, ZeroSplit│
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use swapwise::{push_zeros_to_end, reverse, verify_zero_push};
//!
//! let mut values = vec![1, 2, 3, 4];
//! reverse(&mut values);
//! assert_eq!(values, [4, 3, 2, 1]);
//!
//! let original = vec![0, 1, 0, 3, 12];
//! let mut moved = original.clone();
//! push_zeros_to_end(&mut moved);
//! assert_eq!(moved, [1, 3, 12, 0, 0]);
//! assert!(verify_zero_push(&original, &moved).is_ok());
//! ```

mod reverse;
pub mod verify;
mod zeros;

pub use reverse::{reverse, reversed};
pub use verify::{
    verify_reversal, verify_zero_push, InvariantError, Operation, VerificationReport, ZeroSplit,
};
pub use zeros::{compact_nonzero, push_zeros_to_end, split_zeros};
