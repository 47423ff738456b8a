// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked witnesses and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Witness checks** (`verify_reversal`, `verify_zero_push`,
//!    `VerificationReport`) that compare a result against a copy of the input
//!    and name the exact position where a post-condition broke. These cost a
//!    copy, so callers opt in: tests, fuzz targets, and `swapwise --verify`.
//!
//! 2. **Runtime contracts** that panic in debug builds when an invariant that
//!    can be checked without a copy is violated. Zero-cost in release.
//!
//! `ZeroSplit` sits between the two: a borrowed slice plus the boundary where
//! its zero suffix begins, validated once at construction.

pub mod contracts;
mod types;

pub use types::*;
