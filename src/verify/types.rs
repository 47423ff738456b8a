// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked post-conditions and the zero-split witness.
//!
//! The rearrangements themselves cannot fail, but a caller who kept a copy of
//! the input can ask whether the output really is what was promised. The
//! verifiers here answer with a precise `InvariantError` instead of a bool,
//! and `VerificationReport` collects every violation instead of the first.
//!
//! # Properties checked
//!
//! | Verifier            | Property                                                   |
//! |---------------------|------------------------------------------------------------|
//! | `verify_reversal`   | same length, `result[i] == original[len - 1 - i]`          |
//! | `verify_zero_push`  | same length, zero suffix, same zero count, stable non-zeros |
//! | `ZeroSplit::new`    | `seq[..b]` has no zeros, `seq[b..]` has only zeros          |

use num_traits::Zero;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The rearrangement changed the sequence length.
    LengthChanged { before: usize, after: usize },
    /// `result[position]` is not the element from `original[mirror]`.
    NotMirrored { position: usize, mirror: usize },
    /// A zero sits before the zero-suffix boundary.
    ZeroInPrefix { position: usize },
    /// A non-zero sits inside the zero suffix.
    NonZeroInSuffix { position: usize },
    /// The non-zero at `position` of the result is not the next non-zero of
    /// the original.
    NonZeroOrderChanged { position: usize },
    /// The number of zeros differs between input and output.
    ZeroCountChanged { before: usize, after: usize },
    /// The claimed boundary is past the end of the sequence.
    BoundaryOutOfRange { boundary: usize, len: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::LengthChanged { before, after } => {
                write!(f, "length changed from {} to {}", before, after)
            }
            InvariantError::NotMirrored { position, mirror } => {
                write!(
                    f,
                    "result[{}] does not match original[{}]",
                    position, mirror
                )
            }
            InvariantError::ZeroInPrefix { position } => {
                write!(f, "zero at {} before the zero suffix", position)
            }
            InvariantError::NonZeroInSuffix { position } => {
                write!(f, "non-zero at {} inside the zero suffix", position)
            }
            InvariantError::NonZeroOrderChanged { position } => {
                write!(f, "non-zero order changed at result[{}]", position)
            }
            InvariantError::ZeroCountChanged { before, after } => {
                write!(f, "zero count changed from {} to {}", before, after)
            }
            InvariantError::BoundaryOutOfRange { boundary, len } => {
                write!(f, "boundary {} > len {}", boundary, len)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

// ============================================================================
// VERIFIERS
// ============================================================================

/// Check that `result` is `original` reversed.
///
/// Returns the first violation found.
pub fn verify_reversal<T: PartialEq>(original: &[T], result: &[T]) -> Result<(), InvariantError> {
    match reversal_violations(original, result).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Check that `result` is `original` with its zeros pushed to the end.
///
/// Returns the first violation found.
pub fn verify_zero_push<T: Zero + PartialEq>(
    original: &[T],
    result: &[T],
) -> Result<(), InvariantError> {
    match zero_push_violations(original, result).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn reversal_violations<T: PartialEq>(original: &[T], result: &[T]) -> Vec<InvariantError> {
    if original.len() != result.len() {
        return vec![InvariantError::LengthChanged {
            before: original.len(),
            after: result.len(),
        }];
    }

    let len = result.len();
    result
        .iter()
        .enumerate()
        .filter(|(i, value)| **value != original[len - 1 - i])
        .map(|(position, _)| InvariantError::NotMirrored {
            position,
            mirror: len - 1 - position,
        })
        .collect()
}

fn zero_push_violations<T: Zero + PartialEq>(original: &[T], result: &[T]) -> Vec<InvariantError> {
    if original.len() != result.len() {
        return vec![InvariantError::LengthChanged {
            before: original.len(),
            after: result.len(),
        }];
    }

    let mut errors = Vec::new();

    // Zero suffix starts at the first zero; everything after must be zero too
    let boundary = result
        .iter()
        .position(|value| value.is_zero())
        .unwrap_or(result.len());
    errors.extend(
        result[boundary..]
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
            .map(|(i, _)| InvariantError::NonZeroInSuffix {
                position: boundary + i,
            }),
    );

    let zeros_before = original.iter().filter(|v| v.is_zero()).count();
    let zeros_after = result.iter().filter(|v| v.is_zero()).count();
    if zeros_before != zeros_after {
        errors.push(InvariantError::ZeroCountChanged {
            before: zeros_before,
            after: zeros_after,
        });
    }

    let expected = original.iter().filter(|v| !v.is_zero());
    let actual = result
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_zero());
    errors.extend(
        expected
            .zip(actual)
            .filter(|(want, (_, got))| *want != *got)
            .map(|(_, (position, _))| InvariantError::NonZeroOrderChanged { position }),
    );

    errors
}

// ============================================================================
// VERIFICATION REPORT
// ============================================================================

/// Which rearrangement a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Reverse,
    PushZeros,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Reverse => write!(f, "reverse"),
            Operation::PushZeros => write!(f, "push-zeros"),
        }
    }
}

/// Every violation found when checking one result against its witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    operation: Operation,
    len: usize,
    errors: Vec<InvariantError>,
}

impl VerificationReport {
    /// Check a reversal, collecting all mismatched positions.
    pub fn for_reversal<T: PartialEq>(original: &[T], result: &[T]) -> Self {
        Self {
            operation: Operation::Reverse,
            len: original.len(),
            errors: reversal_violations(original, result),
        }
    }

    /// Check a zero push, collecting all violations.
    pub fn for_zero_push<T: Zero + PartialEq>(original: &[T], result: &[T]) -> Self {
        Self {
            operation: Operation::PushZeros,
            len: original.len(),
            errors: zero_push_violations(original, result),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// True when no violation was found.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[InvariantError] {
        &self.errors
    }

    /// Convert into a `Result`, keeping only the first violation.
    pub fn into_result(self) -> Result<(), InvariantError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "{} of {} elements: ok", self.operation, self.len);
        }
        write!(
            f,
            "{} of {} elements: {} violation(s)",
            self.operation,
            self.len,
            self.errors.len()
        )?;
        for err in &self.errors {
            write!(f, "\n  - {}", err)?;
        }
        Ok(())
    }
}

// ============================================================================
// ZERO SPLIT WITNESS
// ============================================================================

/// A compacted slice together with the index where its zero suffix begins.
///
/// # Invariants (enforced at construction)
/// - `boundary <= sequence.len()`
/// - `sequence[..boundary]` contains no zeros
/// - `sequence[boundary..]` contains only zeros
///
/// Access is read-only while the split is alive. `into_inner` gives the
/// mutable slice back and consumes the split.
#[derive(Debug)]
pub struct ZeroSplit<'a, T> {
    sequence: &'a mut [T],
    boundary: usize,
}

impl<'a, T: Zero> ZeroSplit<'a, T> {
    /// Validate an already-compacted slice against a claimed boundary.
    pub fn new(sequence: &'a mut [T], boundary: usize) -> Result<Self, InvariantError> {
        if boundary > sequence.len() {
            return Err(InvariantError::BoundaryOutOfRange {
                boundary,
                len: sequence.len(),
            });
        }
        if let Some(position) = sequence[..boundary].iter().position(|v| v.is_zero()) {
            return Err(InvariantError::ZeroInPrefix { position });
        }
        if let Some(i) = sequence[boundary..].iter().position(|v| !v.is_zero()) {
            return Err(InvariantError::NonZeroInSuffix {
                position: boundary + i,
            });
        }
        Ok(Self { sequence, boundary })
    }
}

impl<'a, T> ZeroSplit<'a, T> {
    /// Wrap a slice that `compact_nonzero` just produced.
    pub(crate) fn from_compacted(sequence: &'a mut [T], boundary: usize) -> Self {
        Self { sequence, boundary }
    }

    /// Number of non-zero elements, and the index of the first zero.
    pub fn boundary(&self) -> usize {
        self.boundary
    }

    /// The non-zero prefix, in original relative order.
    pub fn nonzero(&self) -> &[T] {
        &self.sequence[..self.boundary]
    }

    /// The zero suffix.
    pub fn zeros(&self) -> &[T] {
        &self.sequence[self.boundary..]
    }

    /// Give back the whole slice, ending the split.
    pub fn into_inner(self) -> &'a mut [T] {
        self.sequence
    }
}
