//! Zero-push properties: counts, stability, contiguous zero suffix,
//! idempotence.

use super::common::{assert_zero_suffix, sorted};
use super::{small_alphabet_strategy, zero_heavy_strategy};
use proptest::prelude::*;
use swapwise::verify::contracts::check_nonzero_order;
use swapwise::{compact_nonzero, push_zeros_to_end, split_zeros, VerificationReport};

fn zero_count(values: &[i64]) -> usize {
    values.iter().filter(|&&v| v == 0).count()
}

proptest! {
    /// Property: zero and non-zero counts are preserved.
    #[test]
    fn prop_counts_preserved(values in zero_heavy_strategy()) {
        let mut result = values.clone();
        push_zeros_to_end(&mut result);
        prop_assert_eq!(zero_count(&result), zero_count(&values));
        prop_assert_eq!(result.len() - zero_count(&result), values.len() - zero_count(&values));
        prop_assert_eq!(sorted(&result), sorted(&values));
    }

    /// Property: the non-zero subsequence is unchanged.
    #[test]
    fn prop_nonzero_order_stable(values in zero_heavy_strategy()) {
        let before: Vec<i64> = values.iter().copied().filter(|&v| v != 0).collect();
        let mut result = values.clone();
        push_zeros_to_end(&mut result);
        let after: Vec<i64> = result.iter().copied().filter(|&v| v != 0).collect();
        prop_assert_eq!(before, after);
        check_nonzero_order(&values, &result);
    }

    /// Property: zeros occupy a contiguous suffix starting at the boundary.
    #[test]
    fn prop_zero_suffix(values in small_alphabet_strategy()) {
        let mut result = values.clone();
        let boundary = compact_nonzero(&mut result);
        assert_zero_suffix(&result);
        prop_assert!(result[..boundary].iter().all(|&v| v != 0));
        prop_assert!(result[boundary..].iter().all(|&v| v == 0));
    }

    /// Property: the witness report finds nothing to complain about.
    #[test]
    fn prop_report_clean(values in zero_heavy_strategy()) {
        let mut result = values.clone();
        push_zeros_to_end(&mut result);
        let report = VerificationReport::for_zero_push(&values, &result);
        prop_assert!(report.is_ok(), "{}", report);
    }

    /// Property: split_zeros agrees with compact_nonzero.
    #[test]
    fn prop_split_matches_boundary(values in zero_heavy_strategy()) {
        let mut a = values.clone();
        let mut b = values.clone();
        let boundary = compact_nonzero(&mut a);
        let split = split_zeros(&mut b);
        prop_assert_eq!(split.boundary(), boundary);
        prop_assert_eq!(split.nonzero(), &a[..boundary]);
        prop_assert_eq!(split.zeros().len(), values.len() - boundary);
    }

    /// Property: a second push leaves a pushed slice unchanged.
    #[test]
    fn prop_push_is_idempotent(values in zero_heavy_strategy()) {
        let mut once = values.clone();
        push_zeros_to_end(&mut once);
        let mut twice = once.clone();
        push_zeros_to_end(&mut twice);
        prop_assert_eq!(once, twice);
    }
}
