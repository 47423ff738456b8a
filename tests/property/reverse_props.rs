//! Reversal properties: involution, mirror, multiset.

use super::common::sorted;
use super::values_strategy;
use proptest::prelude::*;
use swapwise::verify::contracts::check_mirrored;
use swapwise::{reverse, verify_reversal};

proptest! {
    /// Property: reversing twice gives back the input.
    #[test]
    fn prop_reverse_is_involution(values in values_strategy()) {
        let mut twice = values.clone();
        reverse(&mut twice);
        reverse(&mut twice);
        prop_assert_eq!(twice, values);
    }

    /// Property: output[i] == input[len - 1 - i].
    #[test]
    fn prop_reverse_mirrors(values in values_strategy()) {
        let mut result = values.clone();
        reverse(&mut result);
        let len = values.len();
        for i in 0..len {
            prop_assert_eq!(
                result[i], values[len - 1 - i],
                "position {} of {}", i, len
            );
        }
        prop_assert_eq!(verify_reversal(&values, &result), Ok(()));
        check_mirrored(&values, &result);
    }

    /// Property: the multiset of elements is unchanged.
    #[test]
    fn prop_reverse_preserves_multiset(values in values_strategy()) {
        let mut result = values.clone();
        reverse(&mut result);
        prop_assert_eq!(sorted(&result), sorted(&values));
    }

    /// Property: reversing the halves separately then the whole slice
    /// swaps the halves.
    #[test]
    fn prop_reverse_rotation_identity(values in values_strategy(), split in any::<prop::sample::Index>()) {
        let mid = split.index(values.len() + 1);
        let mut rotated = values.clone();
        reverse(&mut rotated[..mid]);
        reverse(&mut rotated[mid..]);
        reverse(&mut rotated);

        let mut expected = values[mid..].to_vec();
        expected.extend_from_slice(&values[..mid]);
        prop_assert_eq!(rotated, expected);
    }
}
