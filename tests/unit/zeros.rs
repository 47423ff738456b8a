//! Zero push on the documented cases, other integer widths, and the split
//! witness.

use super::common::{assert_zero_suffix, oracle_push_zeros, PUSH_ZERO_CASES};
use swapwise::{compact_nonzero, push_zeros_to_end, split_zeros};

#[test]
fn documented_cases() {
    for &(input, expected) in PUSH_ZERO_CASES {
        let mut values = input.to_vec();
        push_zeros_to_end(&mut values);
        assert_eq!(values, expected, "push_zeros_to_end({:?})", input);
    }
}

#[test]
fn boundary_is_nonzero_count() {
    for &(input, _) in PUSH_ZERO_CASES {
        let mut values = input.to_vec();
        let boundary = compact_nonzero(&mut values);
        assert_eq!(boundary, input.iter().filter(|&&v| v != 0).count());
    }
}

#[test]
fn empty_input() {
    let mut values: Vec<i64> = Vec::new();
    assert!(push_zeros_to_end(&mut values).is_empty());
}

#[test]
fn trailing_zeros_stay_put() {
    let mut values = [5_i64, 6, 0, 0];
    push_zeros_to_end(&mut values);
    assert_eq!(values, [5, 6, 0, 0]);
}

#[test]
fn alternating_pattern() {
    let mut values = [0_i64, 1, 0, 2, 0, 3, 0, 4];
    push_zeros_to_end(&mut values);
    assert_eq!(values, [1, 2, 3, 4, 0, 0, 0, 0]);
    assert_zero_suffix(&values);
}

#[test]
fn duplicate_non_zeros_keep_order() {
    let input = [3_i64, 0, 3, -3, 0, 3];
    let mut values = input;
    push_zeros_to_end(&mut values);
    assert_eq!(values.to_vec(), oracle_push_zeros(&input));
}

#[test]
fn works_for_unsigned_and_narrow_types() {
    let mut bytes = [0_u8, 255, 0, 1];
    push_zeros_to_end(&mut bytes);
    assert_eq!(bytes, [255, 1, 0, 0]);

    let mut shorts = [0_i16, -1, 0];
    push_zeros_to_end(&mut shorts);
    assert_eq!(shorts, [-1, 0, 0]);
}

#[test]
fn operates_on_a_subslice() {
    let mut values = [0_i64, 0, 1, 0, 2, 0];
    push_zeros_to_end(&mut values[1..5]);
    assert_eq!(values, [0, 1, 2, 0, 0, 0]);
}

#[test]
fn split_zeros_reports_halves() {
    let mut values = vec![0_i64, 1, 0, 3, 12];
    let split = split_zeros(&mut values);
    assert_eq!(split.boundary(), 3);
    assert_eq!(split.nonzero(), &[1, 3, 12]);
    assert_eq!(split.zeros(), &[0, 0]);
    assert_eq!(split.into_inner(), &[1, 3, 12, 0, 0]);
}

#[test]
fn split_of_all_zeros_has_empty_prefix() {
    let mut values = [0_i64; 4];
    let split = split_zeros(&mut values);
    assert!(split.nonzero().is_empty());
    assert_eq!(split.zeros().len(), 4);
}
