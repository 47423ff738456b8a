//! Reversal on the documented cases and a few element types.

use super::common::{oracle_reverse, REVERSE_CASES};
use swapwise::{reverse, reversed};

#[test]
fn documented_cases() {
    for &(input, expected) in REVERSE_CASES {
        let mut values = input.to_vec();
        reverse(&mut values);
        assert_eq!(values, expected, "reverse({:?})", input);
    }
}

#[test]
fn input_copy_is_untouched() {
    let original = vec![1_i64, 2, 3, 4, 5];
    let result = reversed(original.clone());
    assert_eq!(original, [1, 2, 3, 4, 5]);
    assert_eq!(result, [5, 4, 3, 2, 1]);
}

#[test]
fn reverses_a_subslice_only() {
    let mut values = [1_i64, 2, 3, 4, 5, 6];
    reverse(&mut values[1..5]);
    assert_eq!(values, [1, 5, 4, 3, 2, 6]);
}

#[test]
fn all_equal_values_stay_put() {
    let mut values = [7_i64; 9];
    reverse(&mut values);
    assert_eq!(values, [7; 9]);
}

#[test]
fn extreme_values_survive() {
    let input = [i64::MIN, -1, 0, 1, i64::MAX];
    let mut values = input;
    reverse(&mut values);
    assert_eq!(values.to_vec(), oracle_reverse(&input));
}

#[test]
fn reverses_strings() {
    let mut words = ["alpha", "beta", "gamma", "delta"];
    reverse(&mut words);
    assert_eq!(words, ["delta", "gamma", "beta", "alpha"]);
}

#[test]
fn reverses_owned_boxes_without_cloning() {
    let boxes: Vec<Box<u32>> = (0..5).map(Box::new).collect();
    let result = reversed(boxes);
    let unboxed: Vec<u32> = result.into_iter().map(|b| *b).collect();
    assert_eq!(unboxed, [4, 3, 2, 1, 0]);
}

#[test]
fn large_input_matches_oracle() {
    let input: Vec<i64> = (0..10_001).map(|i| i * 3 - 7).collect();
    let mut values = input.clone();
    reverse(&mut values);
    assert_eq!(values, oracle_reverse(&input));
}
