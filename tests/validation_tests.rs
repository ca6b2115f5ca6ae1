//! Input validation tests.
//!
//! Each rejected input category must be independently triggerable with its
//! own error kind, and valid input must never raise. The suite mirrors the
//! invalid-x / invalid-y / duplicate-key / bandwidth / degree cases the
//! original STATA-comparison suite exercises.

mod common;

use stata_lowess::{smooth, LowessError, Series, MAX_POLYNOMIAL_DEGREE};

fn valid_series(n: usize) -> (Series<u32>, Series<u32>) {
    common::generate_noisy_sine(n, 0.3, 42)
}

// ============================================================================
// Valid Input
// ============================================================================

#[test]
fn test_valid_data_does_not_raise() {
    let (x, y) = valid_series(50);
    let result = smooth(&x, &y, 0.2, 1);
    assert!(result.is_ok());
}

#[test]
fn test_output_key_set_equals_input_key_set() {
    let (x, y) = valid_series(50);
    let smoothed = smooth(&x, &y, 0.3, 1).unwrap();

    assert_eq!(smoothed.len(), x.len());
    assert_eq!(smoothed.keys(), x.keys());
}

#[test]
fn test_empty_input_yields_empty_output() {
    let x: Series<u32> = Series::from_pairs(Vec::new());
    let y: Series<u32> = Series::from_pairs(Vec::new());

    let smoothed = smooth(&x, &y, 0.2, 1).unwrap();
    assert!(smoothed.is_empty());
}

// ============================================================================
// Invalid Series Values
// ============================================================================

#[test]
fn test_nan_in_x_is_a_missing_value() {
    let (x, y) = valid_series(20);
    let mut pairs: Vec<(u32, f64)> = x.iter().map(|(&k, v)| (k, v)).collect();
    pairs[5].1 = f64::NAN;
    let x = Series::from_pairs(pairs);

    let result = smooth(&x, &y, 0.2, 1);
    assert!(matches!(
        result,
        Err(LowessError::MissingValue { series: "x" })
    ));
}

#[test]
fn test_nan_in_y_is_a_missing_value() {
    let (x, y) = valid_series(20);
    let mut pairs: Vec<(u32, f64)> = y.iter().map(|(&k, v)| (k, v)).collect();
    pairs[5].1 = f64::NAN;
    let y = Series::from_pairs(pairs);

    let result = smooth(&x, &y, 0.2, 1);
    assert!(matches!(
        result,
        Err(LowessError::MissingValue { series: "y" })
    ));
}

#[test]
fn test_infinity_in_x_is_an_invalid_input() {
    let (x, y) = valid_series(20);
    let mut pairs: Vec<(u32, f64)> = x.iter().map(|(&k, v)| (k, v)).collect();
    pairs[5].1 = f64::INFINITY;
    let x = Series::from_pairs(pairs);

    let result = smooth(&x, &y, 0.2, 1);
    assert!(matches!(
        result,
        Err(LowessError::InvalidInputType { series: "x" })
    ));
}

#[test]
fn test_negative_infinity_in_y_is_an_invalid_input() {
    let (x, y) = valid_series(20);
    let mut pairs: Vec<(u32, f64)> = y.iter().map(|(&k, v)| (k, v)).collect();
    pairs[3].1 = f64::NEG_INFINITY;
    let y = Series::from_pairs(pairs);

    let result = smooth(&x, &y, 0.2, 1);
    assert!(matches!(
        result,
        Err(LowessError::InvalidInputType { series: "y" })
    ));
}

// ============================================================================
// Key Sets
// ============================================================================

#[test]
fn test_length_mismatch_is_a_key_set_mismatch() {
    let (x, y) = valid_series(20);
    let mut pairs: Vec<(u32, f64)> = x.iter().map(|(&k, v)| (k, v)).collect();
    pairs.push((99, 0.5));
    let x = Series::from_pairs(pairs);

    let result = smooth(&x, &y, 0.2, 1);
    assert!(matches!(result, Err(LowessError::KeySetMismatch(_))));
}

#[test]
fn test_disjoint_keys_are_a_key_set_mismatch() {
    let (x, y) = valid_series(20);
    let shifted: Series<u32> = x.iter().map(|(&k, v)| (k + 100, v)).collect();

    let result = smooth(&shifted, &y, 0.2, 1);
    assert!(matches!(result, Err(LowessError::KeySetMismatch(_))));
}

#[test]
fn test_duplicate_key_in_x_is_a_key_set_mismatch() {
    let (x, y) = valid_series(20);
    let mut pairs: Vec<(u32, f64)> = x.iter().map(|(&k, v)| (k, v)).collect();
    pairs[1].0 = pairs[0].0;
    let x = Series::from_pairs(pairs);

    let result = smooth(&x, &y, 0.2, 1);
    assert!(matches!(result, Err(LowessError::KeySetMismatch(_))));
}

#[test]
fn test_duplicate_key_in_y_is_a_key_set_mismatch() {
    let (x, y) = valid_series(20);
    let mut pairs: Vec<(u32, f64)> = y.iter().map(|(&k, v)| (k, v)).collect();
    pairs[1].0 = pairs[0].0;
    let y = Series::from_pairs(pairs);

    let result = smooth(&x, &y, 0.2, 1);
    assert!(matches!(result, Err(LowessError::KeySetMismatch(_))));
}

#[test]
fn test_reordered_keys_are_accepted() {
    // Same key set in a different storage order is valid, not a mismatch.
    let (x, y) = valid_series(20);
    let perm = common::permutation(20, 7);
    let y_shuffled = common::reorder(&y, &perm);

    assert!(smooth(&x, &y_shuffled, 0.2, 1).is_ok());
}

// ============================================================================
// Parameters
// ============================================================================

#[test]
fn test_out_of_range_bandwidths_are_rejected() {
    let (x, y) = valid_series(20);

    for bad in [-0.1, 0.0, 1.0, 1.2, f64::NAN] {
        let result = smooth(&x, &y, bad, 1);
        assert!(
            matches!(result, Err(LowessError::InvalidBandwidth(_))),
            "bandwidth {bad} should be rejected"
        );
    }
}

#[test]
fn test_degree_above_cap_is_rejected() {
    let (x, y) = valid_series(20);

    let result = smooth(&x, &y, 0.2, MAX_POLYNOMIAL_DEGREE + 1);
    assert!(matches!(
        result,
        Err(LowessError::InvalidPolynomialDegree { .. })
    ));
}

#[test]
fn test_degree_larger_than_sample_fails() {
    // More unknowns than any window can hold. The original comparison suite
    // expects n + 1 to fail; here it surfaces as an under-determined fit.
    let (x, y) = valid_series(10);

    let result = smooth(&x, &y, 0.9, 11);
    assert!(matches!(
        result,
        Err(LowessError::UnderdeterminedRegression { .. })
    ));
}
