#![cfg(feature = "dev")]
//! Tests for single-pass pair accumulation.
//!
//! These tests verify the running sums that the OLS solve derives its
//! statistics from:
//! - Push and from_pairs agreement
//! - Associative merging of partial sums
//! - Order independence up to rounding
//!
//! ## Test Organization
//!
//! 1. **Construction** - Zeroed sums, default, emptiness
//! 2. **Accumulation** - Push vs. bulk accumulation
//! 3. **Merging** - Split/merge equivalence

use approx::assert_relative_eq;

use regr::internals::math::sums::PairSums;
use regr::internals::primitives::pair::Pair;

// ============================================================================
// Helper Functions
// ============================================================================

fn pairs(raw: &[(f64, f64)]) -> Vec<Pair<f64>> {
    raw.iter().map(|&(x, y)| Pair::new(x, y)).collect()
}

const DATA: [(f64, f64); 6] = [
    (1.0, 2.0),
    (2.5, -1.0),
    (4.0, 7.5),
    (0.5, 3.25),
    (9.0, -2.0),
    (3.0, 0.0),
];

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_new_sums_are_zeroed() {
    let sums: PairSums<f64> = PairSums::new();
    assert!(sums.is_empty());
    assert_eq!(sums.len(), 0);
    assert_eq!(sums.sum_x, 0.0);
    assert_eq!(sums.sum_y, 0.0);
    assert_eq!(sums.sum_xx, 0.0);
    assert_eq!(sums.sum_yy, 0.0);
    assert_eq!(sums.sum_xy, 0.0);
}

#[test]
fn test_default_matches_new() {
    assert_eq!(PairSums::<f64>::default(), PairSums::new());
}

// ============================================================================
// Accumulation Tests
// ============================================================================

#[test]
fn test_push_accumulates_all_six_sums() {
    let mut sums = PairSums::new();
    sums.push(Pair::new(2.0, 3.0));
    sums.push(Pair::new(4.0, 5.0));

    assert_eq!(sums.n, 2);
    assert_eq!(sums.sum_x, 6.0);
    assert_eq!(sums.sum_y, 8.0);
    assert_eq!(sums.sum_xx, 20.0);
    assert_eq!(sums.sum_yy, 34.0);
    assert_eq!(sums.sum_xy, 26.0);
}

#[test]
fn test_from_pairs_matches_push_loop() {
    let data = pairs(&DATA);

    let bulk = PairSums::from_pairs(data.iter().copied());
    let mut looped = PairSums::new();
    for pair in data {
        looped.push(pair);
    }

    assert_eq!(bulk, looped);
}

// ============================================================================
// Merging Tests
// ============================================================================

/// Splitting the sequence at any point and merging agrees with one pass.
#[test]
fn test_merge_equals_single_pass() {
    let data = pairs(&DATA);
    let whole = PairSums::from_pairs(data.iter().copied());

    for split in 0..=data.len() {
        let (left, right) = data.split_at(split);
        let merged = PairSums::from_pairs(left.iter().copied())
            .merge(PairSums::from_pairs(right.iter().copied()));

        assert_eq!(merged.n, whole.n);
        assert_relative_eq!(merged.sum_x, whole.sum_x, max_relative = 1e-12);
        assert_relative_eq!(merged.sum_y, whole.sum_y, max_relative = 1e-12);
        assert_relative_eq!(merged.sum_xx, whole.sum_xx, max_relative = 1e-12);
        assert_relative_eq!(merged.sum_yy, whole.sum_yy, max_relative = 1e-12);
        assert_relative_eq!(merged.sum_xy, whole.sum_xy, max_relative = 1e-12);
    }
}

#[test]
fn test_merge_with_empty_is_identity() {
    let data = pairs(&DATA);
    let sums = PairSums::from_pairs(data.iter().copied());

    assert_eq!(sums.merge(PairSums::new()), sums);
    assert_eq!(PairSums::new().merge(sums), sums);
}

#[test]
fn test_f32_accumulation() {
    let mut sums: PairSums<f32> = PairSums::new();
    sums.push(Pair::new(1.5f32, 2.0f32));
    sums.push(Pair::new(2.5f32, 4.0f32));

    assert_eq!(sums.n, 2);
    assert_relative_eq!(sums.sum_x, 4.0f32);
    assert_relative_eq!(sums.sum_xy, 13.0f32);
}
