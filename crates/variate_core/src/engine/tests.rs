//! Unit tests for the engine module.
//!
//! This module contains tests verifying:
//! - The recurrence against hand-computed states
//! - Reproducibility from a fixed parameter triple
//! - The short period of the bad configuration
//! - Approximate uniformity of the good configuration
//! - Range and determinism via property-based testing

use super::*;
use crate::summary::Histogram;
use approx::assert_relative_eq;

/// Good configuration seed used throughout the uniformity checks.
const REFERENCE_SEED: u64 = 123_456_789;

/// 95% critical value of chi-square with 19 degrees of freedom.
const CHI_SQUARE_19_DOF_95: f64 = 30.144;

#[test]
fn test_first_states_match_recurrence() {
    let mut engine = LcgEngine::new(GeneratorParameters::good(REFERENCE_SEED));

    assert_eq!(engine.next_state(), 469_049_722);
    assert_eq!(engine.next_state(), 2_053_693_165);
    assert_eq!(engine.next_state(), 2_063_849_572);
    assert_eq!(engine.state(), 2_063_849_572);
}

#[test]
fn test_first_uniforms_match_recurrence() {
    let buffer = generate(GeneratorParameters::good(REFERENCE_SEED), 3);

    assert_relative_eq!(buffer[0], 0.218_418_297_459_566_17, epsilon = 1e-15);
    assert_relative_eq!(buffer[1], 0.956_325_403_394_329, epsilon = 1e-15);
    assert_relative_eq!(buffer[2], 0.961_054_848_954_572_7, epsilon = 1e-15);
}

#[test]
fn test_zero_count_is_empty() {
    let mut engine = LcgEngine::new(GeneratorParameters::good(7));
    let buffer = engine.generate(0);

    assert!(buffer.is_empty());
    // No draw was made
    assert_eq!(engine.state(), 7);
}

#[test]
fn test_fill_uniform_matches_iterator() {
    let params = GeneratorParameters::good(99);
    let mut buffer = vec![0.0; 50];
    LcgEngine::new(params).fill_uniform(&mut buffer);

    let from_iter: Vec<f64> = LcgEngine::new(params).take(50).collect();
    assert_eq!(buffer, from_iter);
}

#[test]
fn test_reproducibility() {
    let params = GeneratorParameters::good(REFERENCE_SEED);
    assert_eq!(generate(params, 1_000), generate(params, 1_000));

    let other = GeneratorParameters::good(REFERENCE_SEED + 1);
    assert_ne!(generate(params, 10), generate(other, 10));
}

#[test]
fn test_no_overflow_with_wide_parameters() {
    // Both operands near 2^53: the product needs ~106 bits
    let modulus = MAX_MODULUS - 1;
    let params = GeneratorParameters::new(MAX_MODULUS - 3, modulus, modulus - 1).unwrap();
    let mut engine = LcgEngine::new(params);

    // (m - 1)(m - 2) + 1 = m^2 - 3m + 3 = 3 (mod m)
    assert_eq!(engine.next_state(), 3);
    for _ in 0..1_000 {
        let u = engine.next_uniform();
        assert!((0.0..1.0).contains(&u));
    }
}

#[test]
fn test_bad_configuration_short_period() {
    let buffer = generate(GeneratorParameters::bad(3), 1_000);

    let mut distinct: Vec<u64> = buffer
        .iter()
        .map(|&u| (u * BAD_MODULUS as f64).round() as u64)
        .collect();
    distinct.sort_unstable();
    distinct.dedup();

    assert!(distinct.len() <= 10, "{} distinct values", distinct.len());
    assert_eq!(distinct, vec![3, 4, 5, 7, 10]);
    assert_eq!(period(GeneratorParameters::bad(3), 1_000), Some(5));
}

#[test]
fn test_fixed_point_seed_has_period_one() {
    // x = 8 solves x = 5x + 1 (mod 11)
    assert_eq!(period(GeneratorParameters::bad(8), 100), Some(1));

    // The good configuration has one too
    let fixed = GeneratorParameters::good(1_319_592_028);
    assert_eq!(period(fixed, 100), Some(1));
    assert!(generate(fixed, 20).windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_good_configuration_period_exceeds_limit() {
    assert_eq!(period(GeneratorParameters::good(REFERENCE_SEED), 1_000_000), None);
}

#[test]
fn test_good_configuration_uniformity() {
    let buffer = generate(GeneratorParameters::good(REFERENCE_SEED), 10_000);

    let mut histogram = Histogram::new(20, 0.0, 1.0).unwrap();
    histogram.extend(buffer.iter().copied());

    assert_eq!(histogram.total(), 10_000);
    let chi_square = histogram.chi_square_uniform();
    assert!(
        chi_square < CHI_SQUARE_19_DOF_95,
        "chi-square {:.3} exceeds {:.3}; counts = {:?}",
        chi_square,
        CHI_SQUARE_19_DOF_95,
        histogram.counts()
    );
    for &count in histogram.counts() {
        assert!(count.abs_diff(500) < 100, "bin count {} too far from 500", count);
    }
}

#[test]
fn test_bad_configuration_fails_uniformity() {
    let buffer = generate(GeneratorParameters::bad(3), 10_000);

    let mut histogram = Histogram::new(20, 0.0, 1.0).unwrap();
    histogram.extend(buffer.iter().copied());

    assert!(histogram.chi_square_uniform() > CHI_SQUARE_19_DOF_95);
}

// ============================================================================
// Property-Based Tests with Proptest
// ============================================================================

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// All engine values lie in [0, 1) for any valid parameters.
    #[test]
    fn prop_values_in_unit_interval(
        multiplier in any::<u64>(),
        modulus in 1..=MAX_MODULUS,
        seed in any::<u64>(),
        count in 0..2_000usize,
    ) {
        let params = GeneratorParameters::new(multiplier, modulus, seed).unwrap();
        let buffer = generate(params, count);

        prop_assert_eq!(buffer.len(), count);
        for (i, &u) in buffer.iter().enumerate() {
            prop_assert!(
                (0.0..1.0).contains(&u),
                "Value at index {} is out of range: {} ({:?})",
                i, u, params
            );
        }
    }

    /// Identical parameters produce identical sequences.
    #[test]
    fn prop_sequence_determinism(seed in any::<u64>(), count in 1..1_000usize) {
        let params = GeneratorParameters::good(seed);
        prop_assert_eq!(generate(params, count), generate(params, count));
    }

    /// The bad configuration never exceeds its modulus in distinct states.
    #[test]
    fn prop_bad_period_bounded(seed in any::<u64>()) {
        let found = period(GeneratorParameters::bad(seed), 1_000);
        prop_assert!(matches!(found, Some(p) if p <= BAD_MODULUS - 1));
    }
}
