mod common;

use common::{Byte, Decimal, Scripted8, Wide};
use nebula_random::error::RandomError;
use nebula_random::rng::{ChaCha20Rng, RawGenerator, Xorshift64Star};
use nebula_random::uniform::{Uniform, unit};
use proptest::prelude::*;

#[test]
fn test_float_eight_bit_generator_thousand_unit_floats() {
    let mut rng = Byte::new(1000);
    let values: Vec<f64> = rng.uniform_iter(1000).collect();

    assert_eq!(values.len(), 1000);
    for v in values {
        assert!((0.0..1.0).contains(&v), "{v} outside [0, 1)");
        assert_ne!(v, 1.0);
    }
}

#[test]
fn test_float_unit_from_maximal_digits_rounds_to_one() {
    // Seven 0xFF digits give 1 − 2⁻⁵⁶, which is 1.0 in f64.
    let mut rng = Scripted8::from_state(vec![0xFF]);

    let value: f64 = unit(&mut rng, 53);

    assert_eq!(value, 1.0);
    assert_eq!(rng.draws, 7);
}

#[test]
fn test_float_result_equal_to_upper_bound_is_redrawn() {
    let mut script = vec![0xFF; 7];
    script.extend([0x00; 7]);
    let mut rng = Scripted8::from_state(script);

    let value: f64 = rng.uniform();

    assert_eq!(value, 0.0);
    assert_eq!(rng.draws, 14);
}

#[test]
fn test_float_digits_are_weighted_last_most_significant() {
    // Two 8-bit draws for 16 bits: (0x01 + 0x80 * 256) / 65536
    let mut rng = Scripted8::from_state(vec![0x01, 0x80]);

    let value: f64 = rng.unit(16);

    assert_eq!(value, (0x01 as f64 + 0x80 as f64 * 256.0) / 65536.0);
    assert_eq!(rng.draws, 2);
}

#[test]
fn test_float_narrow_range_generator_uses_its_radix() {
    // [3, 12] is base 10: digits 5 and 7 (after subtracting 3) give 0.75.
    let mut rng = common::Scripted::<3, 12>::from_state(vec![8, 10]);

    let value: f64 = rng.unit(6);

    assert_eq!(value, (5.0 + 7.0 * 10.0) / 100.0);
}

#[test]
fn test_float_at_least_one_draw_for_tiny_precision() {
    let mut rng = Scripted8::from_state(vec![0x40]);

    let value: f32 = rng.unit(1);

    assert_eq!(value, 0.25);
    assert_eq!(rng.draws, 1);
}

#[test]
fn test_float_values_stay_in_half_open_range() {
    let mut rng = Decimal::new(8);

    for v in rng.uniform_in_iter(-2.5f64, 7.25, 5000) {
        assert!((-2.5..7.25).contains(&v));
    }

    for v in rng.uniform_in_iter(100.0f32, 100.5, 5000) {
        assert!((100.0..100.5).contains(&v));
    }
}

#[test]
fn test_float_unit_floats_are_spread_out() {
    let mut rng = ChaCha20Rng::from_state([4u8; 32]);
    let mut buckets = [0u32; 10];

    for v in rng.uniform_iter::<f64>(10_000) {
        buckets[(v * 10.0) as usize] += 1;
    }

    assert!(buckets.iter().all(|&b| b > 800), "{buckets:?}");
}

#[test]
fn test_float_invalid_ranges() {
    let mut rng = Xorshift64Star::new(2);

    assert_eq!(rng.try_uniform_in(1.0f64, 1.0), Err(RandomError::InvalidRange));
    assert_eq!(rng.try_uniform_in(2.0f64, 1.0), Err(RandomError::InvalidRange));
    assert_eq!(rng.try_uniform_in(f64::NAN, 1.0), Err(RandomError::InvalidRange));
    assert_eq!(rng.try_uniform_in(0.0f32, f32::NAN), Err(RandomError::InvalidRange));
}

#[test]
#[should_panic(expected = "invalid range")]
fn test_float_uniform_in_panics_on_empty_range() {
    let mut rng = Xorshift64Star::new(2);
    let _ = rng.uniform_in(3.0f32, 3.0);
}

proptest! {
    #[test]
    fn test_float_in_half_open_range(seed in any::<u64>(), a in -1.0e6f64..1.0e6, width in 1.0e-3f64..1.0e6) {
        let b = a + width;
        prop_assume!(a < b);

        let mut rng = Xorshift64Star::new(seed);
        let v = rng.uniform_in(a, b);

        prop_assert!(a <= v && v < b);
    }
}

#[test]
fn test_float_range_wider_than_representable_is_rejected() {
    let mut rng = Xorshift64Star::new(2);

    assert_eq!(rng.try_uniform_in(f64::MIN, f64::MAX), Err(RandomError::InvalidRange));
    assert_eq!(rng.try_uniform_in(0.0f32, f32::INFINITY), Err(RandomError::InvalidRange));
}

#[test]
fn test_float_f32_from_128_bit_words() {
    let mut rng = Wide::new(77);

    let units: Vec<f32> = (0..1000).map(|_| rng.unit::<f32>(24)).collect();
    assert!(units.iter().all(|v| (0.0..1.0).contains(v)));
    assert!(units.iter().filter(|&&v| v == 0.0).count() < 5);

    let mut buckets = [0u32; 10];
    for v in rng.uniform_iter::<f32>(10_000) {
        assert!((0.0..1.0).contains(&v));
        buckets[(v * 10.0) as usize] += 1;
    }
    assert!(buckets.iter().all(|&b| b > 800), "{buckets:?}");
}
