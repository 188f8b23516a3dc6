//! Bounds of the inclusive random integer helpers.

use extkit_utils::{UtilError, random_int_inclusive, random_int_inclusive_with};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_test::traced_test;

#[test]
fn test_thread_rng_stays_in_bounds() {
    for _ in 0..10_000 {
        let value = random_int_inclusive(-3.7, 8.2).unwrap();
        assert!((-3..=8).contains(&value));
    }
}

#[test]
fn test_every_value_in_range_is_reachable() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut seen = [false; 5];
    for _ in 0..2_000 {
        let value = random_int_inclusive_with(&mut rng, 10.0, 14.0).unwrap();
        seen[(value - 10) as usize] = true;
    }
    assert!(seen.iter().all(|&hit| hit));
}

#[test]
fn test_large_bounds() {
    let mut rng = StdRng::seed_from_u64(1);
    let value = random_int_inclusive_with(&mut rng, -9.0e18, 9.0e18).unwrap();
    assert!((-9_000_000_000_000_000_000..=9_000_000_000_000_000_000).contains(&value));
}

#[test]
#[traced_test]
fn test_empty_range_is_an_error_and_logged() {
    let err = random_int_inclusive(0.2, 0.8).unwrap_err();
    assert!(matches!(err, UtilError::EmptyRange { .. }));
    assert!(logs_contain("rejected random integer bounds"));
}
