//! Number utilities for extkit
//!
//! Boundary constants of `f64` and inclusive random integers.

use extkit_common::{Result, UtilError};
use rand::Rng;
use tracing::debug;

/// 2^63, the first float past `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Largest finite `f64`.
pub fn max_value() -> f64 {
    f64::MAX
}

/// Smallest positive `f64`, the subnormal `5e-324`.
///
/// This is the closest value to zero, not the most negative one; use
/// `f64::MIN` for that.
pub fn min_value() -> f64 {
    f64::from_bits(1)
}

/// Uniform random integer in `[ceil(min), floor(max)]`, both ends inclusive.
///
/// Uses the thread-local generator. See [`random_int_inclusive_with`] to
/// supply one.
pub fn random_int_inclusive(min: f64, max: f64) -> Result<i64> {
    random_int_inclusive_with(&mut rand::rng(), min, max)
}

/// Uniform random integer in `[ceil(min), floor(max)]` drawn from `rng`.
pub fn random_int_inclusive_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Result<i64> {
    let (low, high) = integer_bounds(min, max).inspect_err(|err| {
        debug!(
            min,
            max,
            category = ?err.category(),
            error = %err,
            "rejected random integer bounds"
        );
    })?;
    Ok(rng.random_range(low..=high))
}

fn integer_bounds(min: f64, max: f64) -> Result<(i64, i64)> {
    for bound in [min, max] {
        if !bound.is_finite() {
            return Err(UtilError::non_finite_bound(bound));
        }
    }

    let low = min.ceil();
    let high = max.floor();
    if low > high {
        return Err(UtilError::empty_range(min, max));
    }
    if low < -I64_LIMIT {
        return Err(UtilError::out_of_range(min));
    }
    if high >= I64_LIMIT {
        return Err(UtilError::out_of_range(max));
    }

    Ok((low as i64, high as i64))
}
