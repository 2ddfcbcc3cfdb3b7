//! Factorial, greatest common divisor and least common multiple.

use crate::ArithmeticError;
use tracing::{debug, instrument, warn};

/// Iterative factorial.
///
/// Returns 1 for 0 and 1.
///
/// # Errors
///
/// - [`ArithmeticError::InvalidArgument`] for negative `n`.
/// - [`ArithmeticError::Overflow`] for `n > 20`.
#[instrument]
pub fn factorial(n: i64) -> Result<i64, ArithmeticError> {
    if n < 0 {
        warn!("Factorial is not defined for negative numbers");
        return Err(ArithmeticError::InvalidArgument);
    }
    if n <= 1 {
        return Ok(1);
    }

    (2..=n).try_fold(1_i64, |acc, i| acc.checked_mul(i).ok_or(ArithmeticError::Overflow))
}

/// Euclid's algorithm on absolute values. `gcd(0, 0) == 0`.
///
/// The result is unsigned because `gcd(i64::MIN, 0)` is `2^63`.
#[instrument]
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    debug!(gcd = a, "Computed gcd");
    a
}

/// `|a * b| / gcd(a, b)`, with `lcm(0, 0) == 0`.
///
/// # Errors
///
/// [`ArithmeticError::Overflow`] when the multiple exceeds `u64`.
#[instrument]
pub fn lcm(a: i64, b: i64) -> Result<u64, ArithmeticError> {
    if a == 0 && b == 0 {
        return Ok(0);
    }

    // Dividing first keeps the intermediate as small as the result.
    let divisor = gcd(a, b);
    (a.unsigned_abs() / divisor)
        .checked_mul(b.unsigned_abs())
        .ok_or(ArithmeticError::Overflow)
}
