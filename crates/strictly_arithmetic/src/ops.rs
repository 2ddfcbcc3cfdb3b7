//! Elementary operations on 64-bit integers.
//!
//! Every operation that can leave the range of `i64` is checked and reports
//! [`ArithmeticError::Overflow`] instead of wrapping.

use crate::ArithmeticError;
use tracing::{instrument, warn};

/// Returns `a + b`.
#[instrument]
pub fn add(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_add(b).ok_or(ArithmeticError::Overflow)
}

/// Returns `a - b`.
#[instrument]
pub fn subtract(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_sub(b).ok_or(ArithmeticError::Overflow)
}

/// Returns `a * b`.
#[instrument]
pub fn multiply(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    a.checked_mul(b).ok_or(ArithmeticError::Overflow)
}

/// Real-valued division.
///
/// # Errors
///
/// [`ArithmeticError::DivisionByZero`] when `b` is zero.
#[instrument]
pub fn divide(a: i64, b: i64) -> Result<f64, ArithmeticError> {
    if b == 0 {
        warn!("Division by zero requested");
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a as f64 / b as f64)
}

/// Floored remainder: the result takes the sign of the divisor, so
/// `modulo(-7, 3) == 2` and `modulo(7, -3) == -2`.
///
/// # Errors
///
/// [`ArithmeticError::DivisionByZero`] when `b` is zero.
#[instrument]
pub fn modulo(a: i64, b: i64) -> Result<i64, ArithmeticError> {
    if b == 0 {
        warn!("Modulo by zero requested");
        return Err(ArithmeticError::DivisionByZero);
    }

    // Only i64::MIN % -1 fails here, and its remainder is 0.
    let rem = a.checked_rem(b).unwrap_or(0);
    if rem != 0 && (rem < 0) != (b < 0) {
        Ok(rem + b)
    } else {
        Ok(rem)
    }
}

/// Integer exponentiation. `power(x, 0) == 1` for every `x`.
#[instrument]
pub fn power(base: i64, exponent: u32) -> Result<i64, ArithmeticError> {
    base.checked_pow(exponent).ok_or(ArithmeticError::Overflow)
}

/// Absolute value. Fails only for `i64::MIN`.
#[instrument]
pub fn absolute(a: i64) -> Result<i64, ArithmeticError> {
    a.checked_abs().ok_or(ArithmeticError::Overflow)
}

/// Whether `a` is divisible by two.
pub fn is_even(a: i64) -> bool {
    a % 2 == 0
}

/// Whether `a` is not divisible by two.
pub fn is_odd(a: i64) -> bool {
    a % 2 != 0
}

/// The larger of two values.
pub fn max_of(a: i64, b: i64) -> i64 {
    if a >= b { a } else { b }
}

/// The smaller of two values.
pub fn min_of(a: i64, b: i64) -> i64 {
    if a <= b { a } else { b }
}

/// Sums any number of values. The empty sum is `0`.
#[instrument(skip(values))]
pub fn add_all<I>(values: I) -> Result<i64, ArithmeticError>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().try_fold(0, add)
}

/// Multiplies any number of values. The empty product is `1`.
#[instrument(skip(values))]
pub fn multiply_all<I>(values: I) -> Result<i64, ArithmeticError>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().try_fold(1, multiply)
}
