//! Integer arithmetic helpers.
//!
//! Pure functions over `i64`. Partial functions return
//! `Result<_, ArithmeticError>` so callers must handle the failure case;
//! nothing in this crate catches its own errors.
//!
//! ```
//! use strictly_arithmetic::{divide, gcd, ArithmeticError};
//!
//! assert_eq!(divide(7, 2), Ok(3.5));
//! assert_eq!(divide(1, 0), Err(ArithmeticError::DivisionByZero));
//! assert_eq!(gcd(12, 18), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod number_theory;
mod ops;

pub use error::ArithmeticError;
pub use number_theory::{factorial, gcd, lcm};
pub use ops::{
    absolute, add, add_all, divide, is_even, is_odd, max_of, min_of, modulo, multiply,
    multiply_all, power, subtract,
};
