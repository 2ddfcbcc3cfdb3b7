//! Arithmetic error kinds.

use derive_more::{Display, Error};

/// Why an arithmetic operation has no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum ArithmeticError {
    /// Divisor of a division or modulo was zero.
    #[display("Cannot divide by zero")]
    DivisionByZero,

    /// Input lies outside the function's domain (e.g. negative factorial).
    #[display("Argument is outside the function's domain")]
    InvalidArgument,

    /// Result does not fit in the integer type.
    #[display("Result overflows a 64-bit integer")]
    Overflow,
}
