//! Arithmetic error type.

/// Result type.
///
/// A result with the crate's arithmetic [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Recoverable arithmetic failures.
///
/// Allocation failure is not represented here: growing a
/// [`crate::DynUint`] aborts the process if memory is exhausted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The divisor of a division was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The subtrahend of a subtraction was greater than the minuend.
    #[error("subtraction underflow: subtrahend is greater than minuend")]
    Underflow,
}
