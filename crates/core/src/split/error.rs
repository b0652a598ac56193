//! Split error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors produced by share allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The total to split is not a valid monetary amount (negative).
    #[error("Invalid amount to split: {0}")]
    InvalidAmount(Decimal),
}
