//! Expense error types.

use thiserror::Error;

use crate::split::SplitError;

use super::types::SplitType;

/// Errors raised while validating a draft or building the create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Expense description is empty.
    #[error("Description is required")]
    DescriptionRequired,

    /// Amount is zero or negative.
    #[error("Amount must be positive")]
    AmountNotPositive,

    /// Amount carries sub-cent precision the wire format cannot represent.
    #[error("Amount cannot be finer than a cent")]
    SubCentAmount,

    /// No participants selected.
    #[error("At least one participant is required")]
    NoParticipants,

    /// Split type is not implemented end to end yet.
    #[error("Split type {0:?} is not supported yet")]
    UnsupportedSplitType(SplitType),

    /// Share allocation failed.
    #[error(transparent)]
    Split(#[from] SplitError),
}
