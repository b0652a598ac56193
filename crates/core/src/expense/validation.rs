//! Form-level validation for expense drafts.
//!
//! The allocator itself only rejects negative totals; every other submission
//! rule lives here and runs before any request body is built.

use super::error::ExpenseError;
use super::types::{ExpenseDraft, SplitType};

/// Validates a draft against the submission rules.
///
/// # Errors
///
/// Returns the first violated rule:
/// - `DescriptionRequired` for a blank description
/// - `AmountNotPositive` for a zero or negative amount
/// - `SubCentAmount` for an amount finer than a cent
/// - `NoParticipants` when nobody is selected
/// - `UnsupportedSplitType` for anything but an equal split
pub fn validate_draft(draft: &ExpenseDraft) -> Result<(), ExpenseError> {
    if draft.description.trim().is_empty() {
        return Err(ExpenseError::DescriptionRequired);
    }

    if draft.amount.is_zero() || draft.amount.is_negative() {
        return Err(ExpenseError::AmountNotPositive);
    }

    if !draft.amount.has_cent_precision() {
        return Err(ExpenseError::SubCentAmount);
    }

    if draft.participants.is_empty() {
        return Err(ExpenseError::NoParticipants);
    }

    if draft.split_type != SplitType::Equal {
        return Err(ExpenseError::UnsupportedSplitType(draft.split_type));
    }

    Ok(())
}
