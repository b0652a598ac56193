//! Expense domain types.

use serde::{Deserialize, Serialize};

use spliteasy_shared::types::{GroupId, Money, UserId};

/// How an expense is divided across its participants.
///
/// Only `Equal` is implemented end to end; the other variants exist on the
/// wire and in the UI but are rejected at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SplitType {
    /// Every participant owes the same share.
    Equal,
    /// Shares proportional to per-participant percentages.
    Percentage,
    /// Shares proportional to per-participant weights.
    Shares,
    /// Caller supplies each share verbatim.
    Exact,
}

/// Expense lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseStatus {
    /// Created, not yet settled.
    Pending,
    /// Fully settled.
    Settled,
}

/// Spending category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Food & dining.
    Food,
    /// Travel.
    Travel,
    /// Shopping.
    Shopping,
    /// Housing.
    Housing,
    /// Transport.
    Transport,
    /// Utilities.
    Utilities,
    /// Entertainment.
    Entertainment,
    /// Anything else.
    Other,
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "travel" => Ok(Self::Travel),
            "shopping" => Ok(Self::Shopping),
            "housing" => Ok(Self::Housing),
            "transport" => Ok(Self::Transport),
            "utilities" => Ok(Self::Utilities),
            "entertainment" => Ok(Self::Entertainment),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// Client-side form state an expense is created from.
///
/// Constructed transiently at submission time and discarded after the
/// request is sent; nothing here is persisted locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    /// What the money was spent on.
    pub description: String,
    /// Total amount of the expense.
    pub amount: Money,
    /// Who paid.
    pub payer: UserId,
    /// Participants selected in the form. The payer may or may not be
    /// among them; request construction makes sure they end up in the
    /// roster either way.
    pub participants: Vec<UserId>,
    /// Group the expense belongs to, if any.
    pub group: Option<GroupId>,
    /// How to divide the amount.
    pub split_type: SplitType,
    /// Spending category.
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_split_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&SplitType::Equal).unwrap(),
            "\"EQUAL\""
        );
        assert_eq!(
            serde_json::to_string(&SplitType::Percentage).unwrap(),
            "\"PERCENTAGE\""
        );
        let back: SplitType = serde_json::from_str("\"EXACT\"").unwrap();
        assert_eq!(back, SplitType::Exact);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ExpenseStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        let back: ExpenseStatus = serde_json::from_str("\"SETTLED\"").unwrap();
        assert_eq!(back, ExpenseStatus::Settled);
    }

    #[test]
    fn test_category_wire_format() {
        assert_eq!(serde_json::to_string(&Category::Food).unwrap(), "\"FOOD\"");
        let back: Category = serde_json::from_str("\"ENTERTAINMENT\"").unwrap();
        assert_eq!(back, Category::Entertainment);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("food").unwrap(), Category::Food);
        assert_eq!(Category::from_str("Transport").unwrap(), Category::Transport);
        assert!(Category::from_str("gambling").is_err());
    }
}
