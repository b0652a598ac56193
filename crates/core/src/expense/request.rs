//! Request-body construction for expense creation.
//!
//! `CreateExpenseRequest` is the exact camelCase body of
//! `POST /api/v1/expenses`. Everything except `participantShares` passes
//! through from the draft unmodified; the shares are computed here via the
//! equal-share allocator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use spliteasy_shared::types::{Currency, GroupId, UserId};

use crate::split::{ShareMap, allocate_equal};

use super::error::ExpenseError;
use super::types::{Category, ExpenseDraft, ExpenseStatus, SplitType};
use super::validation::validate_draft;

/// Body of `POST /api/v1/expenses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    /// Total amount, a JSON number on the wire.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Currency of the amount.
    pub currency: Currency,
    /// What the money was spent on.
    pub description: String,
    /// Who paid.
    pub payer_id: UserId,
    /// Full participant roster, payer included.
    pub participant_ids: Vec<UserId>,
    /// Group the expense belongs to; omitted entirely for individual
    /// expenses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// How the amount is divided.
    pub split_type: SplitType,
    /// Per-participant shares, decimal-string keys on the wire.
    #[serde(with = "share_map")]
    pub participant_shares: ShareMap,
    /// Lifecycle status; always `PENDING` on creation.
    pub status: ExpenseStatus,
    /// Spending category.
    pub category: Category,
}

impl CreateExpenseRequest {
    /// Builds the request body from a draft: validates the form rules,
    /// assembles the participant roster, and allocates the shares.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError` if the draft fails validation or the total
    /// cannot be split.
    pub fn from_draft(draft: &ExpenseDraft) -> Result<Self, ExpenseError> {
        validate_draft(draft)?;

        let roster = build_roster(draft.payer, &draft.participants);
        let shares = allocate_equal(draft.amount.amount, &roster)?;

        Ok(Self {
            amount: draft.amount.amount,
            currency: draft.amount.currency,
            description: draft.description.trim().to_string(),
            payer_id: draft.payer,
            participant_ids: roster,
            group_id: draft.group,
            split_type: draft.split_type,
            participant_shares: shares,
            status: ExpenseStatus::Pending,
            category: draft.category,
        })
    }
}

/// Deduplicates selected participants in first-seen order, then appends the
/// payer if they were not selected.
///
/// An unselected payer therefore lands last in the roster and absorbs the
/// remainder cent of an equal split.
#[must_use]
pub fn build_roster(payer: UserId, selected: &[UserId]) -> Vec<UserId> {
    let mut roster: Vec<UserId> = Vec::with_capacity(selected.len() + 1);
    for &id in selected {
        if !roster.contains(&id) {
            roster.push(id);
        }
    }
    if !roster.contains(&payer) {
        roster.push(payer);
    }
    roster
}

/// `participantShares` wire codec: decimal-string keys, JSON-number values
/// at cent precision (`{"12": 10.00, "7": 10.00, "3": 10.01}`).
///
/// Shared with response types via `#[serde(with = "...")]`; this is the only
/// place amounts cross between `Decimal` and the wire's floating-point
/// numbers.
pub mod share_map {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::de::Error as _;
    use serde::ser::{Error as _, SerializeMap};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::HashMap;

    use spliteasy_shared::types::UserId;

    use crate::split::ShareMap;

    /// Serializes shares as an object of id-string keys and number values.
    pub fn serialize<S>(shares: &ShareMap, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(shares.len()))?;
        for (id, amount) in shares {
            let value = amount
                .round_dp(2)
                .to_f64()
                .ok_or_else(|| S::Error::custom("share does not fit a JSON number"))?;
            map.serialize_entry(&id.to_string(), &value)?;
        }
        map.end()
    }

    /// Deserializes shares back into a `ShareMap`, rounding to the cent.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<ShareMap, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, f64>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(key, value)| {
                let id = key.parse::<UserId>().map_err(D::Error::custom)?;
                let amount = Decimal::from_f64_retain(value)
                    .ok_or_else(|| D::Error::custom("share is not a finite number"))?
                    .round_dp(2);
                Ok((id, amount))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use spliteasy_shared::types::Money;

    fn draft() -> ExpenseDraft {
        ExpenseDraft {
            description: "Dinner at Italian Place".to_string(),
            amount: Money::new(dec!(10.00), Currency::Usd),
            payer: UserId::from_raw(12),
            participants: vec![UserId::from_raw(7), UserId::from_raw(3)],
            group: None,
            split_type: SplitType::Equal,
            category: Category::Food,
        }
    }

    #[test]
    fn test_wire_body_matches_backend_contract() {
        let request = CreateExpenseRequest::from_draft(&draft()).unwrap();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "amount": 10.0,
                "currency": "USD",
                "description": "Dinner at Italian Place",
                "payerId": 12,
                "participantIds": [7, 3, 12],
                "splitType": "EQUAL",
                "participantShares": {"7": 3.33, "3": 3.33, "12": 3.34},
                "status": "PENDING",
                "category": "FOOD"
            })
        );
        // groupId must be omitted, not null, for individual expenses.
        assert!(body.as_object().unwrap().get("groupId").is_none());
    }

    #[test]
    fn test_group_id_serialized_when_present() {
        let mut d = draft();
        d.group = Some(GroupId::from_raw(5));
        let request = CreateExpenseRequest::from_draft(&d).unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["groupId"], json!(5));
    }

    #[test]
    fn test_payer_appended_to_roster_when_not_selected() {
        let request = CreateExpenseRequest::from_draft(&draft()).unwrap();
        assert_eq!(
            request.participant_ids,
            vec![
                UserId::from_raw(7),
                UserId::from_raw(3),
                UserId::from_raw(12)
            ]
        );
        // The payer is last, so the payer absorbs the remainder cent.
        assert_eq!(
            request.participant_shares[&UserId::from_raw(12)],
            dec!(3.34)
        );
    }

    #[test]
    fn test_payer_kept_in_place_when_selected() {
        let mut d = draft();
        d.participants = vec![UserId::from_raw(12), UserId::from_raw(7)];
        let request = CreateExpenseRequest::from_draft(&d).unwrap();
        assert_eq!(
            request.participant_ids,
            vec![UserId::from_raw(12), UserId::from_raw(7)]
        );
    }

    #[test]
    fn test_shares_sum_to_total() {
        let mut d = draft();
        d.amount = Money::new(dec!(99.99), Currency::Usd);
        d.participants = (1..=7).map(UserId::from_raw).collect();
        let request = CreateExpenseRequest::from_draft(&d).unwrap();
        let sum: Decimal = request.participant_shares.values().copied().sum();
        assert_eq!(sum, dec!(99.99));
    }

    #[test]
    fn test_description_is_trimmed() {
        let mut d = draft();
        d.description = "  Taxi  ".to_string();
        let request = CreateExpenseRequest::from_draft(&d).unwrap();
        assert_eq!(request.description, "Taxi");
    }

    #[test]
    fn test_invalid_draft_builds_nothing() {
        let mut d = draft();
        d.participants.clear();
        assert_eq!(
            CreateExpenseRequest::from_draft(&d),
            Err(ExpenseError::NoParticipants)
        );
    }

    #[test]
    fn test_request_roundtrips_through_json() {
        let mut d = draft();
        d.group = Some(GroupId::from_raw(9));
        let request = CreateExpenseRequest::from_draft(&d).unwrap();
        let json = serde_json::to_string(&request).unwrap();
        let back: CreateExpenseRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[rstest]
    #[case::empty_selection(vec![], vec![100])]
    #[case::payer_not_selected(vec![7, 3], vec![7, 3, 100])]
    #[case::duplicates_collapse(vec![7, 7, 3, 7], vec![7, 3, 100])]
    #[case::payer_already_first(vec![100, 7], vec![100, 7])]
    fn test_build_roster(#[case] selected: Vec<i64>, #[case] expected: Vec<i64>) {
        let payer = UserId::from_raw(100);
        let selected: Vec<UserId> = selected.into_iter().map(UserId::from_raw).collect();
        let expected: Vec<UserId> = expected.into_iter().map(UserId::from_raw).collect();
        assert_eq!(build_roster(payer, &selected), expected);
    }
}
