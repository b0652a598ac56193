//! Property-based tests for share allocation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use spliteasy_shared::types::UserId;

use super::equal::allocate_equal;

/// Strategy to generate non-negative cent-precision totals (0.00 to 1,000,000.00).
fn cent_total() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate participant counts (1 to 100).
fn participant_count() -> impl Strategy<Value = usize> {
    1usize..100
}

/// Distinct participant ids for a given count.
fn participants(count: usize) -> Vec<UserId> {
    (0..count).map(|i| UserId::from_raw(i as i64 + 1)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* cent-precision total and non-empty participant list, the
    /// shares sum exactly to the total.
    #[test]
    fn prop_shares_sum_to_total(total in cent_total(), count in participant_count()) {
        let ids = participants(count);
        let shares = allocate_equal(total, &ids).unwrap();
        let sum: Decimal = shares.values().copied().sum();
        prop_assert_eq!(sum, total, "shares must sum to the total");
    }

    /// *For any* input, every share is non-negative.
    #[test]
    fn prop_shares_nonnegative(total in cent_total(), count in participant_count()) {
        let ids = participants(count);
        let shares = allocate_equal(total, &ids).unwrap();
        for (id, share) in &shares {
            prop_assert!(!share.is_sign_negative(), "share for {} is negative: {}", id, share);
        }
    }

    /// *For any* list of `n` distinct participants, the mapping has exactly
    /// `n` keys, one per participant.
    #[test]
    fn prop_one_share_per_participant(total in cent_total(), count in participant_count()) {
        let ids = participants(count);
        let shares = allocate_equal(total, &ids).unwrap();
        prop_assert_eq!(shares.len(), count);
        for id in &ids {
            prop_assert!(shares.contains_key(id), "missing share for {}", id);
        }
    }

    /// *For any* input, the last participant's share is at least every other
    /// participant's share (base plus a non-negative remainder).
    #[test]
    fn prop_last_share_dominates(total in cent_total(), count in participant_count()) {
        let ids = participants(count);
        let shares = allocate_equal(total, &ids).unwrap();
        let last = shares[ids.last().unwrap()];
        for id in &ids {
            prop_assert!(shares[id] <= last);
        }
    }

    /// *For any* input, allocation is deterministic.
    #[test]
    fn prop_allocation_is_deterministic(total in cent_total(), count in participant_count()) {
        let ids = participants(count);
        let first = allocate_equal(total, &ids).unwrap();
        let second = allocate_equal(total, &ids).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* negative total, allocation is rejected before computing.
    #[test]
    fn prop_negative_total_rejected(cents in 1i64..100_000_000i64, count in participant_count()) {
        let total = Decimal::new(-cents, 2);
        let ids = participants(count);
        prop_assert!(allocate_equal(total, &ids).is_err());
    }
}
