//! Equal-share allocation with positional remainder assignment.
//!
//! Splitting a total evenly across `n` participants rarely lands on whole
//! cents. Here every participant except the last gets the per-head share
//! floored to the cent, and the last participant absorbs whatever is left so
//! the shares sum exactly to the total. The remainder is always `>= 0` and
//! `< n` cents.
//!
//! This is positional remainder assignment, not a largest-remainder
//! apportionment: who absorbs the remainder is decided purely by position in
//! the caller-supplied ordering.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use spliteasy_shared::types::UserId;

use super::error::SplitError;

/// Mapping from participant to the share they owe.
pub type ShareMap = HashMap<UserId, Decimal>;

/// Splits `total` evenly across `participants`, giving the rounding
/// remainder to the last participant in the slice.
///
/// An empty participant list yields an empty mapping; minimum-participant
/// rules are the caller's concern. Participants are expected to be unique —
/// duplicates collapse to a single key and the sum invariant no longer
/// holds, so deduplicate before calling.
///
/// # Errors
///
/// Returns `SplitError::InvalidAmount` if `total` is negative.
pub fn allocate_equal(total: Decimal, participants: &[UserId]) -> Result<ShareMap, SplitError> {
    if total.is_sign_negative() {
        return Err(SplitError::InvalidAmount(total));
    }

    let n = participants.len();
    let mut shares = ShareMap::with_capacity(n);
    let Some((&last, rest)) = participants.split_last() else {
        return Ok(shares);
    };

    // Per-head share floored to the cent, so nobody pays more than an equal
    // share due to rounding.
    let base = (total / Decimal::from(n as u64))
        .round_dp_with_strategy(2, RoundingStrategy::ToZero);

    let mut allocated = Decimal::ZERO;
    for &id in rest {
        shares.insert(id, base);
        allocated += base;
    }

    // The last participant absorbs the remainder; rounding here only matters
    // when the total itself is finer than a cent.
    let last_share =
        (total - allocated).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    shares.insert(last, last_share);

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn ids(raw: &[i64]) -> Vec<UserId> {
        raw.iter().copied().map(UserId::from_raw).collect()
    }

    #[test]
    fn test_even_split() {
        let shares = allocate_equal(dec!(10.00), &ids(&[1, 2])).unwrap();
        assert_eq!(shares[&UserId::from_raw(1)], dec!(5.00));
        assert_eq!(shares[&UserId::from_raw(2)], dec!(5.00));
    }

    #[test]
    fn test_remainder_goes_to_last() {
        let shares = allocate_equal(dec!(10.00), &ids(&[1, 2, 3])).unwrap();
        assert_eq!(shares[&UserId::from_raw(1)], dec!(3.33));
        assert_eq!(shares[&UserId::from_raw(2)], dec!(3.33));
        assert_eq!(shares[&UserId::from_raw(3)], dec!(3.34));
    }

    #[test]
    fn test_single_cent() {
        let shares = allocate_equal(dec!(0.01), &ids(&[1, 2, 3])).unwrap();
        assert_eq!(shares[&UserId::from_raw(1)], dec!(0.00));
        assert_eq!(shares[&UserId::from_raw(2)], dec!(0.00));
        assert_eq!(shares[&UserId::from_raw(3)], dec!(0.01));
    }

    #[test]
    fn test_empty_participants() {
        let shares = allocate_equal(dec!(100.00), &[]).unwrap();
        assert!(shares.is_empty());
    }

    #[test]
    fn test_negative_total_rejected() {
        let result = allocate_equal(dec!(-5.00), &ids(&[1, 2]));
        assert_eq!(result, Err(SplitError::InvalidAmount(dec!(-5.00))));
    }

    #[test]
    fn test_single_participant_gets_everything() {
        let shares = allocate_equal(dec!(10.00), &ids(&[7])).unwrap();
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[&UserId::from_raw(7)], dec!(10.00));
    }

    #[test]
    fn test_zero_total() {
        let shares = allocate_equal(Decimal::ZERO, &ids(&[1, 2, 3])).unwrap();
        assert!(shares.values().all(Decimal::is_zero));
    }

    #[rstest]
    #[case(dec!(100), &[1, 2, 3])]
    #[case(dec!(100), &[1, 2, 3, 4, 5, 6, 7])]
    #[case(dec!(1000), &[10, 20, 30])]
    #[case(dec!(1), &[1, 2, 3])]
    #[case(dec!(0.01), &[1, 2, 3])]
    #[case(dec!(999.99), &[1, 2, 3, 4, 5, 6, 7])]
    fn test_sum_invariant(#[case] total: Decimal, #[case] raw: &[i64]) {
        let shares = allocate_equal(total, &ids(raw)).unwrap();
        assert_eq!(
            shares.values().copied().sum::<Decimal>(),
            total,
            "Sum invariant failed for total={total}, participants={raw:?}"
        );
    }

    #[test]
    fn test_last_share_at_least_base() {
        let participants = ids(&[4, 9, 2, 11]);
        let shares = allocate_equal(dec!(13.37), &participants).unwrap();
        let last = shares[&UserId::from_raw(11)];
        for &id in &participants {
            assert!(shares[&id] <= last);
        }
    }

    #[test]
    fn test_remainder_depends_on_order() {
        // Positional convention: reordering moves the extra cent.
        let forward = allocate_equal(dec!(10.00), &ids(&[1, 2, 3])).unwrap();
        let reversed = allocate_equal(dec!(10.00), &ids(&[3, 2, 1])).unwrap();
        assert_eq!(forward[&UserId::from_raw(3)], dec!(3.34));
        assert_eq!(reversed[&UserId::from_raw(1)], dec!(3.34));
        assert_eq!(reversed[&UserId::from_raw(3)], dec!(3.33));
    }

    #[test]
    fn test_subcent_total_rounds_on_last_share() {
        // A total finer than a cent can only ever differ from the share sum
        // on the absorbing participant.
        let shares = allocate_equal(dec!(10.005), &ids(&[1, 2])).unwrap();
        assert_eq!(shares[&UserId::from_raw(1)], dec!(5.00));
        assert_eq!(shares[&UserId::from_raw(2)], dec!(5.01));
    }
}
