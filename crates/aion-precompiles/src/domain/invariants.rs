//! Pure structural checks shared by the MSC and TRS engines.
//!
//! None of these touch storage; they validate already-decoded values.
//! Keeping them free functions (rather than methods buried in the engine)
//! makes the universal invariants independently testable.

use crate::domain::value_objects::{Address, PREFIX_TRS};

/// MSC: minimum number of owners a wallet may have.
pub const MIN_OWNERS: usize = 2;
/// MSC: maximum number of owners a wallet may have.
pub const MAX_OWNERS: usize = 10;
/// MSC: minimum signing threshold.
pub const MIN_THRESH: u64 = 2;
/// TRS: maximum number of 32-byte rows a deposit balance may span.
pub const MAX_DEPOSIT_ROWS: usize = 16;

/// True iff every address in `owners` is pairwise distinct.
#[must_use]
pub fn all_distinct(owners: &[Address]) -> bool {
    for (i, a) in owners.iter().enumerate() {
        for b in &owners[i + 1..] {
            if a == b {
                return false;
            }
        }
    }
    true
}

/// True iff `count` owners is within `[MIN_OWNERS, MAX_OWNERS]`.
#[must_use]
pub fn owner_count_in_range(count: usize) -> bool {
    (MIN_OWNERS..=MAX_OWNERS).contains(&count)
}

/// True iff `threshold` is within `[MIN_THRESH, owner_count]`.
#[must_use]
pub fn threshold_in_range(threshold: u64, owner_count: usize) -> bool {
    threshold >= MIN_THRESH && threshold <= owner_count as u64
}

/// True iff no address in `owners` carries the TRS contract prefix —
/// a multi-sig wallet may not name another contract as an owner.
#[must_use]
pub fn no_owner_is_a_contract(owners: &[Address]) -> bool {
    owners.iter().all(|a| a.prefix() != PREFIX_TRS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: u8) -> Address {
        Address::from_prefix_and_body(0xA0, [tag; 31])
    }

    #[test]
    fn distinct_detects_duplicates() {
        assert!(all_distinct(&[addr(1), addr(2), addr(3)]));
        assert!(!all_distinct(&[addr(1), addr(2), addr(1)]));
    }

    #[test]
    fn owner_count_range() {
        assert!(!owner_count_in_range(1));
        assert!(owner_count_in_range(2));
        assert!(owner_count_in_range(10));
        assert!(!owner_count_in_range(11));
    }

    #[test]
    fn threshold_range() {
        assert!(!threshold_in_range(1, 5));
        assert!(threshold_in_range(2, 5));
        assert!(threshold_in_range(5, 5));
        assert!(!threshold_in_range(6, 5));
    }

    #[test]
    fn rejects_contract_owner() {
        let contract = Address::from_prefix_and_body(PREFIX_TRS, [9u8; 31]);
        assert!(!no_owner_is_a_contract(&[addr(1), contract]));
    }
}
