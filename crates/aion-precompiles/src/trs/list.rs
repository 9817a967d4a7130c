//! The depositor list: `getListHead`/`setListHead`, `getListPrev`/
//! `setListPrev`, `getListNext`/`setListNext`, and the head-insertion
//! protocol (§4.4) built on top of them.
//!
//! Enrolment is read from `VALID_BIT`, not `NULL_BIT` — `NULL_BIT` only
//! distinguishes "has a successor" from "is the tail" for an already-
//! enrolled account. A brand-new depositor's first `setDepositBalance`
//! sets `NULL_BIT` (see [`super::balance`]) before enrolment has
//! happened at all, so gating insertion on `NULL_BIT` would misread a
//! first-time deposit as already a list member. The deposit handler
//! reads enrolment with [`TrsCore::is_enrolled`] *before* it calls
//! `setDepositBalance`, then runs [`TrsCore::insert_at_head`] afterward
//! if that snapshot said the account was not yet a member.

use crate::domain::entities::{AccountMeta, ListPointer};
use crate::domain::value_objects::{Address, PREFIX_EOA};
use crate::ports::outbound::WordStore;

use super::{keys, TrsCore};

impl TrsCore {
    /// The current head of the depositor list, if any.
    #[must_use]
    pub fn get_list_head(store: &dyn WordStore, contract: Address) -> Option<Address> {
        pointer_to_address(ListPointer::decode(store.get_double_word(contract, keys::list_head())))
    }

    /// Overwrites the list head.
    pub fn set_list_head(store: &mut dyn WordStore, contract: Address, head: Option<Address>) {
        let pointer = ListPointer {
            body: head.map(|a| a.body()),
        };
        store.put_double_word(contract, keys::list_head(), pointer.encode());
    }

    /// `account`'s predecessor, or `None` if it is the head (or unset).
    #[must_use]
    pub fn get_list_prev(store: &dyn WordStore, contract: Address, account: Address) -> Option<Address> {
        pointer_to_address(ListPointer::decode(store.get_double_word(contract, keys::prev_pointer(account))))
    }

    /// Sets `account`'s predecessor pointer.
    pub fn set_list_prev(
        store: &mut dyn WordStore,
        contract: Address,
        account: Address,
        prev: Option<Address>,
    ) {
        let pointer = ListPointer {
            body: prev.map(|a| a.body()),
        };
        store.put_double_word(contract, keys::prev_pointer(account), pointer.encode());
    }

    /// `account`'s successor, or `None` if it is not a live list member.
    #[must_use]
    pub fn get_list_next(store: &dyn WordStore, contract: Address, account: Address) -> Option<Address> {
        match AccountMeta::decode(store.get_double_word(contract, keys::account_record(account))) {
            AccountMeta::Live { next, .. } => next.map(|body| Address::from_prefix_and_body(PREFIX_EOA, body)),
            AccountMeta::Absent | AccountMeta::Deleted => None,
        }
    }

    /// Sets `account`'s successor and list-membership bit, preserving
    /// whatever deposit-balance row count is already on record.
    pub fn set_list_next(
        store: &mut dyn WordStore,
        contract: Address,
        account: Address,
        next: Option<Address>,
        is_valid: bool,
    ) {
        let row_count = store
            .get_double_word(contract, keys::account_record(account))
            .map_or(0, |value| value.as_bytes()[0] & 0x0F);
        let encoded = if is_valid {
            AccountMeta::encode_live(next.map(|a| a.body()), row_count)
        } else {
            AccountMeta::encode_deleted()
        };
        store.put_double_word(contract, keys::account_record(account), encoded);
    }

    /// True iff `account` is a live member of `contract`'s depositor list.
    #[must_use]
    pub fn is_enrolled(store: &dyn WordStore, contract: Address, account: Address) -> bool {
        AccountMeta::decode(store.get_double_word(contract, keys::account_record(account))).is_valid()
    }

    /// Inserts `account` at the head of `contract`'s depositor list.
    ///
    /// Callers must have already established `account` is not enrolled
    /// (via a pre-write [`TrsCore::is_enrolled`] snapshot) — this does
    /// not check, so calling it twice for the same account corrupts the
    /// list.
    pub fn insert_at_head(store: &mut dyn WordStore, contract: Address, account: Address) {
        let old_head = Self::get_list_head(store, contract);
        Self::set_list_next(store, contract, account, old_head, true);
        if let Some(head) = old_head {
            Self::set_list_prev(store, contract, head, Some(account));
        }
        Self::set_list_prev(store, contract, account, None);
        Self::set_list_head(store, contract, Some(account));
    }

    /// Number of live depositors, walking the list from the head.
    #[must_use]
    pub fn depositor_count(store: &dyn WordStore, contract: Address) -> u64 {
        Self::iter_depositors(store, contract).len() as u64
    }

    /// All live depositors, head to tail.
    #[must_use]
    pub fn iter_depositors(store: &dyn WordStore, contract: Address) -> Vec<Address> {
        let mut out = Vec::new();
        let mut cursor = Self::get_list_head(store, contract);
        while let Some(account) = cursor {
            out.push(account);
            cursor = Self::get_list_next(store, contract, account);
        }
        out
    }
}

fn pointer_to_address(pointer: ListPointer) -> Option<Address> {
    pointer.body.map(|body| Address::from_prefix_and_body(PREFIX_EOA, body))
}
