//! `getDepositBalance` / `setDepositBalance` / `getTotalBalance` /
//! `setTotalBalance` — §4.2.
//!
//! The row count lives in the low nibble of the account's metadata byte
//! regardless of whether the account has been enrolled in the depositor
//! list (`VALID_BIT`). A deposit can exist before enrolment — the first
//! deposit writes the balance rows before the list-insertion step runs
//! — so these operations read/write that nibble directly instead of
//! going through [`crate::domain::entities::AccountMeta`], which folds
//! every `VALID_BIT`-unset byte into `Deleted` and would lose it.

use crate::domain::entities::{NULL_BIT, ROW_COUNT_MASK, VALID_BIT};
use crate::domain::invariants::MAX_DEPOSIT_ROWS;
use crate::domain::value_objects::{Address, DoubleWord, Scalar};
use crate::ports::outbound::WordStore;

use super::{keys, TrsCore};

impl TrsCore {
    /// Zero if the account has never had a balance written.
    #[must_use]
    pub fn get_deposit_balance(store: &dyn WordStore, contract: Address, account: Address) -> Scalar {
        let Some(meta) = store.get_double_word(contract, keys::account_record(account)) else {
            return Scalar::zero();
        };
        let row_count = meta.as_bytes()[0] & ROW_COUNT_MASK;
        read_rows(store, contract, account, row_count)
    }

    /// Writes `balance` as the account's deposit balance.
    ///
    /// `balance < 1` is a no-op that reports success without touching
    /// storage — this is the documented asymmetry with `getDepositBalance`,
    /// which still reports zero for an account nothing was ever written
    /// for. Returns `false` if `balance` needs more than
    /// [`MAX_DEPOSIT_ROWS`] rows to represent.
    pub fn set_deposit_balance(
        store: &mut dyn WordStore,
        contract: Address,
        account: Address,
        balance: &Scalar,
    ) -> bool {
        if *balance < 1u64 {
            return true;
        }
        let row_count = balance.row_count(32);
        if row_count > MAX_DEPOSIT_ROWS {
            return false;
        }
        write_rows(store, contract, account, balance);

        let existing_byte0 = store
            .get_double_word(contract, keys::account_record(account))
            .map_or(0, |value| value.as_bytes()[0]);
        let updated = if existing_byte0 & VALID_BIT != 0 {
            // Already enrolled: keep the successor pointer, refresh the count.
            let mut bytes = *store
                .get_double_word(contract, keys::account_record(account))
                .expect("VALID_BIT was read from this key")
                .as_bytes();
            bytes[0] = (existing_byte0 & !ROW_COUNT_MASK) | (row_count as u8 & ROW_COUNT_MASK);
            DoubleWord::new(bytes)
        } else {
            // Did not previously exist as a list member: the "balance
            // only" shape, not yet carrying NULL_BIT's list-membership
            // meaning — §4.4 resolves that at insertion time.
            let mut bytes = [0u8; 32];
            bytes[0] = NULL_BIT | (row_count as u8 & ROW_COUNT_MASK);
            DoubleWord::new(bytes)
        };
        store.put_double_word(contract, keys::account_record(account), updated);
        true
    }

    /// The accumulator's current total, or zero if never written.
    #[must_use]
    pub fn get_total_balance(store: &dyn WordStore, contract: Address) -> Scalar {
        let Some(specs) = store.get_word(contract, keys::total_balance_specs()) else {
            return Scalar::zero();
        };
        let row_count = u32::try_from(specs.low_u64()).unwrap_or(u32::MAX);
        let mut buf = Vec::with_capacity(row_count as usize * 32);
        for row in 0..row_count {
            let value = store
                .get_double_word(contract, keys::total_balance_row(row))
                .unwrap_or(DoubleWord::ZERO);
            buf.extend_from_slice(value.as_bytes());
        }
        Scalar::from_bytes_be_unsigned(&buf)
    }

    /// Overwrites the accumulator's total. A negative total is a
    /// contradiction the caller must never construct — callers build
    /// `total` from `checked_add`/`checked_sub` on existing balances, so
    /// this operation only ever canonicalises what it is given.
    pub fn set_total_balance(store: &mut dyn WordStore, contract: Address, total: &Scalar) {
        let rows = total.to_rows_aligned(32);
        let row_count = total.row_count(32) as u32;
        for (i, chunk) in rows.chunks_exact(32).enumerate() {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(chunk);
            store.put_double_word(
                contract,
                keys::total_balance_row(i as u32),
                DoubleWord::new(bytes),
            );
        }
        let mut word = [0u8; 16];
        word[12..16].copy_from_slice(&row_count.to_be_bytes());
        store.put_word(
            contract,
            keys::total_balance_specs(),
            crate::domain::value_objects::Word::new(word),
        );
    }
}

fn read_rows(store: &dyn WordStore, contract: Address, account: Address, row_count: u8) -> Scalar {
    if row_count == 0 {
        return Scalar::zero();
    }
    let mut buf = Vec::with_capacity(row_count as usize * 32);
    for row in 0..row_count {
        let value = store
            .get_double_word(contract, keys::deposit_balance_row(account, row))
            .unwrap_or(DoubleWord::ZERO);
        buf.extend_from_slice(value.as_bytes());
    }
    Scalar::from_bytes_be_unsigned(&buf)
}

fn write_rows(store: &mut dyn WordStore, contract: Address, account: Address, balance: &Scalar) {
    let rows = balance.to_rows_aligned(32);
    for (i, chunk) in rows.chunks_exact(32).enumerate() {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(chunk);
        store.put_double_word(
            contract,
            keys::deposit_balance_row(account, i as u8),
            DoubleWord::new(bytes),
        );
    }
}
