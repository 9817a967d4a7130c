//! Storage key constructors for the TRS persistence core (§3.2).
//!
//! The storage table's width column gives the key width for most rows,
//! but a handful of entries (`owner`, `list head`, `total-balance row`)
//! hold a full address body or a double-word value under what the table
//! marks as a single-word key; those are kept at double-word width here
//! so the value they carry round-trips without truncation. `specs` and
//! `total-balance specs` are the only genuinely single-word entries —
//! neither needs to carry an address.

use crate::domain::value_objects::{Address, DoubleWord, Word};

/// `0xE0` — specs record.
#[must_use]
pub fn specs() -> Word {
    tag_word(0xE0)
}

/// `0x91` — total-balance specs (row count).
#[must_use]
pub fn total_balance_specs() -> Word {
    tag_word(0x91)
}

/// `0xF0` — owner address.
#[must_use]
pub fn owner() -> DoubleWord {
    tag_double(0xF0)
}

/// `0x70` — depositor list head.
#[must_use]
pub fn list_head() -> DoubleWord {
    tag_double(0x70)
}

/// `0x90 ‖ row_be32` — one row of the total-balance accumulator.
#[must_use]
pub fn total_balance_row(row: u32) -> DoubleWord {
    let mut bytes = [0u8; 32];
    bytes[0] = 0x90;
    bytes[1..5].copy_from_slice(&row.to_be_bytes());
    DoubleWord::new(bytes)
}

/// `0xB_ ‖ row4 ‖ acct-body` — one row (0..15) of an account's deposit
/// balance. The account component is truncated to the low 27 bytes of
/// the address, matching the fixed 32-byte key budget.
#[must_use]
pub fn deposit_balance_row(account: Address, row: u8) -> DoubleWord {
    let mut bytes = [0u8; 32];
    bytes[0] = 0xB0 | (row & 0x0F);
    bytes[1..5].copy_from_slice(&u32::from(row).to_be_bytes());
    bytes[5..32].copy_from_slice(&account.as_bytes()[5..32]);
    DoubleWord::new(bytes)
}

/// `0x60 ‖ acct-body` — the predecessor pointer for `account`.
#[must_use]
pub fn prev_pointer(account: Address) -> DoubleWord {
    let mut bytes = [0u8; 32];
    bytes[0] = 0x60;
    bytes[1..].copy_from_slice(&account.as_bytes()[1..]);
    DoubleWord::new(bytes)
}

/// The account's own address: the key for its metadata + next-pointer row.
#[must_use]
pub fn account_record(account: Address) -> DoubleWord {
    DoubleWord::new(*account.as_bytes())
}

fn tag_word(tag: u8) -> Word {
    let mut bytes = [0u8; 16];
    bytes[0] = tag;
    Word::new(bytes)
}

fn tag_double(tag: u8) -> DoubleWord {
    let mut bytes = [0u8; 32];
    bytes[0] = tag;
    DoubleWord::new(bytes)
}
