//! Decoded record types for the TRS persistence core.
//!
//! These wrap the raw `Word`/`DoubleWord` byte layouts from the storage
//! table in a tagged shape so the rest of the crate never pattern-matches
//! on flag bits directly. Every `encode`/`decode` pair must round-trip the
//! exact bytes the storage table specifies — these are consensus formats,
//! not internal conveniences.

use crate::domain::value_objects::{DoubleWord, Word};

pub(crate) const NULL_BIT: u8 = 0x80;
pub(crate) const VALID_BIT: u8 = 0x40;
pub(crate) const ROW_COUNT_MASK: u8 = 0x0F;

/// The 16-byte specs record for a TRS contract (key high byte `0xE0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecsRecord {
    /// Raw big-endian `percent`, scaled by `10^(-precision)` when interpreted.
    pub percent: u128,
    pub is_test: bool,
    pub is_direct_deposit: bool,
    pub precision: u8,
    pub periods: u16,
    pub is_locked: bool,
    pub is_live: bool,
}

impl SpecsRecord {
    /// Decodes a specs record from its 16-byte storage layout.
    #[must_use]
    pub fn decode(word: Word) -> Self {
        let bytes = word.as_bytes();
        let mut percent_bytes = [0u8; 16];
        percent_bytes[7..16].copy_from_slice(&bytes[0..9]);
        Self {
            percent: u128::from_be_bytes(percent_bytes),
            is_test: bytes[9] != 0,
            is_direct_deposit: bytes[10] != 0,
            precision: bytes[11],
            periods: u16::from_be_bytes([bytes[12], bytes[13]]),
            is_locked: bytes[14] != 0,
            is_live: bytes[15] != 0,
        }
    }

    /// Encodes back to the 16-byte storage layout. `percent` is truncated
    /// to its low 9 bytes, matching `setSpecs`'s documented truncation.
    #[must_use]
    pub fn encode(&self) -> Word {
        let mut bytes = [0u8; 16];
        let percent_full = self.percent.to_be_bytes();
        bytes[0..9].copy_from_slice(&percent_full[7..16]);
        bytes[9] = u8::from(self.is_test);
        bytes[10] = u8::from(self.is_direct_deposit);
        bytes[11] = self.precision;
        let periods = self.periods.to_be_bytes();
        bytes[12] = periods[0];
        bytes[13] = periods[1];
        bytes[14] = u8::from(self.is_locked);
        bytes[15] = u8::from(self.is_live);
        Word::new(bytes)
    }
}

/// Decoded account metadata byte — the tri-state tagged variant called
/// for by the depositor-list design note: absent, logically deleted, or
/// live with a row count and an optional successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountMeta {
    /// No record has ever been written for this account.
    Absent,
    /// The account was once valid and has been logically removed from
    /// the depositor list (the all-zero `INVALID` sentinel).
    Deleted,
    /// The account is a live depositor-list member.
    Live {
        /// Successor's address body, or `None` if this is the tail.
        next: Option<[u8; 31]>,
        /// Low nibble of the metadata byte: deposit-balance row count (0..16).
        row_count: u8,
    },
}

impl AccountMeta {
    /// Decodes the metadata byte given a raw value, or `Absent` if the
    /// key was never written.
    #[must_use]
    pub fn decode(raw: Option<DoubleWord>) -> Self {
        let Some(value) = raw else {
            return Self::Absent;
        };
        let byte0 = value.as_bytes()[0];
        if byte0 & VALID_BIT == 0 {
            return Self::Deleted;
        }
        let row_count = byte0 & ROW_COUNT_MASK;
        let next = if byte0 & NULL_BIT != 0 {
            None
        } else {
            let mut body = [0u8; 31];
            body.copy_from_slice(&value.as_bytes()[1..]);
            Some(body)
        };
        Self::Live { next, row_count }
    }

    /// Row count of a live account, or 0 otherwise.
    #[must_use]
    pub fn row_count(&self) -> u8 {
        match self {
            Self::Live { row_count, .. } => *row_count,
            Self::Absent | Self::Deleted => 0,
        }
    }

    /// True for `Live`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Live { .. })
    }

    /// The all-zero `INVALID` sentinel written by `setListNext` when
    /// `is_valid = false`.
    #[must_use]
    pub fn encode_deleted() -> DoubleWord {
        DoubleWord::ZERO
    }

    /// Encodes a live record, setting `NULL_BIT` when `next` is `None`.
    #[must_use]
    pub fn encode_live(next: Option<[u8; 31]>, row_count: u8) -> DoubleWord {
        let mut bytes = [0u8; 32];
        match next {
            None => bytes[0] = NULL_BIT | VALID_BIT | (row_count & ROW_COUNT_MASK),
            Some(body) => {
                bytes[0] = VALID_BIT | (row_count & ROW_COUNT_MASK);
                bytes[1..].copy_from_slice(&body);
            }
        }
        DoubleWord::new(bytes)
    }

    /// Encodes the metadata byte `setDepositBalance` writes for an
    /// account that did not previously exist: `NULL_BIT | row_count`,
    /// with `VALID_BIT` left unset — insertion into the depositor list
    /// is a separate step (§4.4 of the storage design).
    #[must_use]
    pub fn encode_balance_only(row_count: u8) -> DoubleWord {
        let mut bytes = [0u8; 32];
        bytes[0] = NULL_BIT | (row_count & ROW_COUNT_MASK);
        DoubleWord::new(bytes)
    }
}

/// A list head or previous-pointer value: a null flag plus a 31-byte body.
///
/// Both the list head (key `0x70`) and the previous-pointer (key
/// `0x60 ‖ acct-body`) share this shape, stored as a double word: the
/// flag byte alone cannot carry a full address body, so both are kept
/// at the 32-byte width despite the storage table's head-row width
/// column reading "single" — see the grounding notes for this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPointer {
    /// `None` encodes the null sentinel.
    pub body: Option<[u8; 31]>,
}

impl ListPointer {
    /// The null pointer.
    pub const NULL: Self = Self { body: None };

    /// Decodes a pointer value, treating an absent key as null.
    #[must_use]
    pub fn decode(raw: Option<DoubleWord>) -> Self {
        let Some(value) = raw else {
            return Self::NULL;
        };
        let bytes = value.as_bytes();
        if bytes[0] & NULL_BIT != 0 {
            return Self::NULL;
        }
        let mut body = [0u8; 31];
        body.copy_from_slice(&bytes[1..]);
        Self { body: Some(body) }
    }

    /// Encodes back to the 32-byte storage layout.
    #[must_use]
    pub fn encode(&self) -> DoubleWord {
        let mut bytes = [0u8; 32];
        match self.body {
            None => bytes[0] = NULL_BIT,
            Some(body) => bytes[1..].copy_from_slice(&body),
        }
        DoubleWord::new(bytes)
    }
}
