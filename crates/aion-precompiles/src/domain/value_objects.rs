//! Fixed-width value types shared by the MSC and TRS engines.
//!
//! Every type here is a thin wrapper around a byte array. None of them
//! know how to read or write storage — that belongs to the `WordStore`
//! port and the per-engine key modules. Keeping these disjoint from raw
//! `[u8; N]` catches width mix-ups (a 16-byte MSC key passed where a
//! 32-byte TRS row key was expected) at compile time instead of at a
//! storage boundary.

use std::fmt;

/// Prefix byte of an externally-owned (MSC wallet) address.
pub const PREFIX_EOA: u8 = 0xA0;
/// Prefix byte of a TRS contract address.
pub const PREFIX_TRS: u8 = 0xC0;

/// A 32-byte account or contract address.
///
/// The first byte is a type prefix (`PREFIX_EOA` or `PREFIX_TRS`); the
/// remaining 31 bytes are the body. Nothing in this type enforces which
/// prefixes are valid — that is a caller-side decision, since some
/// storage keys are built from "any address, interpreted as 31 bytes of
/// body" regardless of what the prefix byte happens to be.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 32]);

impl Address {
    /// Wraps a raw 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Builds an address from a 1-byte prefix and a 31-byte body.
    #[must_use]
    pub fn from_prefix_and_body(prefix: u8, body: [u8; 31]) -> Self {
        let mut bytes = [0u8; 32];
        bytes[0] = prefix;
        bytes[1..].copy_from_slice(&body);
        Self(bytes)
    }

    /// Parses an address from a byte slice, failing if the length is wrong.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != 32 {
            return None;
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Some(Self(bytes))
    }

    /// Raw 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The type-prefix byte.
    #[must_use]
    pub const fn prefix(&self) -> u8 {
        self.0[0]
    }

    /// The 31-byte body following the prefix.
    #[must_use]
    pub fn body(&self) -> [u8; 31] {
        let mut body = [0u8; 31];
        body.copy_from_slice(&self.0[1..]);
        body
    }

    /// True if this address carries the externally-owned prefix.
    #[must_use]
    pub fn is_eoa(&self) -> bool {
        self.prefix() == PREFIX_EOA
    }

    /// True if this address carries the TRS contract prefix.
    #[must_use]
    pub fn is_trs(&self) -> bool {
        self.prefix() == PREFIX_TRS
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A single-word (16-byte) storage value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([u8; 16]);

impl Word {
    /// The all-zero word.
    pub const ZERO: Self = Self([0u8; 16]);

    /// Wraps a raw 16-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Raw 16-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Reads an 8-byte big-endian unsigned integer out of the low half.
    #[must_use]
    pub fn low_u64(&self) -> u64 {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&self.0[8..16]);
        u64::from_be_bytes(buf)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word(0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// A double-word (32-byte) storage value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoubleWord([u8; 32]);

impl DoubleWord {
    /// The all-zero double word.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Wraps a raw 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for DoubleWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DoubleWord(0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// A non-negative arbitrary-precision integer.
///
/// Used for TRS balances (up to 16 double-word rows, i.e. 512 bytes) and
/// for the MSC transaction fields that are serialized the way Java's
/// `BigInteger.toByteArray()` would serialize them: minimal two's
/// complement, which for a non-negative value is minimal unsigned
/// big-endian with a leading `0x00` guard byte prepended whenever the
/// top bit of the minimal unsigned form is set.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Scalar(num_bigint::BigUint);

impl Scalar {
    /// The scalar zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(num_bigint::BigUint::from(0u32))
    }

    /// True if this scalar is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        use num_traits::Zero;
        self.0.is_zero()
    }

    /// Builds a scalar from a `u64`.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self(num_bigint::BigUint::from(value))
    }

    /// Parses a plain (non-two's-complement) unsigned big-endian byte string.
    #[must_use]
    pub fn from_bytes_be_unsigned(bytes: &[u8]) -> Self {
        Self(num_bigint::BigUint::from_bytes_be(bytes))
    }

    /// Minimal unsigned big-endian encoding, with no sign guard and no
    /// padding. Zero encodes as an empty slice's worth of magnitude —
    /// callers that need a concrete zero representation should special
    /// case `is_zero()` first.
    #[must_use]
    pub fn to_bytes_be_unsigned(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    /// Minimal two's-complement encoding of a non-negative value,
    /// matching Java's `BigInteger.toByteArray()`.
    #[must_use]
    pub fn encode_signed_minimal(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![0u8];
        }
        let mut bytes = self.0.to_bytes_be();
        if bytes[0] & 0x80 != 0 {
            let mut guarded = Vec::with_capacity(bytes.len() + 1);
            guarded.push(0u8);
            guarded.append(&mut bytes);
            return guarded;
        }
        bytes
    }

    /// Left-pads the minimal unsigned encoding out to a whole number of
    /// `row_width`-byte rows, with the top row containing at least one
    /// non-zero byte. Zero canonicalises to zero rows (an empty vector);
    /// the deposit/total balance logic treats that as "no entry".
    #[must_use]
    pub fn to_rows_aligned(&self, row_width: usize) -> Vec<u8> {
        if self.is_zero() {
            return Vec::new();
        }
        let minimal = self.0.to_bytes_be();
        let row_count = minimal.len().div_ceil(row_width);
        let mut out = vec![0u8; row_count * row_width];
        let offset = out.len() - minimal.len();
        out[offset..].copy_from_slice(&minimal);
        out
    }

    /// Number of `row_width`-byte rows this value occupies once aligned.
    #[must_use]
    pub fn row_count(&self, row_width: usize) -> usize {
        if self.is_zero() {
            return 0;
        }
        self.0.to_bytes_be().len().div_ceil(row_width)
    }

    /// Adds two scalars.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Self {
        Self(&self.0 + &other.0)
    }

    /// Subtracts `other` from `self`, returning `None` on underflow
    /// instead of panicking.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self.0 < other.0 {
            return None;
        }
        Some(Self(&self.0 - &other.0))
    }
}

impl PartialOrd<u64> for Scalar {
    fn partial_cmp(&self, other: &u64) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&num_bigint::BigUint::from(*other))
    }
}

impl PartialEq<u64> for Scalar {
    fn eq(&self, other: &u64) -> bool {
        self.0 == num_bigint::BigUint::from(*other)
    }
}
