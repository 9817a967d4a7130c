//! Driven ports: the collaborators the precompiled engines read and write
//! through. Both are plain synchronous traits — there is no suspension
//! point anywhere in a precompile invocation (see the crate's concurrency
//! notes), so an `async_trait` boundary here would claim a yield point
//! that can never occur.

use crate::domain::value_objects::{Address, DoubleWord, Scalar, Word};

/// The word-addressed storage cache a precompile reads and writes.
///
/// Each `execute` call is handed a store already scoped to a write
/// cursor: writes made through `put_word`/`put_double_word`/the balance
/// and nonce mutators are buffered until [`WordStore::flush`] is called,
/// and are visible to subsequent reads on the same store within the same
/// call (read-your-writes). A handler that returns a non-`SUCCESS`
/// result simply never calls `flush`; the caller is responsible for
/// discarding the scoped store afterwards, so no buffered write escapes.
pub trait WordStore {
    /// Reads a single 16-byte value at `(contract, key)`.
    fn get_word(&self, contract: Address, key: Word) -> Option<Word>;

    /// Writes a single 16-byte value at `(contract, key)`.
    fn put_word(&mut self, contract: Address, key: Word, value: Word);

    /// Reads a 32-byte value at `(contract, key)`.
    fn get_double_word(&self, contract: Address, key: DoubleWord) -> Option<DoubleWord>;

    /// Writes a 32-byte value at `(contract, key)`.
    fn put_double_word(&mut self, contract: Address, key: DoubleWord, value: DoubleWord);

    /// Current balance of `address`; zero for an account never touched.
    fn get_balance(&self, address: Address) -> Scalar;

    /// Adds `amount` to `address`'s balance.
    fn add_balance(&mut self, address: Address, amount: &Scalar);

    /// Subtracts `amount` from `address`'s balance. Returns `false`
    /// without mutating anything if the balance would go negative.
    fn sub_balance(&mut self, address: Address, amount: &Scalar) -> bool;

    /// Current nonce of `address`; zero for an account never touched.
    fn get_nonce(&self, address: Address) -> u64;

    /// Increments `address`'s nonce by one.
    fn increment_nonce(&mut self, address: Address);

    /// Ensures `address` has a zeroed balance/nonce entry if it did not
    /// already exist. A no-op for an account that already exists.
    fn create_account(&mut self, address: Address);

    /// Commits every buffered write made since the store was scoped.
    /// Called exactly once, on the `SUCCESS` path.
    fn flush(&mut self);

    /// Discards every buffered write made since the store was scoped,
    /// without committing. Exposed as a first-class capability (rather
    /// than "just drop the store") so tests can assert that a failed
    /// invocation leaves committed state untouched even when the same
    /// store instance is reused across calls.
    fn rollback(&mut self);
}

/// Ed25519 verification and the domain-separated hash used for address
/// derivation.
pub trait CryptoProvider {
    /// Verifies a detached ed25519 signature.
    fn ed25519_verify(&self, public_key: &[u8; 32], message: &[u8], signature: &[u8; 64]) -> bool;

    /// The domain-separated 32-byte hash used to derive addresses.
    fn hash32(&self, data: &[u8]) -> [u8; 32];
}
