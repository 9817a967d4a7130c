//! In-memory [`WordStore`] used by tests and by any embedder that has not
//! yet wired up a real backing cache. Mirrors a real implementation's
//! deferred-write discipline with an explicit overlay: writes made
//! through `put_*`/the balance and nonce mutators land in `pending` and
//! are only merged into `committed` on [`WordStore::flush`]. Reads check
//! `pending` first so a single invocation sees its own writes.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::value_objects::{Address, DoubleWord, Scalar, Word};
use crate::ports::outbound::WordStore;

#[derive(Default)]
struct Overlay {
    words: HashMap<(Address, Word), Word>,
    double_words: HashMap<(Address, DoubleWord), DoubleWord>,
    balances: HashMap<Address, Scalar>,
    nonces: HashMap<Address, u64>,
    touched_accounts: Vec<Address>,
}

/// An in-memory, interior-mutable `WordStore`.
///
/// Interior mutability (`RefCell`) matches the shape precompiled engines
/// expect: `WordStore`'s read methods take `&self`, not `&mut self`.
pub struct InMemoryWordStore {
    committed_words: RefCell<HashMap<(Address, Word), Word>>,
    committed_double_words: RefCell<HashMap<(Address, DoubleWord), DoubleWord>>,
    committed_balances: RefCell<HashMap<Address, Scalar>>,
    committed_nonces: RefCell<HashMap<Address, u64>>,
    pending: RefCell<Overlay>,
}

impl Default for InMemoryWordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryWordStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            committed_words: RefCell::new(HashMap::new()),
            committed_double_words: RefCell::new(HashMap::new()),
            committed_balances: RefCell::new(HashMap::new()),
            committed_nonces: RefCell::new(HashMap::new()),
            pending: RefCell::new(Overlay::default()),
        }
    }

    /// Seeds a committed balance directly, bypassing the overlay. Used
    /// by tests to fund an account before invoking a precompile.
    pub fn seed_balance(&self, address: Address, balance: Scalar) {
        self.committed_balances.borrow_mut().insert(address, balance);
    }

    /// True if `flush` has never committed a pending write for `key`
    /// since the store was created — used by tests asserting that a
    /// failed call left committed state untouched.
    #[must_use]
    pub fn has_pending_writes(&self) -> bool {
        let pending = self.pending.borrow();
        !pending.words.is_empty()
            || !pending.double_words.is_empty()
            || !pending.balances.is_empty()
            || !pending.nonces.is_empty()
    }
}

impl WordStore for InMemoryWordStore {
    fn get_word(&self, contract: Address, key: Word) -> Option<Word> {
        if let Some(value) = self.pending.borrow().words.get(&(contract, key)) {
            return Some(*value);
        }
        self.committed_words.borrow().get(&(contract, key)).copied()
    }

    fn put_word(&mut self, contract: Address, key: Word, value: Word) {
        self.pending.borrow_mut().words.insert((contract, key), value);
    }

    fn get_double_word(&self, contract: Address, key: DoubleWord) -> Option<DoubleWord> {
        if let Some(value) = self.pending.borrow().double_words.get(&(contract, key)) {
            return Some(*value);
        }
        self.committed_double_words
            .borrow()
            .get(&(contract, key))
            .copied()
    }

    fn put_double_word(&mut self, contract: Address, key: DoubleWord, value: DoubleWord) {
        self.pending
            .borrow_mut()
            .double_words
            .insert((contract, key), value);
    }

    fn get_balance(&self, address: Address) -> Scalar {
        if let Some(balance) = self.pending.borrow().balances.get(&address) {
            return balance.clone();
        }
        self.committed_balances
            .borrow()
            .get(&address)
            .cloned()
            .unwrap_or_else(Scalar::zero)
    }

    fn add_balance(&mut self, address: Address, amount: &Scalar) {
        let current = self.get_balance(address);
        let mut pending = self.pending.borrow_mut();
        pending
            .balances
            .insert(address, current.checked_add(amount));
        pending.touched_accounts.push(address);
    }

    fn sub_balance(&mut self, address: Address, amount: &Scalar) -> bool {
        let current = self.get_balance(address);
        let Some(updated) = current.checked_sub(amount) else {
            return false;
        };
        let mut pending = self.pending.borrow_mut();
        pending.balances.insert(address, updated);
        pending.touched_accounts.push(address);
        true
    }

    fn get_nonce(&self, address: Address) -> u64 {
        if let Some(nonce) = self.pending.borrow().nonces.get(&address) {
            return *nonce;
        }
        self.committed_nonces.borrow().get(&address).copied().unwrap_or(0)
    }

    fn increment_nonce(&mut self, address: Address) {
        let next = self.get_nonce(address) + 1;
        self.pending.borrow_mut().nonces.insert(address, next);
    }

    fn create_account(&mut self, address: Address) {
        if self.get_balance(address) == 0u64 && self.get_nonce(address) == 0 {
            let mut pending = self.pending.borrow_mut();
            pending.balances.entry(address).or_insert_with(Scalar::zero);
            pending.nonces.entry(address).or_insert(0);
        }
    }

    fn flush(&mut self) {
        let mut pending = self.pending.borrow_mut();
        self.committed_words.borrow_mut().extend(pending.words.drain());
        self.committed_double_words
            .borrow_mut()
            .extend(pending.double_words.drain());
        self.committed_balances
            .borrow_mut()
            .extend(pending.balances.drain());
        self.committed_nonces.borrow_mut().extend(pending.nonces.drain());
        pending.touched_accounts.clear();
    }

    fn rollback(&mut self) {
        *self.pending.borrow_mut() = Overlay::default();
    }
}
