//! # MSC — Multi-Signature Contract engine
//!
//! A stateless handler: every byte of wallet state lives in `WordStore`.
//! `execute` parses the tagged input frame and dispatches to
//! [`create_wallet`](MscEngine::create_wallet) or
//! [`send_transaction`](MscEngine::send_transaction).

mod create_wallet;
mod send_transaction;

use tracing::debug;

use crate::domain::value_objects::Word;
use crate::energy::{check_preconditions, COST, TX_NRG_MAX_DEFAULT};
use crate::ports::inbound::{PrecompiledContract, PrecompiledResult};
use crate::ports::outbound::{CryptoProvider, WordStore};
use crate::domain::value_objects::Address;

/// Minimum number of owners a wallet may have.
pub use crate::domain::invariants::MIN_OWNERS;
/// Maximum number of owners a wallet may have.
pub use crate::domain::invariants::MAX_OWNERS;
/// Minimum signing threshold.
pub use crate::domain::invariants::MIN_THRESH;

const TAG_CREATE_WALLET: u8 = 0x00;
const TAG_SEND_TRANSACTION: u8 = 0x01;

/// Storage key constructors for the MSC single-word layout (§3.1).
pub(crate) mod keys {
    use crate::domain::value_objects::Word;

    pub fn owner_low(i: usize) -> Word {
        let mut bytes = [0u8; 16];
        bytes[0] = i as u8;
        Word::new(bytes)
    }

    pub fn owner_high(i: usize) -> Word {
        let mut bytes = [0u8; 16];
        bytes[0] = 0x40 | (i as u8);
        Word::new(bytes)
    }

    pub fn meta() -> Word {
        let mut bytes = [0u8; 16];
        bytes[0] = 0x80;
        Word::new(bytes)
    }
}

/// Decoded `0x80` meta record: signing threshold and owner count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WalletMeta {
    pub threshold: u64,
    pub owner_count: u64,
}

impl WalletMeta {
    fn decode(word: Word) -> Self {
        let bytes = word.as_bytes();
        let mut threshold_bytes = [0u8; 8];
        threshold_bytes.copy_from_slice(&bytes[0..8]);
        let mut count_bytes = [0u8; 8];
        count_bytes.copy_from_slice(&bytes[8..16]);
        Self {
            threshold: u64::from_be_bytes(threshold_bytes),
            owner_count: u64::from_be_bytes(count_bytes),
        }
    }

    fn encode(self) -> Word {
        let mut bytes = [0u8; 16];
        bytes[0..8].copy_from_slice(&self.threshold.to_be_bytes());
        bytes[8..16].copy_from_slice(&self.owner_count.to_be_bytes());
        Word::new(bytes)
    }
}

pub(crate) fn read_meta(store: &dyn WordStore, wallet: Address) -> Option<WalletMeta> {
    store.get_word(wallet, keys::meta()).map(WalletMeta::decode)
}

pub(crate) fn read_owners(store: &dyn WordStore, wallet: Address, count: u64) -> Vec<Address> {
    (0..count as usize)
        .map(|i| {
            let low = store.get_word(wallet, keys::owner_low(i)).unwrap_or(Word::ZERO);
            let high = store.get_word(wallet, keys::owner_high(i)).unwrap_or(Word::ZERO);
            let mut bytes = [0u8; 32];
            bytes[0..16].copy_from_slice(low.as_bytes());
            bytes[16..32].copy_from_slice(high.as_bytes());
            Address::new(bytes)
        })
        .collect()
}

/// The MSC precompile.
pub struct MscEngine {
    tx_nrg_max: u64,
}

impl Default for MscEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MscEngine {
    /// Builds an engine using the default VM energy cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tx_nrg_max: TX_NRG_MAX_DEFAULT,
        }
    }

    /// Builds an engine using a VM-supplied energy cap.
    #[must_use]
    pub fn with_tx_nrg_max(tx_nrg_max: u64) -> Self {
        Self { tx_nrg_max }
    }
}

impl PrecompiledContract for MscEngine {
    fn execute(
        &self,
        store: &mut dyn WordStore,
        crypto: &dyn CryptoProvider,
        caller: Address,
        input: &[u8],
        nrg_limit: u64,
    ) -> PrecompiledResult {
        debug!(?caller, nrg_limit, "msc::execute");

        if let Err(result) = check_preconditions(nrg_limit, self.tx_nrg_max) {
            return result;
        }

        let Some((&tag, payload)) = input.split_first() else {
            return PrecompiledResult::failure();
        };

        match tag {
            TAG_CREATE_WALLET => self.create_wallet(store, crypto, caller, payload, nrg_limit),
            TAG_SEND_TRANSACTION => {
                self.send_transaction(store, crypto, caller, payload, nrg_limit)
            }
            _ => PrecompiledResult::failure(),
        }
    }
}
