//! Create-wallet (tag `0x00`) — §4.1.1.

use tracing::warn;

use crate::domain::invariants::{all_distinct, no_owner_is_a_contract, threshold_in_range};
use crate::domain::value_objects::{Address, PREFIX_EOA};
use crate::ports::inbound::PrecompiledResult;
use crate::ports::outbound::{CryptoProvider, WordStore};

use crate::energy::COST;

use super::{keys, read_meta, MscEngine, WalletMeta, MAX_OWNERS, MIN_OWNERS};

impl MscEngine {
    pub(super) fn create_wallet(
        &self,
        store: &mut dyn WordStore,
        crypto: &dyn CryptoProvider,
        caller: Address,
        payload: &[u8],
        nrg_limit: u64,
    ) -> PrecompiledResult {
        const THRESHOLD_WIDTH: usize = 8;
        const ADDRESS_WIDTH: usize = 32;

        if payload.len() < THRESHOLD_WIDTH {
            warn!("msc create_wallet: payload shorter than threshold field");
            return PrecompiledResult::failure();
        }
        let body = &payload[THRESHOLD_WIDTH..];
        if body.len() % ADDRESS_WIDTH != 0 {
            warn!("msc create_wallet: owner list not address-aligned");
            return PrecompiledResult::failure();
        }
        let owner_count = body.len() / ADDRESS_WIDTH;
        if !(MIN_OWNERS..=MAX_OWNERS).contains(&owner_count) {
            warn!(owner_count, "msc create_wallet: owner count out of range");
            return PrecompiledResult::failure();
        }

        let mut threshold_bytes = [0u8; 8];
        threshold_bytes.copy_from_slice(&payload[0..THRESHOLD_WIDTH]);
        let threshold = u64::from_be_bytes(threshold_bytes);

        let owners: Vec<Address> = body
            .chunks_exact(ADDRESS_WIDTH)
            .map(Address::from_slice)
            .collect::<Option<Vec<_>>>()
            .expect("chunks_exact guarantees exact width");

        if !threshold_in_range(threshold, owner_count) {
            warn!(threshold, owner_count, "msc create_wallet: threshold out of range");
            return PrecompiledResult::failure();
        }
        if !all_distinct(&owners) {
            warn!("msc create_wallet: duplicate owner");
            return PrecompiledResult::failure();
        }
        if !no_owner_is_a_contract(&owners) {
            warn!("msc create_wallet: an owner carries the TRS prefix");
            return PrecompiledResult::failure();
        }
        if !owners.contains(&caller) {
            warn!("msc create_wallet: caller is not among the owners");
            return PrecompiledResult::failure();
        }
        if caller.prefix() != PREFIX_EOA {
            warn!("msc create_wallet: caller is itself a multi-sig wallet");
            return PrecompiledResult::failure();
        }

        let mut preimage = Vec::with_capacity(THRESHOLD_WIDTH + owners.len() * ADDRESS_WIDTH);
        preimage.extend_from_slice(&threshold_bytes);
        for owner in &owners {
            preimage.extend_from_slice(owner.as_bytes());
        }
        let mut derived = crypto.hash32(&preimage);
        derived[0] = PREFIX_EOA;
        let wallet = Address::new(derived);

        if read_meta(store, wallet).is_some() {
            warn!("msc create_wallet: wallet already exists");
            return PrecompiledResult::failure();
        }

        for (i, owner) in owners.iter().enumerate() {
            let bytes = owner.as_bytes();
            let mut low = [0u8; 16];
            low.copy_from_slice(&bytes[0..16]);
            let mut high = [0u8; 16];
            high.copy_from_slice(&bytes[16..32]);
            store.put_word(wallet, keys::owner_low(i), crate::domain::value_objects::Word::new(low));
            store.put_word(wallet, keys::owner_high(i), crate::domain::value_objects::Word::new(high));
        }
        store.put_word(
            wallet,
            keys::meta(),
            WalletMeta {
                threshold,
                owner_count: owner_count as u64,
            }
            .encode(),
        );
        store.create_account(wallet);
        store.flush();

        PrecompiledResult::success(nrg_limit - COST, wallet.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{Ed25519CryptoProvider, InMemoryWordStore};
    use crate::ports::inbound::PrecompiledContract;
    use aion_crypto::Ed25519KeyPair;

    fn owner_address(keypair: &Ed25519KeyPair) -> Address {
        let mut bytes = keypair.public_key_bytes();
        bytes[0] = PREFIX_EOA;
        Address::new(bytes)
    }

    fn frame(threshold: u64, owners: &[Address]) -> Vec<u8> {
        let mut out = vec![0x00u8];
        out.extend_from_slice(&threshold.to_be_bytes());
        for owner in owners {
            out.extend_from_slice(owner.as_bytes());
        }
        out
    }

    #[test]
    fn create_minimum_wallet_succeeds_and_is_deterministic() {
        let k1 = Ed25519KeyPair::generate();
        let k2 = Ed25519KeyPair::generate();
        let k3 = Ed25519KeyPair::generate();
        let owners = [owner_address(&k1), owner_address(&k2), owner_address(&k3)];
        let caller = owners[0];

        let engine = MscEngine::new();
        let crypto = Ed25519CryptoProvider;
        let mut store = InMemoryWordStore::new();

        let input = frame(2, &owners);
        let result = engine.execute(&mut store, &crypto, caller, &input, 100_000);

        assert!(result.is_success());
        assert_eq!(result.energy_remaining, 100_000 - crate::energy::COST);
        assert_eq!(result.return_data[0], PREFIX_EOA);

        let mut preimage = 2u64.to_be_bytes().to_vec();
        for owner in &owners {
            preimage.extend_from_slice(owner.as_bytes());
        }
        let mut expected = aion_crypto::hash32(&preimage);
        expected[0] = PREFIX_EOA;
        assert_eq!(result.return_data, expected);
    }

    #[test]
    fn second_create_with_identical_input_fails() {
        let k1 = Ed25519KeyPair::generate();
        let k2 = Ed25519KeyPair::generate();
        let owners = [owner_address(&k1), owner_address(&k2)];
        let caller = owners[0];

        let engine = MscEngine::new();
        let crypto = Ed25519CryptoProvider;
        let mut store = InMemoryWordStore::new();
        let input = frame(2, &owners);

        let first = engine.execute(&mut store, &crypto, caller, &input, 100_000);
        assert!(first.is_success());

        let second = engine.execute(&mut store, &crypto, caller, &input, 100_000);
        assert_eq!(second.code, crate::ports::inbound::ResultCode::Failure);
    }

    #[test]
    fn rejects_caller_not_among_owners() {
        let k1 = Ed25519KeyPair::generate();
        let k2 = Ed25519KeyPair::generate();
        let intruder = Ed25519KeyPair::generate();
        let owners = [owner_address(&k1), owner_address(&k2)];

        let engine = MscEngine::new();
        let crypto = Ed25519CryptoProvider;
        let mut store = InMemoryWordStore::new();
        let input = frame(2, &owners);

        let result = engine.execute(&mut store, &crypto, owner_address(&intruder), &input, 100_000);
        assert_eq!(result.code, crate::ports::inbound::ResultCode::Failure);
        assert!(!store.has_pending_writes());
    }

    #[test]
    fn rejects_duplicate_owners() {
        let k1 = Ed25519KeyPair::generate();
        let owner = owner_address(&k1);
        let owners = [owner, owner];

        let engine = MscEngine::new();
        let crypto = Ed25519CryptoProvider;
        let mut store = InMemoryWordStore::new();
        let input = frame(2, &owners);

        let result = engine.execute(&mut store, &crypto, owner, &input, 100_000);
        assert_eq!(result.code, crate::ports::inbound::ResultCode::Failure);
    }

    #[test]
    fn rejects_energy_below_cost() {
        let k1 = Ed25519KeyPair::generate();
        let k2 = Ed25519KeyPair::generate();
        let owners = [owner_address(&k1), owner_address(&k2)];

        let engine = MscEngine::new();
        let crypto = Ed25519CryptoProvider;
        let mut store = InMemoryWordStore::new();
        let input = frame(2, &owners);

        let result = engine.execute(&mut store, &crypto, owners[0], &input, 100);
        assert_eq!(result.code, crate::ports::inbound::ResultCode::OutOfNrg);
    }
}
