//! Send-transaction (tag `0x01`) — §4.1.2.

use tracing::warn;

use crate::domain::invariants::all_distinct;
use crate::domain::value_objects::{Address, Scalar, PREFIX_EOA};
use crate::energy::COST;
use crate::ports::inbound::PrecompiledResult;
use crate::ports::outbound::{CryptoProvider, WordStore};

use super::{read_meta, read_owners, MscEngine, MAX_OWNERS};

const WALLET_WIDTH: usize = 32;
const SIGNATURE_FRAME_WIDTH: usize = 96;
const AMOUNT_WIDTH: usize = 128;
const NRG_PRICE_WIDTH: usize = 8;
const TO_WIDTH: usize = 32;
const FIXED_WIDTH: usize = WALLET_WIDTH + AMOUNT_WIDTH + NRG_PRICE_WIDTH + TO_WIDTH;

impl MscEngine {
    pub(super) fn send_transaction(
        &self,
        store: &mut dyn WordStore,
        crypto: &dyn CryptoProvider,
        caller: Address,
        payload: &[u8],
        nrg_limit: u64,
    ) -> PrecompiledResult {
        let Some(remaining) = payload.len().checked_sub(FIXED_WIDTH) else {
            warn!("msc send_transaction: payload shorter than the fixed fields");
            return PrecompiledResult::failure();
        };
        if remaining % SIGNATURE_FRAME_WIDTH != 0 {
            warn!("msc send_transaction: signature block not frame-aligned");
            return PrecompiledResult::failure();
        }
        let signer_count = remaining / SIGNATURE_FRAME_WIDTH;
        if !(1..=MAX_OWNERS).contains(&signer_count) {
            warn!(signer_count, "msc send_transaction: signer count out of range");
            return PrecompiledResult::failure();
        }

        let wallet = match Address::from_slice(&payload[0..WALLET_WIDTH]) {
            Some(addr) => addr,
            None => return PrecompiledResult::failure(),
        };

        let sig_block_start = WALLET_WIDTH;
        let sig_block_end = sig_block_start + signer_count * SIGNATURE_FRAME_WIDTH;
        let amount_start = sig_block_end;
        let amount_end = amount_start + AMOUNT_WIDTH;
        let nrg_price_start = amount_end;
        let nrg_price_end = nrg_price_start + NRG_PRICE_WIDTH;
        let to_start = nrg_price_end;
        let to_end = to_start + TO_WIDTH;

        let Some(meta) = read_meta(store, wallet) else {
            warn!("msc send_transaction: no such wallet");
            return PrecompiledResult::failure();
        };
        if !wallet.is_eoa() {
            warn!("msc send_transaction: wallet address carries the wrong prefix");
            return PrecompiledResult::failure();
        }

        let to = match Address::from_slice(&payload[to_start..to_end]) {
            Some(addr) => addr,
            None => return PrecompiledResult::failure(),
        };

        let nonce = store.get_nonce(wallet);
        let amount = Scalar::from_bytes_be_unsigned(&payload[amount_start..amount_end]);
        let nrg_price = &payload[nrg_price_start..nrg_price_end];

        let mut message = Vec::new();
        message.extend_from_slice(&Scalar::from_u64(nonce).encode_signed_minimal());
        message.extend_from_slice(to.as_bytes());
        message.extend_from_slice(&amount.encode_signed_minimal());
        message.extend_from_slice(&nrg_limit.to_be_bytes());
        message.extend_from_slice(nrg_price);

        let owners = read_owners(store, wallet, meta.owner_count);
        if !owners.contains(&caller) {
            warn!("msc send_transaction: caller is not an owner");
            return PrecompiledResult::failure();
        }

        let mut signers = Vec::with_capacity(signer_count);
        for i in 0..signer_count {
            let frame_start = sig_block_start + i * SIGNATURE_FRAME_WIDTH;
            let frame = &payload[frame_start..frame_start + SIGNATURE_FRAME_WIDTH];
            let Some((public_key, signature)) = aion_crypto::split_signature_frame(frame) else {
                return PrecompiledResult::failure();
            };
            if !crypto.ed25519_verify(&public_key, &message, &signature) {
                warn!(signer = i, "msc send_transaction: signature failed verification");
                return PrecompiledResult::failure();
            }
            let mut signer_bytes = public_key;
            signer_bytes[0] = PREFIX_EOA;
            signers.push(Address::new(signer_bytes));
        }

        if !all_distinct(&signers) {
            warn!("msc send_transaction: duplicate signer");
            return PrecompiledResult::failure();
        }
        if !signers.iter().all(|s| owners.contains(s)) {
            warn!("msc send_transaction: a signer is not an owner");
            return PrecompiledResult::failure();
        }
        if (signers.len() as u64) < meta.threshold {
            warn!("msc send_transaction: fewer signatures than the threshold");
            return PrecompiledResult::failure();
        }
        if signers.len() as u64 > meta.owner_count {
            warn!("msc send_transaction: more signers than owners");
            return PrecompiledResult::failure();
        }

        let wallet_balance = store.get_balance(wallet);
        if wallet_balance < amount {
            return PrecompiledResult::insufficient_balance();
        }

        let deducted = store.sub_balance(wallet, &amount);
        debug_assert!(deducted, "balance was checked above");
        store.add_balance(to, &amount);
        store.increment_nonce(wallet);
        store.flush();

        PrecompiledResult::success(nrg_limit - COST, Vec::new())
    }
}
