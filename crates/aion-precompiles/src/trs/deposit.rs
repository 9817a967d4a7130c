//! The TRS `use` (deposit) handler — §4.3.

use tracing::warn;

use crate::domain::value_objects::{Address, Scalar};
use crate::energy::{check_preconditions, COST, TX_NRG_MAX_DEFAULT};
use crate::ports::inbound::{PrecompiledContract, PrecompiledResult};
use crate::ports::outbound::{CryptoProvider, WordStore};

use super::TrsCore;

const CONTRACT_WIDTH: usize = 32;
const AMOUNT_WIDTH: usize = 128;
const PAYLOAD_WIDTH: usize = 1 + CONTRACT_WIDTH + AMOUNT_WIDTH;

/// Deposits `amount` from the caller's balance into a TRS contract.
pub struct TrsUseHandler {
    tx_nrg_max: u64,
}

impl Default for TrsUseHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl TrsUseHandler {
    /// Builds a handler using the default VM energy cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tx_nrg_max: TX_NRG_MAX_DEFAULT,
        }
    }

    /// Builds a handler using a VM-supplied energy cap.
    #[must_use]
    pub fn with_tx_nrg_max(tx_nrg_max: u64) -> Self {
        Self { tx_nrg_max }
    }
}

impl PrecompiledContract for TrsUseHandler {
    fn execute(
        &self,
        store: &mut dyn WordStore,
        _crypto: &dyn CryptoProvider,
        caller: Address,
        input: &[u8],
        nrg_limit: u64,
    ) -> PrecompiledResult {
        if let Err(result) = check_preconditions(nrg_limit, self.tx_nrg_max) {
            return result;
        }
        if input.len() != PAYLOAD_WIDTH {
            warn!(len = input.len(), "trs deposit: wrong payload length");
            return PrecompiledResult::failure();
        }

        let Some(contract) = Address::from_slice(&input[1..1 + CONTRACT_WIDTH]) else {
            return PrecompiledResult::failure();
        };
        let amount = Scalar::from_bytes_be_unsigned(&input[1 + CONTRACT_WIDTH..PAYLOAD_WIDTH]);

        let Some(specs) = TrsCore::get_specs(store, contract) else {
            warn!("trs deposit: no such contract");
            return PrecompiledResult::failure();
        };
        let owner = TrsCore::get_owner(store, contract);
        if owner != Some(caller) && !specs.is_direct_deposit {
            warn!("trs deposit: caller is neither the owner nor direct deposit is enabled");
            return PrecompiledResult::failure();
        }
        if specs.is_locked || specs.is_live {
            warn!("trs deposit: contract is no longer accepting deposits");
            return PrecompiledResult::failure();
        }

        if amount.is_zero() {
            store.flush();
            return PrecompiledResult::success(nrg_limit - COST, Vec::new());
        }

        let caller_balance = store.get_balance(caller);
        if caller_balance < amount {
            return PrecompiledResult::insufficient_balance();
        }

        let was_enrolled = TrsCore::is_enrolled(store, contract, caller);
        let new_deposit_balance = TrsCore::get_deposit_balance(store, contract, caller).checked_add(&amount);
        if !TrsCore::set_deposit_balance(store, contract, caller, &new_deposit_balance) {
            warn!("trs deposit: balance exceeds the row limit");
            return PrecompiledResult::failure();
        }
        if !was_enrolled {
            TrsCore::insert_at_head(store, contract, caller);
        }

        let new_total = TrsCore::get_total_balance(store, contract).checked_add(&amount);
        TrsCore::set_total_balance(store, contract, &new_total);

        let deducted = store.sub_balance(caller, &amount);
        debug_assert!(deducted, "balance was checked above");
        store.add_balance(contract, &amount);
        store.flush();

        PrecompiledResult::success(nrg_limit - COST, Vec::new())
    }
}
