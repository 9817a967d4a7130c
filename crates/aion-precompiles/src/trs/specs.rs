//! `getSpecs` / `setSpecs` / `getOwner` / `setOwner` / `setLock` / `setLive`,
//! plus the owner-gated `lock`/`activate` lifecycle helpers an embedder
//! needs even though the distilled operation set only specifies `deposit`.

use crate::domain::entities::SpecsRecord;
use crate::domain::value_objects::Address;
use crate::errors::TrsError;
use crate::ports::outbound::WordStore;

use super::{is_trs_contract, keys, TrsCore};

impl TrsCore {
    /// Returns `None` if `contract` is not a TRS contract or has no specs.
    #[must_use]
    pub fn get_specs(store: &dyn WordStore, contract: Address) -> Option<SpecsRecord> {
        if !is_trs_contract(contract) {
            return None;
        }
        store.get_word(contract, keys::specs()).map(SpecsRecord::decode)
    }

    /// Single-shot write: does nothing if a specs record already exists.
    /// `percent` is truncated to its low 9 bytes by `SpecsRecord::encode`.
    pub fn set_specs(
        store: &mut dyn WordStore,
        contract: Address,
        is_test: bool,
        is_direct_deposit: bool,
        periods: u16,
        percent: u128,
        precision: u8,
    ) -> bool {
        if store.get_word(contract, keys::specs()).is_some() {
            return false;
        }
        let record = SpecsRecord {
            percent,
            is_test,
            is_direct_deposit,
            precision,
            periods,
            is_locked: false,
            is_live: false,
        };
        store.put_word(contract, keys::specs(), record.encode());
        true
    }

    /// The contract's owner, if one has been set.
    #[must_use]
    pub fn get_owner(store: &dyn WordStore, contract: Address) -> Option<Address> {
        store
            .get_double_word(contract, keys::owner())
            .and_then(|value| Address::from_slice(value.as_bytes()))
    }

    /// Single-shot write of `caller` as owner.
    pub fn set_owner(store: &mut dyn WordStore, contract: Address, caller: Address) -> bool {
        if store.get_double_word(contract, keys::owner()).is_some() {
            return false;
        }
        store.put_double_word(
            contract,
            keys::owner(),
            crate::domain::value_objects::DoubleWord::new(*caller.as_bytes()),
        );
        true
    }

    /// Sets the `isLocked` flag on an existing specs record.
    pub fn set_lock(store: &mut dyn WordStore, contract: Address) -> bool {
        let Some(mut record) = Self::get_specs(store, contract) else {
            return false;
        };
        record.is_locked = true;
        store.put_word(contract, keys::specs(), record.encode());
        true
    }

    /// Sets the `isLive` flag on an existing specs record.
    pub fn set_live(store: &mut dyn WordStore, contract: Address) -> bool {
        let Some(mut record) = Self::get_specs(store, contract) else {
            return false;
        };
        record.is_live = true;
        store.put_word(contract, keys::specs(), record.encode());
        true
    }

    /// Owner-gated transition to `locked`. Not named by the distilled
    /// operation set — supplied so an embedder has a way to reach the
    /// `locked` stage the deposit handler checks for. Refuses if specs
    /// are absent, `caller` is not the owner, or the contract is already
    /// live.
    pub fn lock(store: &mut dyn WordStore, contract: Address, caller: Address) -> Result<(), TrsError> {
        let specs = Self::get_specs(store, contract).ok_or(TrsError::UnknownContract)?;
        if Self::get_owner(store, contract) != Some(caller) {
            return Err(TrsError::Unauthorized);
        }
        if specs.is_live {
            return Err(TrsError::InvalidLifecycleTransition("already live"));
        }
        Self::set_lock(store, contract);
        Ok(())
    }

    /// Owner-gated transition to `live`. Refuses unless the contract is
    /// already locked.
    pub fn activate(store: &mut dyn WordStore, contract: Address, caller: Address) -> Result<(), TrsError> {
        let specs = Self::get_specs(store, contract).ok_or(TrsError::UnknownContract)?;
        if Self::get_owner(store, contract) != Some(caller) {
            return Err(TrsError::Unauthorized);
        }
        if !specs.is_locked {
            return Err(TrsError::InvalidLifecycleTransition("not yet locked"));
        }
        Self::set_live(store, contract);
        Ok(())
    }
}
