//! # TRS — Token Release Schedule persistence core
//!
//! The byte-layout library shared by every TRS operation handler.
//! [`TrsCore`] is a namespace of associated functions rather than a
//! stateful object — all state lives in the `WordStore` passed to each
//! call, matching the "pass the collaborator in by reference" design
//! note. A thin `use` (deposit) handler is layered on top in
//! [`deposit`].

mod balance;
mod deposit;
mod list;
pub mod keys;
mod specs;

pub use deposit::TrsUseHandler;

use crate::domain::value_objects::Address;
use crate::ports::outbound::WordStore;

/// Namespace for the TRS persistence operations (§4.2).
pub struct TrsCore;

impl TrsCore {
    /// True iff `contract` carries the TRS prefix and has a specs record.
    #[must_use]
    pub fn exists(store: &dyn WordStore, contract: Address) -> bool {
        Self::get_specs(store, contract).is_some()
    }
}

pub(crate) fn is_trs_contract(contract: Address) -> bool {
    contract.prefix() == crate::domain::value_objects::PREFIX_TRS
}
