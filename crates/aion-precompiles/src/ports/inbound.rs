//! Driving port: the single entry point the VM calls into a precompiled
//! contract through, plus the result shape every call returns.

use crate::domain::value_objects::Address;
use crate::ports::outbound::{CryptoProvider, WordStore};

/// Outcome of a precompiled invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    /// The operation completed and its effects were flushed.
    Success,
    /// Malformed input or a violated semantic rule.
    Failure,
    /// `nrgLimit` was below the fixed per-call cost.
    OutOfNrg,
    /// `nrgLimit` exceeded the VM-supplied cap.
    InvalidNrgLimit,
    /// The caller or wallet lacked the funds to cover the transfer.
    InsufficientBalance,
}

/// The fixed return shape of every precompiled invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecompiledResult {
    /// The outcome.
    pub code: ResultCode,
    /// Energy the caller is credited back.
    pub energy_remaining: u64,
    /// Opaque payload (e.g. a derived wallet address on a successful create).
    pub return_data: Vec<u8>,
}

impl PrecompiledResult {
    /// Builds a `SUCCESS` result.
    #[must_use]
    pub fn success(energy_remaining: u64, return_data: Vec<u8>) -> Self {
        Self {
            code: ResultCode::Success,
            energy_remaining,
            return_data,
        }
    }

    /// Builds a `FAILURE` result. All energy is forfeit.
    #[must_use]
    pub fn failure() -> Self {
        Self {
            code: ResultCode::Failure,
            energy_remaining: 0,
            return_data: Vec::new(),
        }
    }

    /// Builds an `OUT_OF_NRG` result.
    #[must_use]
    pub fn out_of_nrg() -> Self {
        Self {
            code: ResultCode::OutOfNrg,
            energy_remaining: 0,
            return_data: Vec::new(),
        }
    }

    /// Builds an `INVALID_NRG_LIMIT` result. The caller keeps the energy
    /// it offered, since the call never ran.
    #[must_use]
    pub fn invalid_nrg_limit(nrg_limit: u64) -> Self {
        Self {
            code: ResultCode::InvalidNrgLimit,
            energy_remaining: nrg_limit,
            return_data: Vec::new(),
        }
    }

    /// Builds an `INSUFFICIENT_BALANCE` result.
    #[must_use]
    pub fn insufficient_balance() -> Self {
        Self {
            code: ResultCode::InsufficientBalance,
            energy_remaining: 0,
            return_data: Vec::new(),
        }
    }

    /// True for `SUCCESS`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == ResultCode::Success
    }
}

/// A precompiled contract family's single entry point.
///
/// Synchronous and side-effect-free on `store` unless the result is
/// `SUCCESS` and the implementation has called [`WordStore::flush`]
/// internally before returning.
pub trait PrecompiledContract {
    /// Runs the contract.
    fn execute(
        &self,
        store: &mut dyn WordStore,
        crypto: &dyn CryptoProvider,
        caller: Address,
        input: &[u8],
        nrg_limit: u64,
    ) -> PrecompiledResult;
}
