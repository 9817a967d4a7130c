//! # Aion Precompiled Contracts
//!
//! The Multi-Signature Contract (MSC) engine and the Token Release
//! Schedule (TRS) persistence core, implemented as two `PrecompiledContract`
//! entry points over a byte-addressed `WordStore`.
//!
//! ## Layout
//!
//! - [`domain`] — fixed-width value objects, decoded storage records, and
//!   structural invariants. No I/O.
//! - [`ports`] — the driving port (`PrecompiledContract`, `PrecompiledResult`)
//!   and the driven ports (`WordStore`, `CryptoProvider`) an embedder
//!   implements against its own state backend and signature library.
//! - [`adapters`] — an in-memory `WordStore` test double and an
//!   `ed25519-dalek`-backed `CryptoProvider`.
//! - [`msc`] — wallet creation and multi-signature sends (§4.1).
//! - [`trs`] — the persistence core and the deposit handler (§4.2-4.3).
//! - [`errors`] — the internal error taxonomy; never crosses the
//!   `execute` boundary.
//! - [`energy`] — the fixed per-call cost and the `nrgLimit` preconditions
//!   shared by both engines.
//!
//! ## Usage
//!
//! ```
//! use aion_precompiles::adapters::{Ed25519CryptoProvider, InMemoryWordStore};
//! use aion_precompiles::msc::MscEngine;
//! use aion_precompiles::ports::inbound::PrecompiledContract;
//! use aion_precompiles::domain::value_objects::{Address, PREFIX_EOA};
//!
//! let engine = MscEngine::new();
//! let crypto = Ed25519CryptoProvider;
//! let mut store = InMemoryWordStore::new();
//! let caller = Address::from_prefix_and_body(PREFIX_EOA, [1u8; 31]);
//!
//! // A malformed frame is rejected without touching storage.
//! let result = engine.execute(&mut store, &crypto, caller, &[], 100_000);
//! assert!(!result.is_success());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod domain;
pub mod energy;
pub mod errors;
pub mod msc;
pub mod ports;
pub mod trs;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::value_objects::{Address, DoubleWord, Scalar, Word, PREFIX_EOA, PREFIX_TRS};
    pub use crate::errors::{EngineError, MscError, StoreError, TrsError};
    pub use crate::msc::MscEngine;
    pub use crate::ports::inbound::{PrecompiledContract, PrecompiledResult, ResultCode};
    pub use crate::ports::outbound::{CryptoProvider, WordStore};
    pub use crate::trs::{TrsCore, TrsUseHandler};
}
