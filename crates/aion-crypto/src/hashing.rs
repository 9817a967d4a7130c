//! # Domain-Separated Hashing
//!
//! The 32-byte hash used to derive deterministic contract addresses
//! (e.g. the MSC wallet address, see `aion-precompiles::msc`).
//!
//! BLAKE3's derive-key mode gives us domain separation for free:
//! hashing the same bytes under a different context string can never
//! collide with hashing them under this one.

/// 32-byte hash output.
pub type Hash32 = [u8; 32];

/// Domain tag for MSC wallet address derivation.
///
/// Changing this string changes every wallet address ever derived;
/// it must never change once the network is live.
const MSC_WALLET_ADDRESS_CONTEXT: &str = "aion-precompiles/msc/wallet-address-v1";

/// Hashes `data` under the wallet-address domain tag.
///
/// This is the `hash32` operation named by the `CryptoProvider` collaborator
/// interface: a single-purpose, domain-separated hash, not a general-purpose
/// digest function.
#[must_use]
pub fn hash32(data: &[u8]) -> Hash32 {
    let mut hasher = blake3::Hasher::new_derive_key(MSC_WALLET_ADDRESS_CONTEXT);
    hasher.update(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(hasher.finalize().as_bytes());
    out
}
