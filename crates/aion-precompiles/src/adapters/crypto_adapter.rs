//! Wires the `aion-crypto` collaborator into the `CryptoProvider` port.

use crate::ports::outbound::CryptoProvider;

/// The production `CryptoProvider`: ed25519 verification and the
/// domain-separated hash, both delegated to `aion-crypto`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ed25519CryptoProvider;

impl CryptoProvider for Ed25519CryptoProvider {
    fn ed25519_verify(&self, public_key: &[u8; 32], message: &[u8], signature: &[u8; 64]) -> bool {
        aion_crypto::verify_raw(public_key, message, signature)
    }

    fn hash32(&self, data: &[u8]) -> [u8; 32] {
        aion_crypto::hash32(data)
    }
}
