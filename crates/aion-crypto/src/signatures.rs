//! Ed25519 keypairs for MSC owner signing.
//!
//! Every signature the precompiled contracts touch travels as raw bytes —
//! a 32-byte public key, a 64-byte signature, the 96-byte frame that
//! concatenates them (owner pubkey ‖ detached signature) — so this
//! module hands back `[u8; N]` arrays rather than wrapping them in their
//! own newtypes. [`verify_raw`] and [`split_signature_frame`] are the
//! two free functions the `CryptoProvider` port and the MSC message
//! codec call directly; [`Ed25519KeyPair`] exists for the side that
//! holds a secret key (test fixtures, wallet tooling), not for the
//! verification path.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::ZeroizeOnDrop;

/// A signing key and its derived verifying key.
///
/// `ZeroizeOnDrop` scrubs the seed when a keypair goes out of scope —
/// the only secret this crate ever holds onto past a single call.
#[derive(ZeroizeOnDrop)]
pub struct Ed25519KeyPair {
    signing_key: SigningKey,
}

impl Ed25519KeyPair {
    /// Generates a fresh keypair from the system RNG.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut rand::thread_rng()),
        }
    }

    /// Rebuilds a keypair from its 32-byte seed.
    #[must_use]
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// The 32-byte public key an owner registers on an MSC wallet.
    #[must_use]
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Signs `message`, producing a 64-byte detached signature.
    ///
    /// ed25519 derives its nonce from the message and the secret key
    /// rather than an RNG, so signing the same message twice with the
    /// same keypair always yields the same signature — callers relying
    /// on that (e.g. idempotent retry of an unsent transaction) are
    /// relying on documented behavior, not an accident.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }

    /// The 32-byte seed, for persisting a keypair across restarts.
    #[must_use]
    pub fn to_seed(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

/// Verifies a detached ed25519 signature against a raw 32-byte public key.
///
/// This is the `ed25519Verify` operation named by the `CryptoProvider`
/// collaborator interface. It never panics: a malformed public key or
/// signature simply verifies as `false`, matching the all-malformed-input-
/// fails-without-mutation discipline the precompiled contracts rely on.
#[must_use]
pub fn verify_raw(public_key: &[u8; 32], message: &[u8], signature: &[u8; 64]) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(public_key) else {
        return false;
    };
    let sig = ed25519_dalek::Signature::from_bytes(signature);
    verifying_key.verify(message, &sig).is_ok()
}

/// Splits a 96-byte MSC signature frame (32-byte public key ‖ 64-byte
/// signature) into its two components.
///
/// Returns `None` if `frame` is not exactly 96 bytes.
#[must_use]
pub fn split_signature_frame(frame: &[u8]) -> Option<([u8; 32], [u8; 64])> {
    if frame.len() != 96 {
        return None;
    }
    let mut public_key = [0u8; 32];
    let mut signature = [0u8; 64];
    public_key.copy_from_slice(&frame[..32]);
    signature.copy_from_slice(&frame[32..]);
    Some((public_key, signature))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_signature_verifies_against_its_own_public_key() {
        let owner = Ed25519KeyPair::generate();
        let message = b"nonce-to-amount-nrgprice frame";
        let signature = owner.sign(message);

        assert!(verify_raw(&owner.public_key_bytes(), message, &signature));
    }

    #[test]
    fn signature_does_not_verify_against_a_different_message() {
        let owner = Ed25519KeyPair::generate();
        let signature = owner.sign(b"original");

        assert!(!verify_raw(&owner.public_key_bytes(), b"tampered", &signature));
    }

    #[test]
    fn signature_does_not_verify_against_a_different_owner() {
        let owner = Ed25519KeyPair::generate();
        let impostor = Ed25519KeyPair::generate();
        let message = b"transfer 5 to bob";

        let signature = owner.sign(message);
        assert!(!verify_raw(&impostor.public_key_bytes(), message, &signature));
    }

    #[test]
    fn signing_is_deterministic_across_calls() {
        let owner = Ed25519KeyPair::from_seed([0xABu8; 32]);
        let message = b"deterministic retry";

        assert_eq!(owner.sign(message), owner.sign(message));
    }

    #[test]
    fn seed_round_trip_preserves_the_public_key() {
        let original = Ed25519KeyPair::generate();
        let restored = Ed25519KeyPair::from_seed(original.to_seed());

        assert_eq!(original.public_key_bytes(), restored.public_key_bytes());
    }

    #[test]
    fn verify_raw_rejects_a_garbage_public_key() {
        let garbage = [0xFFu8; 32];
        assert!(!verify_raw(&garbage, b"msg", &[0u8; 64]));
    }

    #[test]
    fn split_signature_frame_round_trips() {
        let owner = Ed25519KeyPair::generate();
        let signature = owner.sign(b"msg");

        let mut frame = Vec::with_capacity(96);
        frame.extend_from_slice(&owner.public_key_bytes());
        frame.extend_from_slice(&signature);

        let (public_key, recovered_signature) = split_signature_frame(&frame).unwrap();
        assert_eq!(public_key, owner.public_key_bytes());
        assert_eq!(recovered_signature, signature);
    }

    #[test]
    fn split_signature_frame_rejects_the_wrong_length() {
        assert!(split_signature_frame(&[0u8; 95]).is_none());
        assert!(split_signature_frame(&[0u8; 97]).is_none());
    }
}
