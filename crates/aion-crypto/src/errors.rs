//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Signature verification failed
    #[error("signature verification failed")]
    SignatureVerificationFailed,

    /// Invalid signature format (wrong length, malformed encoding)
    #[error("invalid signature format")]
    InvalidSignatureFormat,

    /// Invalid public key (not a valid curve point)
    #[error("invalid public key")]
    InvalidPublicKey,
}
