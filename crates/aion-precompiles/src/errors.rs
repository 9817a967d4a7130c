//! # Error Types
//!
//! None of these cross the precompiled boundary — `execute` always
//! returns a `PrecompiledResult`. They exist so the engines can use `?`
//! internally instead of threading `PrecompiledResult` through every
//! private helper.

use thiserror::Error;

/// Recoverable MSC rule violations. Every variant maps to `FAILURE` or
/// `INSUFFICIENT_BALANCE`; none of these are logged above `warn`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MscError {
    /// The input frame's tag byte, or overall length, was not recognised.
    #[error("malformed input frame")]
    MalformedInput,

    /// Create-wallet validation rule 1..5 failed.
    #[error("wallet creation rejected: {0}")]
    InvalidCreation(&'static str),

    /// The wallet address named by the payload has no meta record.
    #[error("no such wallet")]
    UnknownWallet,

    /// Send-transaction validation rule failed.
    #[error("transaction rejected: {0}")]
    InvalidTransaction(&'static str),

    /// Validation passed but the wallet cannot cover the transfer.
    #[error("insufficient balance")]
    InsufficientBalance,
}

/// Recoverable TRS rule violations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrsError {
    /// The input frame did not match the handler's fixed length.
    #[error("malformed input frame")]
    MalformedInput,

    /// The named contract has no specs record.
    #[error("no such contract")]
    UnknownContract,

    /// Caller is neither the owner nor direct-deposit is enabled.
    #[error("deposit not authorised for this caller")]
    Unauthorized,

    /// The contract is locked or already live.
    #[error("contract not accepting deposits")]
    NotAcceptingDeposits,

    /// Caller lacks the funds to cover the deposit.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// A row-count or canonicalisation limit was exceeded.
    #[error("balance exceeds row limit")]
    RowLimitExceeded,

    /// `lock`/`activate` called out of order (activating before locking,
    /// or locking an already-live contract).
    #[error("lifecycle transition rejected: {0}")]
    InvalidLifecycleTransition(&'static str),
}

/// A breach of an invariant the validation layer is supposed to make
/// unreachable — e.g. a negative total balance reaching `setTotalBalance`,
/// or a storage value decoding to a row width that contradicts its own
/// metadata. Distinct from `FAILURE`: these are assertions, not
/// user-reachable outcomes, and existing only so storage corruption
/// fails loudly instead of silently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A `Scalar` expected to be non-negative arrived negative-equivalent
    /// (specifically: an underflow the caller should have pre-checked).
    #[error("negative balance invariant violated")]
    NegativeBalance,

    /// A stored word decoded to a width inconsistent with its own tag.
    #[error("storage value had unexpected width")]
    UnexpectedWidth,

    /// A depositor-list account expected to carry a previous-pointer had
    /// none.
    #[error("missing previous-pointer for existing account")]
    MissingPreviousPointer,
}

/// Errors a `WordStore` implementation may surface. The in-memory test
/// double never returns these; a real backing cache would use this for
/// I/O failures against its underlying database.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing cache is unavailable.
    #[error("word store unavailable")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msc_error_messages_are_stable() {
        assert_eq!(MscError::MalformedInput.to_string(), "malformed input frame");
        assert_eq!(MscError::UnknownWallet.to_string(), "no such wallet");
    }

    #[test]
    fn trs_error_messages_are_stable() {
        assert_eq!(TrsError::UnknownContract.to_string(), "no such contract");
        assert_eq!(
            TrsError::NotAcceptingDeposits.to_string(),
            "contract not accepting deposits"
        );
    }
}
