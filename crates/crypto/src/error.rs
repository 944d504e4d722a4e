//! Wallet error types

use thiserror::Error;

/// Errors raised while building a wallet from raw key material
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Bytes are not a valid secp256k1 scalar (zero or above the curve order)
    #[error("invalid secret key bytes")]
    InvalidSecretKey,

    /// Secret has the wrong length
    #[error("invalid secret key length: expected 32, got {0}")]
    InvalidSecretLength(usize),
}
