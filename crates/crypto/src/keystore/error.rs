//! Keystore error types

use thiserror::Error;

use crate::error::WalletError;

/// Errors that can occur during keystore operations
#[derive(Error, Debug)]
pub enum KeystoreError {
    /// Wrong password, or the ciphertext was altered (MAC mismatch)
    #[error("invalid password: MAC verification failed")]
    InvalidPassword,

    /// Unsupported keystore version
    #[error("unsupported keystore version: {0}")]
    UnsupportedVersion(u32),

    /// Unsupported KDF function
    #[error("unsupported KDF function: {0}")]
    UnsupportedKdf(String),

    /// Unsupported cipher function
    #[error("unsupported cipher function: {0}")]
    UnsupportedCipher(String),

    /// Invalid KDF parameters
    #[error("invalid KDF parameters: {0}")]
    InvalidKdfParams(String),

    /// Invalid cipher parameters
    #[error("invalid cipher parameters: {0}")]
    InvalidCipherParams(String),

    /// Key derivation failed
    #[error("key derivation failed: {0}")]
    KdfError(String),

    /// Invalid hex encoding
    #[error("invalid hex encoding: {0}")]
    HexError(String),

    /// Decrypted key does not belong to the address recorded in the keystore
    #[error("keystore address mismatch: file says {expected}, key derives {actual}")]
    AddressMismatch { expected: String, actual: String },

    /// Decrypted bytes are not a usable secp256k1 key
    #[error("invalid key material: {0}")]
    Wallet(#[from] WalletError),

    /// Builder was missing a required input
    #[error("missing keystore input: {0}")]
    MissingInput(&'static str),

    /// Keystore file already exists
    #[error("keystore already exists at path: {0}")]
    AlreadyExists(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for keystore operations
pub type KeystoreResult<T> = Result<T, KeystoreError>;
