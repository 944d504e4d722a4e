//! Web3 Secret Storage (version 3) keystores
//!
//! The format written by geth and ethers.js and read by Bee at startup:
//!
//! - scrypt password-based key derivation
//! - AES-128-CTR encryption of the 32-byte private key
//! - keccak256 MAC over the second half of the derived key and the ciphertext
//!
//! # Example
//!
//! ```rust,ignore
//! use beekit_crypto::{Keystore, Wallet};
//!
//! let wallet = Wallet::random();
//! let keystore = Keystore::encrypt(&wallet, "password")?;
//! keystore.save("./keys/swarm.key")?;
//!
//! let loaded = Keystore::load("./keys/swarm.key")?;
//! assert_eq!(loaded.decrypt_wallet("password")?.address(), wallet.address());
//! ```

mod cipher;
mod encrypted;
mod error;
mod kdf;
mod mac;

pub use cipher::{decrypt_secret, encrypt_secret, CipherParams};
pub use encrypted::{CryptoSection, Keystore, KeystoreBuilder, KEYSTORE_VERSION};
pub use error::{KeystoreError, KeystoreResult};
pub use kdf::{scrypt_derive_key, ScryptParams};
pub use mac::{compute_mac, verify_mac};
