//! Key material for Bee nodes
//!
//! This crate provides:
//! - secp256k1 wallets with Ethereum-style (EIP-55) addresses
//! - Web3 Secret Storage (version 3) keystores, the `swarm.key` format a Bee
//!   node unlocks with its configured password
//! - Secret wrappers that zeroize on drop

pub mod error;
pub mod keystore;
pub mod secure;
pub mod wallet;

pub use error::WalletError;
pub use keystore::{Keystore, KeystoreBuilder, KeystoreError, ScryptParams};
pub use secure::{ExposeSecret, SecretBytes};
pub use wallet::Wallet;

pub use alloy_primitives::Address;
