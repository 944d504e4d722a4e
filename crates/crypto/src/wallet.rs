//! secp256k1 wallets with Ethereum-style addresses
//!
//! A Bee node's overlay identity is anchored to an Ethereum address:
//! `keccak256(uncompressed_pubkey[1..])[12..]`, displayed with the EIP-55
//! mixed-case checksum.

use alloy_primitives::{keccak256, Address};
use k256::{elliptic_curve::sec1::ToEncodedPoint, PublicKey, SecretKey};
use rand::{CryptoRng, RngCore};

use crate::error::WalletError;
use crate::secure::{secret_bytes, SecretBytes};

/// Length of a secp256k1 secret scalar in bytes
pub const SECRET_KEY_LENGTH: usize = 32;

/// A secp256k1 key pair and the address derived from it
#[derive(Clone)]
pub struct Wallet {
    secret_key: SecretKey,
    address: Address,
}

impl Wallet {
    /// Generate a wallet from the thread-local CSPRNG
    pub fn random() -> Self {
        Self::generate(&mut rand::thread_rng())
    }

    /// Generate a wallet from the given RNG
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self::from_secret_key(SecretKey::random(rng))
    }

    /// Restore a wallet from a raw 32-byte secret scalar
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self, WalletError> {
        if bytes.len() != SECRET_KEY_LENGTH {
            return Err(WalletError::InvalidSecretLength(bytes.len()));
        }
        SecretKey::from_slice(bytes)
            .map(Self::from_secret_key)
            .map_err(|_| WalletError::InvalidSecretKey)
    }

    fn from_secret_key(secret_key: SecretKey) -> Self {
        let address = address_of(&secret_key.public_key());
        Self {
            secret_key,
            address,
        }
    }

    /// The 20-byte Ethereum address
    pub fn address(&self) -> Address {
        self.address
    }

    /// Address as `0x`-prefixed EIP-55 checksummed hex
    pub fn checksum_address(&self) -> String {
        self.address.to_checksum(None)
    }

    /// Public key as uncompressed SEC1 bytes (65 bytes, `0x04` prefix)
    pub fn public_key_uncompressed(&self) -> [u8; 65] {
        let encoded = self.secret_key.public_key().to_encoded_point(false);
        let mut result = [0u8; 65];
        result.copy_from_slice(encoded.as_bytes());
        result
    }

    /// Copy of the secret scalar, zeroized when dropped
    pub fn secret_bytes(&self) -> SecretBytes {
        secret_bytes(self.secret_key.to_bytes().to_vec())
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.checksum_address())
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

fn address_of(public_key: &PublicKey) -> Address {
    let uncompressed = public_key.to_encoded_point(false);
    // Skip the 0x04 prefix byte
    let hash = keccak256(&uncompressed.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}
