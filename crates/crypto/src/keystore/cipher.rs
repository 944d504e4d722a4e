//! AES-128-CTR encryption of the private key
//!
//! The cipher key is the first 16 bytes of the scrypt output. CTR mode keeps
//! the ciphertext the same length as the 32-byte secret.

use aes::Aes128;
use cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::error::{KeystoreError, KeystoreResult};
use crate::secure::{secret_bytes, SecretBytes};

/// IV length for AES-128-CTR
pub const IV_LENGTH: usize = 16;

/// AES-128 key length
pub const AES_KEY_LENGTH: usize = 16;

/// Identifier written to the `cipher` field
pub const CIPHER_AES_128_CTR: &str = "aes-128-ctr";

type Aes128Ctr = Ctr128BE<Aes128>;

/// The `cipherparams` object of a version 3 keystore
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CipherParams {
    /// Initialization vector as hex string
    pub iv: String,
}

impl CipherParams {
    pub fn new(iv: &[u8]) -> Self {
        Self { iv: hex::encode(iv) }
    }

    /// Decode and length-check the IV
    pub fn iv(&self) -> KeystoreResult<[u8; IV_LENGTH]> {
        let bytes = hex::decode(&self.iv)
            .map_err(|e| KeystoreError::InvalidCipherParams(format!("invalid IV hex: {}", e)))?;
        bytes.as_slice().try_into().map_err(|_| {
            KeystoreError::InvalidCipherParams(format!(
                "IV must be {} bytes, got {}",
                IV_LENGTH,
                bytes.len()
            ))
        })
    }
}

/// Apply the AES-128-CTR keystream.
///
/// Encryption and decryption are the same operation in CTR mode.
fn apply_keystream(data: &mut [u8], derived_key: &[u8], iv: &[u8]) -> KeystoreResult<()> {
    if derived_key.len() < AES_KEY_LENGTH {
        return Err(KeystoreError::InvalidCipherParams(format!(
            "key must be at least {} bytes, got {}",
            AES_KEY_LENGTH,
            derived_key.len()
        )));
    }
    let iv: [u8; IV_LENGTH] = iv.try_into().map_err(|_| {
        KeystoreError::InvalidCipherParams(format!(
            "IV must be {} bytes, got {}",
            IV_LENGTH,
            iv.len()
        ))
    })?;
    let mut key = [0u8; AES_KEY_LENGTH];
    key.copy_from_slice(&derived_key[..AES_KEY_LENGTH]);

    let mut cipher = Aes128Ctr::new(&key.into(), &iv.into());
    cipher.apply_keystream(data);
    Ok(())
}

/// Encrypt a secret with the first half of the derived key
pub fn encrypt_secret(secret: &[u8], derived_key: &[u8], iv: &[u8]) -> KeystoreResult<Vec<u8>> {
    let mut ciphertext = secret.to_vec();
    apply_keystream(&mut ciphertext, derived_key, iv)?;
    Ok(ciphertext)
}

/// Decrypt a ciphertext with the first half of the derived key
pub fn decrypt_secret(
    ciphertext: &[u8],
    derived_key: &[u8],
    iv: &[u8],
) -> KeystoreResult<SecretBytes> {
    let mut plaintext = ciphertext.to_vec();
    apply_keystream(&mut plaintext, derived_key, iv)?;
    Ok(secret_bytes(plaintext))
}

/// Generate a random IV
pub fn generate_iv() -> [u8; IV_LENGTH] {
    let mut iv = [0u8; IV_LENGTH];
    rand::thread_rng().fill_bytes(&mut iv);
    iv
}
