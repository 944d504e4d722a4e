//! scrypt key derivation
//!
//! Default cost parameters match what ethers.js writes for wallet keystores:
//! N = 131072 (2^17), r = 8, p = 1, 32-byte derived key.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::error::{KeystoreError, KeystoreResult};
use crate::secure::{secret_bytes, SecretBytes};

/// Default CPU/memory cost, as log2(N)
pub const SCRYPT_LOG_N: u8 = 17;
pub const SCRYPT_R: u32 = 8;
pub const SCRYPT_P: u32 = 1;
pub const SCRYPT_DKLEN: u32 = 32;

/// Salt length in bytes
pub const SALT_LENGTH: usize = 32;

/// Identifier written to the `kdf` field
pub const KDF_SCRYPT: &str = "scrypt";

/// The `kdfparams` object of a version 3 keystore
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScryptParams {
    /// Derived key length in bytes
    pub dklen: u32,
    /// CPU/memory cost (power of two)
    pub n: u32,
    /// Parallelization
    pub p: u32,
    /// Block size
    pub r: u32,
    /// Salt as hex string
    pub salt: String,
}

impl ScryptParams {
    /// Standard cost parameters with a fresh random salt
    pub fn generate() -> Self {
        Self::with_cost(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P)
    }

    /// Custom cost parameters with a fresh random salt
    pub fn with_cost(log_n: u8, r: u32, p: u32) -> Self {
        Self {
            dklen: SCRYPT_DKLEN,
            n: 1u32 << log_n,
            p,
            r,
            salt: hex::encode(generate_salt()),
        }
    }

    /// Check the parameters before spending CPU on them
    pub fn validate(&self) -> KeystoreResult<()> {
        if self.dklen < 32 {
            return Err(KeystoreError::InvalidKdfParams(
                "dklen must be at least 32".to_string(),
            ));
        }
        if self.n < 2 || !self.n.is_power_of_two() {
            return Err(KeystoreError::InvalidKdfParams(
                "n must be a power of 2 greater than 1".to_string(),
            ));
        }
        if self.r == 0 {
            return Err(KeystoreError::InvalidKdfParams(
                "r must be positive".to_string(),
            ));
        }
        if self.p == 0 {
            return Err(KeystoreError::InvalidKdfParams(
                "p must be positive".to_string(),
            ));
        }
        hex::decode(&self.salt)
            .map_err(|e| KeystoreError::InvalidKdfParams(format!("invalid salt hex: {}", e)))?;
        Ok(())
    }

    /// Derive the 32-byte key that feeds both the cipher and the MAC
    pub fn derive_key(&self, password: &str) -> KeystoreResult<SecretBytes> {
        self.validate()?;
        let salt = hex::decode(&self.salt).map_err(|e| KeystoreError::HexError(e.to_string()))?;
        scrypt_derive_key(
            password,
            &salt,
            self.n.trailing_zeros() as u8,
            self.r,
            self.p,
            self.dklen as usize,
        )
    }
}

/// Derive a key using scrypt
pub fn scrypt_derive_key(
    password: &str,
    salt: &[u8],
    log_n: u8,
    r: u32,
    p: u32,
    dklen: usize,
) -> KeystoreResult<SecretBytes> {
    let params = scrypt::Params::new(log_n, r, p, dklen)
        .map_err(|e| KeystoreError::InvalidKdfParams(e.to_string()))?;

    let mut output = vec![0u8; dklen];
    scrypt::scrypt(password.as_bytes(), salt, &params, &mut output)
        .map_err(|e| KeystoreError::KdfError(e.to_string()))?;

    Ok(secret_bytes(output))
}

/// Generate a random salt
pub fn generate_salt() -> [u8; SALT_LENGTH] {
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn cheap(salt: &str) -> ScryptParams {
        ScryptParams {
            dklen: 32,
            n: 1024,
            p: 1,
            r: 8,
            salt: salt.to_string(),
        }
    }

    #[test]
    fn test_derive_is_deterministic() {
        let params = cheap(&hex::encode([0xAA; 32]));

        let first = params.derive_key("password").unwrap();
        let second = params.derive_key("password").unwrap();
        assert_eq!(first.expose_secret().len(), 32);
        assert_eq!(first.expose_secret(), second.expose_secret());

        let other = params.derive_key("different").unwrap();
        assert_ne!(first.expose_secret(), other.expose_secret());
    }

    #[test]
    fn test_salt_changes_key() {
        let a = cheap(&hex::encode([0x01; 32])).derive_key("pw").unwrap();
        let b = cheap(&hex::encode([0x02; 32])).derive_key("pw").unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn test_standard_params() {
        let params = ScryptParams::generate();
        assert_eq!(params.n, 131072);
        assert_eq!(params.r, 8);
        assert_eq!(params.p, 1);
        assert_eq!(params.dklen, 32);
        assert_eq!(hex::decode(&params.salt).unwrap().len(), SALT_LENGTH);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_params() {
        let salt = hex::encode([0xAA; 32]);

        let mut params = cheap(&salt);
        params.n = 1000;
        assert!(params.validate().is_err());

        let mut params = cheap(&salt);
        params.dklen = 16;
        assert!(params.validate().is_err());

        let mut params = cheap(&salt);
        params.r = 0;
        assert!(params.validate().is_err());

        let params = cheap("not-hex");
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_generate_salt() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn test_params_field_names() {
        let json = serde_json::to_value(cheap("00")).unwrap();
        for key in ["dklen", "n", "p", "r", "salt"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
