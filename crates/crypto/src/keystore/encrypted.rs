//! Version 3 keystore file
//!
//! Combines the scrypt KDF, AES-128-CTR cipher and keccak MAC into the JSON
//! document Bee expects at `keys/swarm.key`.

use std::fs;
use std::io::Write;
use std::path::Path;

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cipher::{
    decrypt_secret, encrypt_secret, generate_iv, CipherParams, CIPHER_AES_128_CTR,
};
use super::error::{KeystoreError, KeystoreResult};
use super::kdf::{ScryptParams, KDF_SCRYPT};
use super::mac::{compute_mac, verify_mac};
use crate::secure::SecretBytes;
use crate::wallet::Wallet;

/// Web3 Secret Storage version
pub const KEYSTORE_VERSION: u32 = 3;

/// An encrypted secp256k1 private key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Keystore {
    /// Address as 40 lowercase hex characters without `0x`
    pub address: String,
    /// Unique identifier
    pub id: String,
    /// Schema version, always 3
    pub version: u32,
    /// Encryption parameters and ciphertext
    #[serde(alias = "Crypto")]
    pub crypto: CryptoSection,
}

/// The `crypto` object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CryptoSection {
    pub cipher: String,
    pub cipherparams: CipherParams,
    pub ciphertext: String,
    pub kdf: String,
    pub kdfparams: ScryptParams,
    pub mac: String,
}

impl Keystore {
    /// Encrypt a wallet with standard scrypt cost
    pub fn encrypt(wallet: &Wallet, password: &str) -> KeystoreResult<Self> {
        KeystoreBuilder::new().wallet(wallet).password(password).build()
    }

    /// Verify the MAC and return the decrypted private key
    pub fn decrypt(&self, password: &str) -> KeystoreResult<SecretBytes> {
        if self.version != KEYSTORE_VERSION {
            return Err(KeystoreError::UnsupportedVersion(self.version));
        }
        if self.crypto.kdf != KDF_SCRYPT {
            return Err(KeystoreError::UnsupportedKdf(self.crypto.kdf.clone()));
        }
        if self.crypto.cipher != CIPHER_AES_128_CTR {
            return Err(KeystoreError::UnsupportedCipher(self.crypto.cipher.clone()));
        }

        let derived_key = self.crypto.kdfparams.derive_key(password)?;
        let dk_bytes = derived_key.expose_secret();

        let ciphertext = decode_hex("ciphertext", &self.crypto.ciphertext)?;
        let mac = decode_hex("mac", &self.crypto.mac)?;
        verify_mac(dk_bytes, &ciphertext, &mac)?;

        let iv = self.crypto.cipherparams.iv()?;
        decrypt_secret(&ciphertext, dk_bytes, &iv)
    }

    /// Decrypt and rebuild the wallet, checking it matches `address`
    pub fn decrypt_wallet(&self, password: &str) -> KeystoreResult<Wallet> {
        let secret = self.decrypt(password)?;
        let wallet = Wallet::from_secret_bytes(secret.expose_secret())?;

        let actual = hex::encode(wallet.address().as_slice());
        if !actual.eq_ignore_ascii_case(self.address.trim_start_matches("0x")) {
            return Err(KeystoreError::AddressMismatch {
                expected: self.address.clone(),
                actual,
            });
        }
        Ok(wallet)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> KeystoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> KeystoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the keystore to a new file.
    ///
    /// Fails with [`KeystoreError::AlreadyExists`] instead of replacing an
    /// existing file. On Unix the file is created with mode 0600.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> KeystoreResult<()> {
        let path = path.as_ref();
        let json = self.to_json()?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => {
                KeystoreError::AlreadyExists(path.display().to_string())
            }
            _ => KeystoreError::IoError(e),
        })?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Load a keystore from a file
    pub fn load<P: AsRef<Path>>(path: P) -> KeystoreResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Address with `0x` prefix, as recorded in the file
    pub fn prefixed_address(&self) -> String {
        format!("0x{}", self.address.trim_start_matches("0x"))
    }
}

fn decode_hex(field: &str, value: &str) -> KeystoreResult<Vec<u8>> {
    hex::decode(value).map_err(|e| KeystoreError::HexError(format!("{}: {}", field, e)))
}

/// Builder for [`Keystore`]
#[derive(Default)]
pub struct KeystoreBuilder {
    wallet: Option<Wallet>,
    password: Option<String>,
    kdf: Option<ScryptParams>,
    id: Option<String>,
}

impl KeystoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wallet whose private key is encrypted
    pub fn wallet(mut self, wallet: &Wallet) -> Self {
        self.wallet = Some(wallet.clone());
        self
    }

    /// Set the password for key derivation
    pub fn password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    /// Override the scrypt parameters (standard cost otherwise)
    pub fn kdf(mut self, params: ScryptParams) -> Self {
        self.kdf = Some(params);
        self
    }

    /// Set a custom id (normally a random UUID v4)
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn build(self) -> KeystoreResult<Keystore> {
        let wallet = self.wallet.ok_or(KeystoreError::MissingInput("wallet"))?;
        let password = self.password.ok_or(KeystoreError::MissingInput("password"))?;

        let kdfparams = self.kdf.unwrap_or_else(ScryptParams::generate);
        let derived_key = kdfparams.derive_key(&password)?;
        let dk_bytes = derived_key.expose_secret();

        let iv = generate_iv();
        let secret = wallet.secret_bytes();
        let ciphertext = encrypt_secret(secret.expose_secret(), dk_bytes, &iv)?;
        let mac = compute_mac(dk_bytes, &ciphertext)?;

        Ok(Keystore {
            address: hex::encode(wallet.address().as_slice()),
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            version: KEYSTORE_VERSION,
            crypto: CryptoSection {
                cipher: CIPHER_AES_128_CTR.to_string(),
                cipherparams: CipherParams::new(&iv),
                ciphertext: hex::encode(&ciphertext),
                kdf: KDF_SCRYPT.to_string(),
                kdfparams,
                mac: hex::encode(mac),
            },
        })
    }
}
