//! Keystore MAC
//!
//! `mac = keccak256(derived_key[16..32] || ciphertext)`. A mismatch means
//! either the password is wrong or the ciphertext was altered; the two cases
//! are indistinguishable.

use alloy_primitives::keccak256;

use super::error::{KeystoreError, KeystoreResult};

/// Compute the MAC over the second half of the derived key and the ciphertext
pub fn compute_mac(derived_key: &[u8], ciphertext: &[u8]) -> KeystoreResult<[u8; 32]> {
    if derived_key.len() < 32 {
        return Err(KeystoreError::InvalidKdfParams(format!(
            "derived key must be at least 32 bytes, got {}",
            derived_key.len()
        )));
    }

    let mut preimage = Vec::with_capacity(16 + ciphertext.len());
    preimage.extend_from_slice(&derived_key[16..32]);
    preimage.extend_from_slice(ciphertext);

    Ok(keccak256(&preimage).0)
}

/// Check `expected` against a freshly computed MAC
pub fn verify_mac(derived_key: &[u8], ciphertext: &[u8], expected: &[u8]) -> KeystoreResult<()> {
    let computed = compute_mac(derived_key, ciphertext)?;
    if constant_time_eq(&computed, expected) {
        Ok(())
    } else {
        Err(KeystoreError::InvalidPassword)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
