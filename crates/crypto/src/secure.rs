//! Secret wrappers
//!
//! Thin aliases over the `secrecy` crate so that derived keys and decrypted
//! private keys are zeroized when dropped.

use secrecy::SecretBox;

pub use secrecy::ExposeSecret;

/// A secret byte buffer that is zeroized on drop.
///
/// The inner value can only be reached through `expose_secret()`.
///
/// ```rust
/// use beekit_crypto::secure::{secret_bytes, ExposeSecret};
///
/// let secret = secret_bytes(vec![1, 2, 3, 4]);
/// assert_eq!(secret.expose_secret(), &vec![1, 2, 3, 4]);
/// ```
pub type SecretBytes = SecretBox<Vec<u8>>;

/// Move a buffer into a [`SecretBytes`].
pub fn secret_bytes(bytes: Vec<u8>) -> SecretBytes {
    SecretBox::new(Box::new(bytes))
}
