//! Common interface implemented by every configured cipher.

use crate::error::CipherError;

/// A cipher whose key has already been parsed and validated.
///
/// Implementations are stateless between calls: encrypting the same text
/// twice yields the same ciphertext, and `decrypt` undoes `encrypt` for every
/// input the cipher accepts.
pub trait Cipher {
    /// Human-readable cipher name, used in log output.
    fn name(&self) -> &'static str;

    /// Encrypts `text`, returning the ciphertext.
    fn encrypt(&self, text: &str) -> Result<String, CipherError>;

    /// Decrypts `text`, returning the plaintext.
    fn decrypt(&self, text: &str) -> Result<String, CipherError>;
}
