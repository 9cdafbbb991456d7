//! AES-256-GCM paste encryption and PBKDF2 key derivation.
//!
//! Key derivation: PBKDF2-HMAC-SHA256(master_key ‖ passphrase, salt) → 32-byte key
//! Encryption:     AES-256-GCM with a 16-byte nonce; the serialized metadata
//!                 tuple is authenticated as associated data
//!
//! Encrypted payload layout: [ ciphertext | GCM tag (16 B) ]
//!
//! The 16-byte nonce is a protocol value, not the usual 12-byte GCM default;
//! both sides run the IV through GHASH-based derivation inside GCM, so the
//! lengths must agree exactly.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::aes::Aes256;
use aes_gcm::AesGcm;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroizing;

/// Byte length of the AES-GCM nonce transmitted inside the metadata tuple.
pub const NONCE_LEN: usize = 16;
/// Byte length of the PBKDF2 salt transmitted inside the metadata tuple.
pub const SALT_LEN: usize = 8;
/// Byte length of the master key and of the derived encryption key.
pub const KEY_LEN: usize = 32;
/// Byte length of the GCM authentication tag appended to the ciphertext.
pub const TAG_LEN: usize = 16;
/// PBKDF2 iteration count.  Fixed by the protocol and repeated verbatim in
/// the metadata tuple; the recipient derives with whatever the tuple says.
pub const KDF_ITERATIONS: u32 = 100_000;

/// AES-256-GCM instantiated with the protocol's 16-byte nonce.
type PasteCipher = AesGcm<Aes256, U16>;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Encryption failed")]
    EncryptionFailed,
    #[error("Decryption failed (wrong key or tampered data)")]
    DecryptionFailed,
}

/// Source of the per-paste random material.
///
/// The OS CSPRNG is the only source used outside of tests; the trait exists
/// so tests can pin nonce/salt/key bytes and assert exact ciphertexts.
pub trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), rand::Error>;
}

/// The operating system CSPRNG.  Failures propagate; there is no fallback
/// to a weaker source.
#[derive(Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), rand::Error> {
        OsRng.try_fill_bytes(buf)
    }
}

/// Fresh random material for a single encode call.
///
/// Generated once per paste and discarded afterwards; nothing here is ever
/// persisted or reused.  The nonce and salt travel base64-encoded inside the
/// metadata tuple, the master key leaves the call only as its Base58 text.
pub struct KeyMaterial {
    pub nonce:      [u8; NONCE_LEN],
    pub salt:       [u8; SALT_LEN],
    pub master_key: Zeroizing<[u8; KEY_LEN]>,
}

impl KeyMaterial {
    pub fn generate(source: &mut dyn EntropySource) -> Result<Self, rand::Error> {
        let mut nonce = [0u8; NONCE_LEN];
        let mut salt = [0u8; SALT_LEN];
        let mut master_key = Zeroizing::new([0u8; KEY_LEN]);
        source.fill(&mut nonce)?;
        source.fill(&mut salt)?;
        source.fill(master_key.as_mut())?;
        Ok(Self { nonce, salt, master_key })
    }
}

/// Derive the symmetric encryption key from the master key and salt.
///
/// With a passphrase set, the PBKDF2 input is `master_key ‖ passphrase`,
/// master key bytes first.  The order is part of the protocol: the recipient
/// rebuilds the same concatenation from the URL fragment and the prompt.
pub fn derive_key(
    master_key: &[u8; KEY_LEN],
    passphrase: Option<&str>,
    salt: &[u8; SALT_LEN],
) -> Zeroizing<[u8; KEY_LEN]> {
    let mut ikm = Zeroizing::new(Vec::with_capacity(
        KEY_LEN + passphrase.map_or(0, str::len),
    ));
    ikm.extend_from_slice(master_key);
    if let Some(p) = passphrase {
        ikm.extend_from_slice(p.as_bytes());
    }
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2_hmac::<Sha256>(&ikm, salt, KDF_ITERATIONS, key.as_mut());
    key
}

/// Encrypt the (possibly compressed) payload under `key` and `nonce`,
/// authenticating `adata` alongside it.
///
/// `adata` must be the exact byte sequence later embedded in the output
/// record; GCM binds it into the tag, so a recipient authenticating against
/// a re-serialized variant would reject the paste.
///
/// Returns `ciphertext || GCM-tag (16 B)`.
pub fn seal(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
    adata: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = PasteCipher::new_from_slice(key)
        .map_err(|_| CryptoError::EncryptionFailed)?;
    cipher
        .encrypt(
            aes_gcm::Nonce::from_slice(nonce),
            Payload { msg: plaintext, aad: adata },
        )
        .map_err(|_| CryptoError::EncryptionFailed)
}

/// Decrypt a payload produced by [`seal`] with the same `adata` bytes.
///
/// Input must be ciphertext followed by the 16-byte GCM tag.
pub fn open(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    data: &[u8],
    adata: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if data.len() < TAG_LEN {
        return Err(CryptoError::DecryptionFailed);
    }
    let cipher = PasteCipher::new_from_slice(key)
        .map_err(|_| CryptoError::DecryptionFailed)?;
    cipher
        .decrypt(
            aes_gcm::Nonce::from_slice(nonce),
            Payload { msg: data, aad: adata },
        )
        .map_err(|_| CryptoError::DecryptionFailed)
}
