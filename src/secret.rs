//! Base58 text encoding of the master key.
//!
//! The Bitcoin alphabet (58 symbols, no `0`, `O`, `I`, `l`) keeps the secret
//! safe to read aloud and to embed in a URL fragment.  Each leading zero
//! byte of the key maps to a leading `1`, per the standard encoding.

/// Encode the raw master key as the caller-facing secret.
///
/// This string is the only representation of the key that ever leaves an
/// encode call.
pub fn encode_secret(master_key: &[u8]) -> String {
    bs58::encode(master_key).into_string()
}
