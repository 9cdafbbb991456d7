//! The encode pipeline: options in, encrypted record + secret out.
//!
//! One call walks validate → generate key material → derive key → serialize
//! payload → compress → build adata → encrypt → assemble.  Everything is
//! synchronous and CPU-bound; each call draws its own randomness and holds
//! no state across calls, so concurrent encodes over independent option
//! values are safe.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use serde_json::value::RawValue;
use thiserror::Error;
use tracing::debug;

use crate::adata::AssociatedData;
use crate::codec::CodecError;
use crate::crypto::{self, CryptoError, EntropySource, KeyMaterial, OsEntropy};
use crate::options::PasteOptions;
use crate::paste::{EncodedPaste, PasteBody, PasteMeta, PasteRecord, PROTOCOL_VERSION};
use crate::secret::encode_secret;

#[derive(Error, Debug)]
pub enum EncodeError {
    /// Entropy source failure is fatal; there is no weaker fallback.
    #[error("Entropy source unavailable: {0}")]
    Randomness(#[from] rand::Error),
    /// Both flags forced true through the public fields; the setters never
    /// produce this state.
    #[error("Burn-after-reading and open discussion are mutually exclusive")]
    Conflict,
    #[error("Empty paste: set text or an attachment before encoding")]
    EmptyPaste,
    #[error(transparent)]
    Crypto(#[from] CryptoError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("Record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Encrypt one paste with fresh OS randomness.
pub fn encode(options: &PasteOptions) -> Result<EncodedPaste, EncodeError> {
    encode_with_source(options, &mut OsEntropy)
}

/// Encrypt one paste, drawing nonce/salt/master key from `entropy`.
///
/// Production callers want [`encode`]; this entry point exists so tests can
/// inject a fixed source and assert exact ciphertext bytes.
pub fn encode_with_source(
    options: &PasteOptions,
    entropy: &mut dyn EntropySource,
) -> Result<EncodedPaste, EncodeError> {
    validate(options)?;

    let material = KeyMaterial::generate(entropy)?;
    let key = crypto::derive_key(&material.master_key, options.password.as_deref(), &material.salt);

    let plaintext = PasteBody::from_options(options).to_bytes()?;
    let packed = options.compression.compress(&plaintext)?;
    debug!(
        payload = plaintext.len(),
        packed = packed.len(),
        mode = options.compression.name(),
        "payload serialized"
    );

    // Serialized exactly once: these bytes are the AEAD associated data AND
    // the record's adata field.
    let adata_json = AssociatedData::build(options, &material.nonce, &material.salt).to_json()?;

    let ciphertext = crypto::seal(&key, &material.nonce, &packed, adata_json.as_bytes())?;
    debug!(
        ct = ciphertext.len(),
        iterations = crypto::KDF_ITERATIONS,
        "payload sealed"
    );

    let record = PasteRecord {
        v:     PROTOCOL_VERSION,
        adata: RawValue::from_string(adata_json)?,
        ct:    B64.encode(&ciphertext),
        meta:  PasteMeta { expire: options.expire.name().to_owned() },
    };
    let secret = encode_secret(&material.master_key[..]);

    Ok(EncodedPaste { record, secret })
}

/// Reject states the setters cannot produce but the public fields can.
fn validate(options: &PasteOptions) -> Result<(), EncodeError> {
    if options.burn && options.discussion {
        return Err(EncodeError::Conflict);
    }
    if options.text.is_empty() && options.attachment.is_none() {
        return Err(EncodeError::EmptyPaste);
    }
    Ok(())
}
