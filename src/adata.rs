//! The authenticated metadata tuple (`adata`) bound into every paste.
//!
//! # Wire shape
//! ```json
//! [["<nonce b64>","<salt b64>",100000,256,128,"aes","gcm","zlib"],"plaintext",0,0]
//! ```
//! Element order is frozen.  The serialized bytes serve two roles at once:
//! they are the AEAD associated data passed to the cipher, and they are the
//! `adata` field of the output record.  Both roles MUST see the identical
//! byte sequence; the encode pipeline serializes once and reuses the string.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::crypto::{KDF_ITERATIONS, KEY_LEN, TAG_LEN};
use crate::options::PasteOptions;

/// Cipher algorithm name, fixed for protocol v2.
pub const CIPHER_ALGO: &str = "aes";
/// Cipher mode name, fixed for protocol v2.
pub const CIPHER_MODE: &str = "gcm";

/// Metadata authenticated alongside the encrypted payload.
///
/// Numeric key/tag sizes are in bits; the nonce and salt are base64 of the
/// raw bytes drawn for this paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociatedData {
    pub cipher_iv:           String,
    pub kdf_salt:            String,
    pub kdf_iterations:      u32,
    pub kdf_key_size:        u32,
    pub cipher_tag_size:     u32,
    pub compression:         String,
    pub formatter:           String,
    pub open_discussion:     u8,
    pub burn_after_reading:  u8,
}

impl AssociatedData {
    /// Build the tuple from the current options and this paste's fresh
    /// nonce and salt.
    pub fn build(options: &PasteOptions, nonce: &[u8], salt: &[u8]) -> Self {
        Self {
            cipher_iv:          B64.encode(nonce),
            kdf_salt:           B64.encode(salt),
            kdf_iterations:     KDF_ITERATIONS,
            kdf_key_size:       (KEY_LEN * 8) as u32,
            cipher_tag_size:    (TAG_LEN * 8) as u32,
            compression:        options.compression.name().to_owned(),
            formatter:          options.formatter.name().to_owned(),
            open_discussion:    options.discussion as u8,
            burn_after_reading: options.burn as u8,
        }
    }

    /// Serialize to the exact JSON used as AEAD associated data.
    ///
    /// serde_json never escapes forward slashes, which matches what the
    /// recipient feeds its cipher.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for AssociatedData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // [[iv, salt, iterations, key bits, tag bits, algo, mode, compression],
        //  formatter, discussion, burn]
        let mut outer = serializer.serialize_tuple(4)?;
        outer.serialize_element(&(
            &self.cipher_iv,
            &self.kdf_salt,
            self.kdf_iterations,
            self.kdf_key_size,
            self.cipher_tag_size,
            CIPHER_ALGO,
            CIPHER_MODE,
            &self.compression,
        ))?;
        outer.serialize_element(&self.formatter)?;
        outer.serialize_element(&self.open_discussion)?;
        outer.serialize_element(&self.burn_after_reading)?;
        outer.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_the_frozen_tuple_shape() {
        let adata = AssociatedData {
            cipher_iv:          "iv".into(),
            kdf_salt:           "salt".into(),
            kdf_iterations:     100_000,
            kdf_key_size:       256,
            cipher_tag_size:    128,
            compression:        "zlib".into(),
            formatter:          "plaintext".into(),
            open_discussion:    0,
            burn_after_reading: 1,
        };
        assert_eq!(
            adata.to_json().unwrap(),
            r#"[["iv","salt",100000,256,128,"aes","gcm","zlib"],"plaintext",0,1]"#,
        );
    }

    #[test]
    fn builds_from_options_and_fresh_material() {
        let mut options = PasteOptions::default();
        options.set_burn(true);
        let adata = AssociatedData::build(&options, &[0u8; 16], &[0u8; 8]);
        assert_eq!(adata.cipher_iv, "AAAAAAAAAAAAAAAAAAAAAA==");
        assert_eq!(adata.kdf_salt, "AAAAAAAAAAA=");
        assert_eq!(adata.compression, "zlib");
        assert_eq!(adata.open_discussion, 0);
        assert_eq!(adata.burn_after_reading, 1);
    }
}
