//! Canonical paste payload and the v2 wire record.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::options::PasteOptions;

/// Protocol version written into every record.
pub const PROTOCOL_VERSION: u32 = 2;

// ── PasteBody ────────────────────────────────────────────────────────────────

/// The plaintext JSON object that gets compressed and encrypted.
///
/// Field order is the canonical key order on the wire.  The attachment
/// fields are omitted entirely (not null) when no attachment is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PasteBody {
    pub paste: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_name: Option<String>,
}

impl PasteBody {
    pub fn from_options(options: &PasteOptions) -> Self {
        match &options.attachment {
            Some(att) => Self {
                paste:           options.text.clone(),
                attachment:      Some(att.data.clone()),
                attachment_name: Some(att.name.clone()),
            },
            None => Self {
                paste: options.text.clone(),
                ..Self::default()
            },
        }
    }

    /// Canonical serialization; forward slashes stay unescaped.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

// ── PasteRecord ──────────────────────────────────────────────────────────────

/// The v2 record POSTed to a PrivateBin instance.
///
/// `adata` is held as a raw JSON value: it is embedded byte-for-byte as it
/// was fed to the cipher, never re-serialized.  Re-encoding it (different
/// escaping, different spacing) would invalidate the authentication tag on
/// the recipient's side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasteRecord {
    pub v:     u32,
    pub adata: Box<RawValue>,
    pub ct:    String,
    pub meta:  PasteMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteMeta {
    pub expire: String,
}

// ── EncodedPaste ─────────────────────────────────────────────────────────────

/// Result of one encode call: the wire record plus the Base58 secret the
/// recipient appends as the URL fragment.
#[derive(Debug, Clone)]
pub struct EncodedPaste {
    pub record: PasteRecord,
    pub secret: String,
}

impl EncodedPaste {
    /// The JSON request body for the POST transport.
    pub fn body_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.record)
    }
}
