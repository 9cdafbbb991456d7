//! Payload compression: the two codec modes the v2 protocol admits.
//!
//! # Wire rules
//! Mode `zlib` is raw DEFLATE (RFC 1951) with no zlib or gzip framing.  The
//! recipient inflates the decrypted payload directly; any header bytes would
//! corrupt the paste.  Mode `none` stores the serialized payload verbatim.
//!
//! The mode name travels inside the authenticated metadata tuple, so a
//! mismatch between the name and the actual encoding surfaces on the
//! recipient side as a decode failure, never as silently wrong content.

use std::io::{Read, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Compression error: {0}")]
    Compression(String),
    #[error("Decompression error: {0}")]
    Decompression(String),
}

/// Compression mode applied to the serialized paste payload before
/// encryption.  The `name()` string is what appears in the metadata tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Raw DEFLATE, the protocol default.
    #[default]
    Zlib,
    /// Payload stored verbatim.
    None,
}

impl Compression {
    /// Wire name of this mode (appears verbatim in the metadata tuple).
    pub fn name(self) -> &'static str {
        match self {
            Compression::Zlib => "zlib",
            Compression::None => "none",
        }
    }

    /// Parse a wire or CLI name.  Returns `None` for unknown modes; there is
    /// no bypass for compression, a mode this client cannot apply cannot be
    /// encoded.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "zlib" => Some(Compression::Zlib),
            "none" => Some(Compression::None),
            _      => None,
        }
    }

    /// Apply this mode to the serialized payload.
    pub fn compress(self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self {
            Compression::Zlib => {
                let mut enc = flate2::write::DeflateEncoder::new(
                    Vec::with_capacity(data.len() / 2 + 16),
                    flate2::Compression::default(),
                );
                enc.write_all(data)
                    .map_err(|e| CodecError::Compression(e.to_string()))?;
                enc.finish()
                    .map_err(|e| CodecError::Compression(e.to_string()))
            }
            Compression::None => Ok(data.to_vec()),
        }
    }

    /// Undo this mode.  Raw inflate for `zlib`, pass-through for `none`.
    pub fn decompress(self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self {
            Compression::Zlib => {
                let mut out = Vec::new();
                flate2::read::DeflateDecoder::new(data)
                    .read_to_end(&mut out)
                    .map_err(|e| CodecError::Decompression(e.to_string()))?;
                Ok(out)
            }
            Compression::None => Ok(data.to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zlib_roundtrip() {
        let data = br#"{"paste":"raw deflate roundtrip, no zlib header"}"#;
        let packed = Compression::Zlib.compress(data).unwrap();
        assert_ne!(packed.as_slice(), &data[..]);
        // 0x78 would be the zlib CMF byte for a 32K window; raw deflate
        // output must not start with a zlib header.
        assert_ne!(packed[0], 0x78);
        assert_eq!(Compression::Zlib.decompress(&packed).unwrap(), data);
    }

    #[test]
    fn none_is_passthrough() {
        let data = b"verbatim";
        assert_eq!(Compression::None.compress(data).unwrap(), data);
        assert_eq!(Compression::None.decompress(data).unwrap(), data);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert_eq!(Compression::from_name("zstd"), None);
        assert_eq!(Compression::from_name("zlib"), Some(Compression::Zlib));
    }
}
