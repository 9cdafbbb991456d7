//! Attachment loading: local file or URL in, data-URI payload fields out.
//!
//! The encrypted payload carries the attachment as a
//! `data:{mime};base64,{bytes}` string plus a display filename.  The MIME
//! type is sniffed from the content, falling back to
//! `application/octet-stream` when the bytes match no known signature.
//!
//! An unreadable source is a hard error.  Quietly producing a paste without
//! the attachment would look like success to the caller while dropping data.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use thiserror::Error;

/// MIME type used when content sniffing finds no match.
pub const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Error, Debug)]
pub enum AttachmentError {
    #[error("Cannot read attachment '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[cfg(feature = "http")]
    #[error("Cannot fetch attachment '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Attachment source has no usable file name; pass one explicitly")]
    MissingName,
}

/// An attachment ready to be embedded into the paste payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// `data:{mime};base64,{bytes}` value for the `attachment` field.
    pub data: String,
    /// Display filename for the `attachment_name` field.
    pub name: String,
}

impl Attachment {
    /// Wrap raw bytes, sniffing the MIME type from their content.
    pub fn from_bytes(bytes: &[u8], name: impl Into<String>) -> Self {
        let mime = infer::get(bytes)
            .map(|kind| kind.mime_type())
            .unwrap_or(FALLBACK_MIME);
        Self {
            data: format!("data:{mime};base64,{}", B64.encode(bytes)),
            name: name.into(),
        }
    }

    /// Read a local file.  The filename override wins over the path's base
    /// name when both are present.
    pub fn from_path(path: impl AsRef<Path>, filename: Option<&str>) -> Result<Self, AttachmentError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| AttachmentError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        let name = match filename {
            Some(name) => name.to_owned(),
            None => path
                .file_name()
                .ok_or(AttachmentError::MissingName)?
                .to_string_lossy()
                .into_owned(),
        };
        Ok(Self::from_bytes(&bytes, name))
    }

    /// Fetch over HTTP(S).  The filename override wins over the URL's last
    /// path segment.
    #[cfg(feature = "http")]
    pub fn from_url(url: &str, filename: Option<&str>) -> Result<Self, AttachmentError> {
        let fetch_err = |source| AttachmentError::Fetch { url: url.to_owned(), source };
        let bytes = reqwest::blocking::get(url)
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.bytes())
            .map_err(fetch_err)?;
        let name = match filename {
            Some(name) => name.to_owned(),
            None => url
                .split('/')
                .next_back()
                .and_then(|seg| seg.split(|c| c == '?' || c == '#').next())
                .filter(|seg| !seg.is_empty())
                .map(str::to_owned)
                .ok_or(AttachmentError::MissingName)?,
        };
        Ok(Self::from_bytes(&bytes, name))
    }

    /// Dispatch on the source: http(s) URLs are fetched, anything else is
    /// treated as a filesystem path.
    pub fn load(source: &str, filename: Option<&str>) -> Result<Self, AttachmentError> {
        #[cfg(feature = "http")]
        if source.starts_with("http://") || source.starts_with("https://") {
            return Self::from_url(source, filename);
        }
        Self::from_path(source, filename)
    }
}
