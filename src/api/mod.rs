//! HTTP transport for encoded pastes.
//!
//! The record is POSTed as the raw JSON body with the two headers every
//! PrivateBin instance requires.  Failures pass through unchanged; retry
//! and backoff policy belongs to the caller.

use serde::Deserialize;
use thiserror::Error;

use crate::paste::EncodedPaste;

/// Header marking the request as an API call rather than a browser form.
pub const REQUESTED_WITH: &str = "JSONHttpRequest";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server rejected the paste (status {status}): {message}")]
    Rejected { status: i64, message: String },
    #[error("Malformed server response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parsed v2 creation response.
#[derive(Debug, Clone, Deserialize)]
pub struct PostResponse {
    pub status: i64,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub deletetoken: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Client bound to one PrivateBin instance.
pub struct ApiClient {
    base_url: String,
    client:   reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the record and parse the creation response.
    ///
    /// A transport-level failure surfaces as [`ApiError::Http`]; a server
    /// answer with nonzero status as [`ApiError::Rejected`].
    pub fn post(&self, paste: &EncodedPaste) -> Result<PostResponse, ApiError> {
        let body = paste.body_json()?;
        let text = self
            .client
            .post(format!("{}/", self.base_url))
            .header("Content-Type", "application/json")
            .header("X-Requested-With", REQUESTED_WITH)
            .body(body)
            .send()?
            .error_for_status()?
            .text()?;
        let response: PostResponse = serde_json::from_str(&text)?;
        if response.status != 0 {
            return Err(ApiError::Rejected {
                status:  response.status,
                message: response.message.unwrap_or_default(),
            });
        }
        Ok(response)
    }

    /// Shareable URL: paste id as the query, Base58 secret as the fragment.
    /// The fragment never reaches the server.
    pub fn paste_url(&self, response: &PostResponse, secret: &str) -> String {
        format!("{}/?{}#{}", self.base_url, response.id, secret)
    }

    /// Owner's delete URL for this paste.
    pub fn delete_url(&self, response: &PostResponse) -> String {
        format!(
            "{}/?pasteid={}&deletetoken={}",
            self.base_url, response.id, response.deletetoken
        )
    }
}
