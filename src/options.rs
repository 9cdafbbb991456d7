//! Paste configuration.
//!
//! [`PasteOptions`] is a plain value: build it up through the setters, then
//! hand a reference to [`crate::encode`].  Nothing here is shared or locked;
//! concurrent encodes want their own clone (or an immutable borrow each).
//!
//! The formatter and expiry setters take a `bypass` flag.  Without it, a
//! value outside the known server vocabulary is rejected; with it, the
//! caller's literal string is carried verbatim into the paste, so a client
//! built against an older vocabulary can still talk to a newer server.

use thiserror::Error;

use crate::attachment::Attachment;
use crate::codec::Compression;

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Unknown formatter '{0}' and bypass not requested (plaintext, syntaxhighlighting, markdown)")]
    UnknownFormatter(String),
    #[error("Unknown expiry '{0}' and bypass not requested (5min, 10min, 1hour, 1day, 1week, 1month, 1year, never)")]
    UnknownExpiry(String),
    #[error("Unknown compression '{0}' (zlib or none)")]
    UnknownCompression(String),
}

// ── Formatter ────────────────────────────────────────────────────────────────

/// How the server renders the decrypted paste.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Formatter {
    #[default]
    Plaintext,
    SyntaxHighlighting,
    Markdown,
    /// A server-side value unknown to this client, admitted via bypass.
    Custom(String),
}

impl Formatter {
    /// Wire name, carried verbatim into the metadata tuple.
    pub fn name(&self) -> &str {
        match self {
            Formatter::Plaintext          => "plaintext",
            Formatter::SyntaxHighlighting => "syntaxhighlighting",
            Formatter::Markdown           => "markdown",
            Formatter::Custom(s)          => s,
        }
    }

    /// Resolve a known wire name.  `Custom` values only enter via bypass.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "plaintext"          => Some(Formatter::Plaintext),
            "syntaxhighlighting" => Some(Formatter::SyntaxHighlighting),
            "markdown"           => Some(Formatter::Markdown),
            _                    => None,
        }
    }
}

// ── Expire ───────────────────────────────────────────────────────────────────

/// Server-side retention period.  The value is plain metadata (`meta.expire`),
/// not part of the encrypted payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Expire {
    FiveMinutes,
    TenMinutes,
    OneHour,
    #[default]
    OneDay,
    OneWeek,
    OneMonth,
    OneYear,
    Never,
    /// A server-side value unknown to this client, admitted via bypass.
    Custom(String),
}

impl Expire {
    pub fn name(&self) -> &str {
        match self {
            Expire::FiveMinutes => "5min",
            Expire::TenMinutes  => "10min",
            Expire::OneHour     => "1hour",
            Expire::OneDay      => "1day",
            Expire::OneWeek     => "1week",
            Expire::OneMonth    => "1month",
            Expire::OneYear     => "1year",
            Expire::Never       => "never",
            Expire::Custom(s)   => s,
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "5min"   => Some(Expire::FiveMinutes),
            "10min"  => Some(Expire::TenMinutes),
            "1hour"  => Some(Expire::OneHour),
            "1day"   => Some(Expire::OneDay),
            "1week"  => Some(Expire::OneWeek),
            "1month" => Some(Expire::OneMonth),
            "1year"  => Some(Expire::OneYear),
            "never"  => Some(Expire::Never),
            _        => None,
        }
    }
}

// ── PasteOptions ─────────────────────────────────────────────────────────────

/// Configuration for one paste.
#[derive(Debug, Clone)]
pub struct PasteOptions {
    pub compression: Compression,
    pub formatter:   Formatter,
    pub expire:      Expire,
    /// Allow replies on the server.  Mutually exclusive with `burn`.
    pub discussion:  bool,
    /// Delete the paste after the first read.  Mutually exclusive with
    /// `discussion`.
    pub burn:        bool,
    /// Optional passphrase folded into key derivation.
    pub password:    Option<String>,
    pub text:        String,
    pub attachment:  Option<Attachment>,
}

impl Default for PasteOptions {
    fn default() -> Self {
        Self {
            compression: Compression::Zlib,
            formatter:   Formatter::Plaintext,
            expire:      Expire::OneDay,
            discussion:  false,
            burn:        false,
            password:    None,
            text:        String::new(),
            attachment:  None,
        }
    }
}

impl PasteOptions {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(password.into());
    }

    pub fn set_attachment(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }

    pub fn set_compression(&mut self, name: &str) -> Result<(), OptionsError> {
        self.compression = Compression::from_name(name)
            .ok_or_else(|| OptionsError::UnknownCompression(name.to_owned()))?;
        Ok(())
    }

    pub fn set_formatter(&mut self, name: &str, bypass: bool) -> Result<(), OptionsError> {
        self.formatter = match Formatter::from_name(name) {
            Some(f)          => f,
            None if bypass   => Formatter::Custom(name.to_owned()),
            None             => return Err(OptionsError::UnknownFormatter(name.to_owned())),
        };
        Ok(())
    }

    pub fn set_expire(&mut self, name: &str, bypass: bool) -> Result<(), OptionsError> {
        self.expire = match Expire::from_name(name) {
            Some(e)          => e,
            None if bypass   => Expire::Custom(name.to_owned()),
            None             => return Err(OptionsError::UnknownExpiry(name.to_owned())),
        };
        Ok(())
    }

    /// Enabling discussion turns burn off; the most recent setter wins.
    pub fn set_discussion(&mut self, discussion: bool) {
        if discussion && self.burn {
            self.burn = false;
        }
        self.discussion = discussion;
    }

    /// Enabling burn turns discussion off; the most recent setter wins.
    pub fn set_burn(&mut self, burn: bool) {
        if burn && self.discussion {
            self.discussion = false;
        }
        self.burn = burn;
    }
}
