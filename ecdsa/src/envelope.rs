//! Tagged signature envelopes as submitted by gateway clients.
//!
//! A client sends either a DER-encoded signature or a raw fixed-width `r‖s`
//! signature, labelled with its format. With the `serde` feature the
//! envelope maps to the JSON shape used on the wire, where `value` is
//! base64-encoded:
//!
//! ```json
//! { "type": "der", "value": "MEUCIQD..." }
//! ```

use crate::{Error, Result};
use core::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use {
    base64::{Engine, engine::general_purpose::STANDARD},
    serde::{Deserialize, Serialize},
};

/// Encoding of the signature carried by a [`SignatureEnvelope`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SignatureFormat {
    /// ASN.1 DER `ECDSA-Sig-Value`
    Der,

    /// Fixed-width big endian `r` followed by `s`
    Raw,
}

impl SignatureFormat {
    /// Tag used for this format on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            SignatureFormat::Der => "der",
            SignatureFormat::Raw => "raw",
        }
    }
}

impl fmt::Display for SignatureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureFormat {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "der" => Ok(SignatureFormat::Der),
            "raw" => Ok(SignatureFormat::Raw),
            _ => Err(Error::UnsupportedSignatureFormat(tag.to_owned())),
        }
    }
}

/// Signature bytes together with their format.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "EnvelopeRepr", into = "EnvelopeRepr")
)]
pub struct SignatureEnvelope {
    format: SignatureFormat,
    value: Vec<u8>,
}

impl SignatureEnvelope {
    /// Create an envelope from a format and the signature bytes.
    pub fn new(format: SignatureFormat, value: impl Into<Vec<u8>>) -> Self {
        Self {
            format,
            value: value.into(),
        }
    }

    /// Create an envelope from a wire tag (`"der"` or `"raw"`).
    ///
    /// Any other tag fails with [`Error::UnsupportedSignatureFormat`].
    pub fn from_tagged(tag: &str, value: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self::new(tag.parse()?, value))
    }

    /// Format of the enclosed signature.
    pub fn format(&self) -> SignatureFormat {
        self.format
    }

    /// Enclosed signature bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

/// JSON representation: `{ "type": "der" | "raw", "value": "<base64>" }`.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct EnvelopeRepr {
    #[serde(rename = "type")]
    tag: String,
    value: String,
}

#[cfg(feature = "serde")]
impl TryFrom<EnvelopeRepr> for SignatureEnvelope {
    type Error = Error;

    fn try_from(repr: EnvelopeRepr) -> Result<Self> {
        let value = STANDARD
            .decode(repr.value.as_bytes())
            .map_err(|_| Error::InvalidBase64)?;
        Self::from_tagged(&repr.tag, value)
    }
}

#[cfg(feature = "serde")]
impl From<SignatureEnvelope> for EnvelopeRepr {
    fn from(envelope: SignatureEnvelope) -> Self {
        Self {
            tag: envelope.format.as_str().to_owned(),
            value: STANDARD.encode(&envelope.value),
        }
    }
}
