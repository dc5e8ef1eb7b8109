use crate::asn1::Tag;

/// Errors used throughout this crate.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input is too short to hold an identifier and a length, or the
    /// length octets themselves are invalid.
    #[error("malformed DER encoding: {0}")]
    MalformedEncoding(&'static str),

    /// The declared content length does not fit in the available bytes.
    #[error("DER length overflow: declared {declared} bytes, {available} available")]
    LengthOverflow {
        /// Length announced by the length octets.
        declared: usize,
        /// Bytes actually available after the header.
        available: usize,
    },

    /// The identifier octet does not match the expected tag.
    #[error("unexpected ASN.1 type: expected {expected}, got identifier 0x{actual:02x}")]
    UnexpectedType {
        /// Tag required by the schema.
        expected: Tag,
        /// Identifier octet found in the input.
        actual: u8,
    },

    /// The signature envelope tag is neither `der` nor `raw`.
    #[error("unsupported signature format: {0:?}")]
    UnsupportedSignatureFormat(String),

    /// `s` is not below the order of any supported curve.
    #[error("signature scalar exceeds the order of every supported curve")]
    UnsupportedCurve,

    /// The curve name is not recognized.
    #[error("unknown curve name: {0:?}")]
    UnknownCurve(String),

    /// A signature component is outside the scalar range of the requested curve.
    #[error("signature component out of range for {curve}")]
    ScalarOutOfRange {
        /// Name of the curve the component was checked against.
        curve: &'static str,
    },

    /// A raw `r‖s` signature has the wrong length for the requested curve.
    #[error("invalid raw signature length: expected {expected}, got {got}")]
    InvalidRawLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        got: usize,
    },

    /// An envelope `value` is not valid base64.
    #[error("invalid base64 signature value")]
    InvalidBase64,
}

/// Result type used by this crate.
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for signature::Error {
    fn from(err: Error) -> Self {
        signature::Error::from_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_names_the_failure() {
        let err = Error::UnexpectedType {
            expected: Tag::Sequence,
            actual: 0x04,
        };
        assert_eq!(
            err.to_string(),
            "unexpected ASN.1 type: expected SEQUENCE, got identifier 0x04"
        );

        let err = Error::LengthOverflow {
            declared: 10,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "DER length overflow: declared 10 bytes, 3 available"
        );
    }

    #[test]
    fn converts_into_signature_error() {
        let err: signature::Error = Error::UnsupportedCurve.into();
        let source = err.source().expect("source is preserved");
        assert_eq!(
            source.to_string(),
            "signature scalar exceeds the order of every supported curve"
        );
    }
}
