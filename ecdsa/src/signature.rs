//! ECDSA signature as an `(r, s)` pair of integers.

use crate::{
    Error, Result,
    asn1::{self, FromValue, Schema, Value},
    curve::NamedCurve,
    envelope::{SignatureEnvelope, SignatureFormat},
};
use num_bigint::{BigInt, Sign};
use num_traits::Signed;

/// ASN.1 structure of a DER-encoded ECDSA signature as specified in
/// [RFC5912 Section 6]:
///
/// ```text
/// ECDSA-Sig-Value ::= SEQUENCE {
///   r  INTEGER,
///   s  INTEGER
/// }
/// ```
///
/// [RFC5912 Section 6]: https://www.rfc-editor.org/rfc/rfc5912#section-6
pub const ECDSA_SIG_VALUE: Schema =
    Schema::Sequence(&[("r", Schema::Integer), ("s", Schema::Integer)]);

/// ECDSA signature.
///
/// `r` and `s` are held as signed integers because the DER `INTEGER` type is
/// signed; for a well-formed signature both lie in `[1, n)` for the curve's
/// order `n`. The default value is `(0, 0)`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Signature {
    r: BigInt,
    s: BigInt,
}

impl Signature {
    /// Create a signature from its `r` and `s` components.
    pub fn from_components(r: impl Into<BigInt>, s: impl Into<BigInt>) -> Self {
        Self {
            r: r.into(),
            s: s.into(),
        }
    }

    /// The `r` component.
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigInt {
        &self.s
    }

    /// Split the signature into its `(r, s)` components.
    pub fn into_components(self) -> (BigInt, BigInt) {
        (self.r, self.s)
    }

    /// Parse a signature from ASN.1 DER.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        asn1::decode(bytes)
    }

    /// Serialize this signature as ASN.1 DER.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let r = asn1::encode_integer(&self.r)?;
        let s = asn1::encode_integer(&self.s)?;
        asn1::encode_sequence(&[&r, &s])
    }

    /// Parse a raw signature: big endian `r` and `s`, each
    /// [`NamedCurve::field_bytes_size`] bytes, concatenated.
    pub fn from_raw(bytes: &[u8], curve: NamedCurve) -> Result<Self> {
        if bytes.len() != curve.raw_signature_size() {
            return Err(Error::InvalidRawLength {
                expected: curve.raw_signature_size(),
                got: bytes.len(),
            });
        }

        let (r, s) = bytes.split_at(curve.field_bytes_size());

        Ok(Self {
            r: BigInt::from_bytes_be(Sign::Plus, r),
            s: BigInt::from_bytes_be(Sign::Plus, s),
        })
    }

    /// Serialize this signature as a raw fixed-width `r‖s` byte string for
    /// the given curve.
    pub fn to_raw(&self, curve: NamedCurve) -> Result<Vec<u8>> {
        let size = curve.field_bytes_size();
        let mut bytes = vec![0u8; curve.raw_signature_size()];

        write_scalar(&self.r, curve, &mut bytes[..size])?;
        write_scalar(&self.s, curve, &mut bytes[size..])?;

        Ok(bytes)
    }

    /// Decode a signature from a `der` or `raw` envelope. `curve` gives the
    /// scalar width of raw signatures and is ignored for DER.
    pub fn import(envelope: &SignatureEnvelope, curve: NamedCurve) -> Result<Self> {
        match envelope.format() {
            SignatureFormat::Der => Self::from_der(envelope.value()),
            SignatureFormat::Raw => Self::from_raw(envelope.value(), curve),
        }
    }
}

impl FromValue for Signature {
    const SCHEMA: Schema = ECDSA_SIG_VALUE;

    fn from_value(value: Value) -> Result<Self> {
        let [r, s] = value.into_fields::<2>()?;

        Ok(Self {
            r: r.value.into_integer()?,
            s: s.value.into_integer()?,
        })
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(der: &[u8]) -> Result<Self> {
        Self::from_der(der)
    }
}

/// Write `scalar` right-aligned into `out`, which is zero-initialized and
/// `curve.field_bytes_size()` long.
fn write_scalar(scalar: &BigInt, curve: NamedCurve, out: &mut [u8]) -> Result<()> {
    let out_of_range = || Error::ScalarOutOfRange {
        curve: curve.name(),
    };

    if scalar.is_negative() {
        return Err(out_of_range());
    }

    let (_, bytes) = scalar.to_bytes_be();
    let begin = out.len().checked_sub(bytes.len()).ok_or_else(out_of_range)?;
    out[begin..].copy_from_slice(&bytes);
    Ok(())
}
