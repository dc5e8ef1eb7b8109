//! Minimal ASN.1 DER (X.690) codec restricted to `INTEGER` and `SEQUENCE`.
//!
//! Decoding is driven by a caller-supplied [`Schema`] which names the fields
//! of each `SEQUENCE` and the tag each of them must carry. The result is a
//! [`Value`] tree mirroring the schema, which call sites usually turn into a
//! strongly typed structure through [`FromValue`]:
//!
//! ```
//! use fabric_ecdsa::asn1::{self, FromValue, Schema, Value};
//! use num_bigint::BigInt;
//!
//! struct Point {
//!     x: BigInt,
//!     y: BigInt,
//! }
//!
//! impl FromValue for Point {
//!     const SCHEMA: Schema = Schema::Sequence(&[("x", Schema::Integer), ("y", Schema::Integer)]);
//!
//!     fn from_value(value: Value) -> fabric_ecdsa::Result<Self> {
//!         let [x, y] = value.into_fields::<2>()?;
//!         Ok(Point {
//!             x: x.value.into_integer()?,
//!             y: y.value.into_integer()?,
//!         })
//!     }
//! }
//!
//! let point: Point = asn1::decode(&[0x30, 0x06, 0x02, 0x01, 0x05, 0x02, 0x01, 0xfa])?;
//! assert_eq!(point.x, BigInt::from(5));
//! assert_eq!(point.y, BigInt::from(-6));
//! # Ok::<(), fabric_ecdsa::Error>(())
//! ```

mod decode;
mod encode;
mod int;

pub use self::{
    decode::{Header, decode, parse},
    encode::{encode_integer, encode_length, encode_sequence},
};

use crate::{Error, Result};
use core::fmt;
use num_bigint::BigInt;

/// Maximum number of long-form length octets accepted by the codec.
pub const MAX_LENGTH_OCTETS: usize = 4;

/// ASN.1 tags
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// ASN.1 `INTEGER`: universal class, primitive, tag number 2
    Integer = 0x02,

    /// ASN.1 `SEQUENCE`: universal class, constructed, tag number 16
    Sequence = 0x30,
}

impl Tag {
    /// Identifier octet for this tag.
    pub const fn octet(self) -> u8 {
        self as u8
    }

    /// Fail with [`Error::UnexpectedType`] unless `identifier` is this tag.
    pub fn assert_eq(self, identifier: u8) -> Result<()> {
        if identifier == self.octet() {
            Ok(())
        } else {
            Err(Error::UnexpectedType {
                expected: self,
                actual: identifier,
            })
        }
    }

    /// Error for a value of the other tag found where `self` was required.
    fn mismatch(self) -> Error {
        let actual = match self {
            Tag::Integer => Tag::Sequence,
            Tag::Sequence => Tag::Integer,
        };

        Error::UnexpectedType {
            expected: self,
            actual: actual.octet(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tag::Integer => "INTEGER",
            Tag::Sequence => "SEQUENCE",
        })
    }
}

/// Expected structure of a DER document.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Schema {
    /// A single `INTEGER`.
    Integer,

    /// A `SEQUENCE` of named children, decoded in order.
    Sequence(&'static [(&'static str, Schema)]),
}

impl Schema {
    /// Tag an element described by this schema must carry.
    pub const fn tag(&self) -> Tag {
        match self {
            Schema::Integer => Tag::Integer,
            Schema::Sequence(_) => Tag::Sequence,
        }
    }
}

/// Decoded DER element.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// Signed `INTEGER` value.
    Integer(BigInt),

    /// `SEQUENCE` children in schema order.
    Sequence(Vec<Field>),
}

/// Named child of a decoded `SEQUENCE`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    /// Field name taken from the schema.
    pub name: &'static str,

    /// Decoded value of the field.
    pub value: Value,
}

impl Value {
    /// Tag of this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Integer(_) => Tag::Integer,
            Value::Sequence(_) => Tag::Sequence,
        }
    }

    /// Borrow the integer, if this is an `INTEGER`.
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(n) => Some(n),
            Value::Sequence(_) => None,
        }
    }

    /// Look up a direct child of a `SEQUENCE` by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Sequence(fields) => fields
                .iter()
                .find(|field| field.name == name)
                .map(|field| &field.value),
            Value::Integer(_) => None,
        }
    }

    /// Take the integer out of an `INTEGER` value.
    pub fn into_integer(self) -> Result<BigInt> {
        match self {
            Value::Integer(n) => Ok(n),
            Value::Sequence(_) => Err(Tag::Integer.mismatch()),
        }
    }

    /// Take the children out of a `SEQUENCE` holding exactly `N` fields.
    pub fn into_fields<const N: usize>(self) -> Result<[Field; N]> {
        match self {
            Value::Sequence(fields) => fields
                .try_into()
                .map_err(|_| Error::MalformedEncoding("unexpected number of SEQUENCE fields")),
            Value::Integer(_) => Err(Tag::Sequence.mismatch()),
        }
    }
}

/// Types decoded from a DER document with a fixed [`Schema`].
pub trait FromValue: Sized {
    /// Structure of the DER document.
    const SCHEMA: Schema;

    /// Convert a [`Value`] produced by decoding with [`Self::SCHEMA`].
    fn from_value(value: Value) -> Result<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: Schema = Schema::Sequence(&[
        ("version", Schema::Integer),
        (
            "pair",
            Schema::Sequence(&[("a", Schema::Integer), ("b", Schema::Integer)]),
        ),
    ]);

    #[test]
    fn schema_tags() {
        assert_eq!(Schema::Integer.tag(), Tag::Integer);
        assert_eq!(NESTED.tag(), Tag::Sequence);
        assert_eq!(Tag::Sequence.octet(), 0x30);
        assert_eq!(Tag::Integer.octet(), 0x02);
    }

    #[test]
    fn nested_field_lookup() {
        let der = [
            0x30, 0x0b, // SEQUENCE
            0x02, 0x01, 0x01, // version = 1
            0x30, 0x06, // pair
            0x02, 0x01, 0x7f, // a = 127
            0x02, 0x01, 0x80, // b = -128
        ];

        let value = parse(&der, &NESTED).expect("decodes");
        assert_eq!(
            value.field("version").and_then(Value::as_integer),
            Some(&BigInt::from(1))
        );

        let pair = value.field("pair").expect("pair present");
        assert_eq!(pair.tag(), Tag::Sequence);
        assert_eq!(pair.field("a").and_then(Value::as_integer), Some(&BigInt::from(127)));
        assert_eq!(pair.field("b").and_then(Value::as_integer), Some(&BigInt::from(-128)));
        assert!(value.field("missing").is_none());
    }

    #[test]
    fn value_conversions_check_tags() {
        let int = Value::Integer(BigInt::from(3));
        assert_eq!(
            int.clone().into_fields::<1>(),
            Err(Error::UnexpectedType {
                expected: Tag::Sequence,
                actual: 0x02
            })
        );
        assert_eq!(int.into_integer(), Ok(BigInt::from(3)));

        let seq = Value::Sequence(vec![]);
        assert_eq!(
            seq.clone().into_integer(),
            Err(Error::UnexpectedType {
                expected: Tag::Integer,
                actual: 0x30
            })
        );
        assert!(matches!(
            seq.into_fields::<2>(),
            Err(Error::MalformedEncoding(_))
        ));
    }
}
