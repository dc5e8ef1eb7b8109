//! Schema-driven DER decoder.

use super::{Field, FromValue, MAX_LENGTH_OCTETS, Schema, Value, int};
use crate::{Error, Result};

/// Identifier and length octets of a TLV element.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Header {
    /// Identifier octet.
    pub identifier: u8,

    /// Number of bytes taken by the identifier and length octets.
    pub header_len: usize,

    /// Content length announced by the length octets.
    pub length: usize,
}

impl Header {
    /// Parse the header at the start of `input`, checking that the announced
    /// content fits in the rest of the buffer.
    pub fn parse(input: &[u8]) -> Result<Self> {
        let [identifier, first, rest @ ..] = input else {
            return Err(Error::MalformedEncoding(
                "need at least an identifier and a length octet",
            ));
        };

        let (length, header_len) = if first & 0x80 == 0 {
            (usize::from(*first), 2)
        } else {
            let count = usize::from(first & 0x7f);

            if count == 0 {
                return Err(Error::MalformedEncoding("indefinite length is not DER"));
            }

            if count > MAX_LENGTH_OCTETS {
                return Err(Error::MalformedEncoding(
                    "length needs more than 4 length octets",
                ));
            }

            let octets = rest
                .get(..count)
                .ok_or(Error::MalformedEncoding("truncated length octets"))?;

            let length = octets
                .iter()
                .fold(0usize, |acc, &octet| (acc << 8) | usize::from(octet));

            (length, count + 2)
        };

        let available = input.len() - header_len;

        if length > available {
            return Err(Error::LengthOverflow {
                declared: length,
                available,
            });
        }

        Ok(Self {
            identifier: *identifier,
            header_len,
            length,
        })
    }

    /// Total span of the element: header plus content.
    pub fn encoded_len(&self) -> usize {
        self.header_len + self.length
    }
}

/// Decode a DER document according to `schema`.
///
/// Bytes after the root element are ignored.
pub fn parse(input: &[u8], schema: &Schema) -> Result<Value> {
    parse_element(input, schema).map(|(value, _)| value)
}

/// Decode a DER document into `T` using [`FromValue::SCHEMA`].
pub fn decode<T: FromValue>(input: &[u8]) -> Result<T> {
    T::from_value(parse(input, &T::SCHEMA)?)
}

/// Decode the element at the front of `input`, returning the bytes after it.
fn parse_element<'a>(input: &'a [u8], schema: &Schema) -> Result<(Value, &'a [u8])> {
    let header = Header::parse(input)?;
    schema.tag().assert_eq(header.identifier)?;

    let (element, rest) = input.split_at(header.encoded_len());
    let content = &element[header.header_len..];

    let value = match schema {
        Schema::Integer => Value::Integer(int::decode_signed(content)),
        Schema::Sequence(children) => {
            let mut cursor = content;
            let mut fields = Vec::with_capacity(children.len());

            for (name, child) in children.iter() {
                let (value, remaining) = parse_element(cursor, child)?;
                fields.push(Field { name: *name, value });
                cursor = remaining;
            }

            Value::Sequence(fields)
        }
    };

    Ok((value, rest))
}
