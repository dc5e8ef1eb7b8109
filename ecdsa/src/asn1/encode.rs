//! DER encoder for `INTEGER` and `SEQUENCE`.

use super::{MAX_LENGTH_OCTETS, Tag, int};
use crate::{Error, Result};
use num_bigint::BigInt;

/// Encode DER length octets.
///
/// Lengths below 128 take the single-octet short form. Longer content uses
/// the long form with the minimal number of big endian octets, up to
/// [`MAX_LENGTH_OCTETS`]. Longer content fails with
/// [`Error::MalformedEncoding`].
pub fn encode_length(length: usize) -> Result<Vec<u8>> {
    if let Ok(short) = u8::try_from(length) {
        if short < 0x80 {
            return Ok(vec![short]);
        }
    }

    let too_long = || Error::MalformedEncoding("content needs more than 4 length octets");

    let octets = u32::try_from(length).map_err(|_| too_long())?.to_be_bytes();

    let skip = octets.iter().take_while(|&&octet| octet == 0).count();
    let count = MAX_LENGTH_OCTETS - skip;

    let mut out = Vec::with_capacity(1 + count);
    out.push(0x80 | u8::try_from(count).map_err(|_| too_long())?);
    out.extend_from_slice(&octets[skip..]);
    Ok(out)
}

/// Wrap `content` in a TLV element with the given tag.
fn encode_tlv(tag: Tag, content: &[u8]) -> Result<Vec<u8>> {
    let length = encode_length(content.len())?;

    let mut out = Vec::with_capacity(1 + length.len() + content.len());
    out.push(tag.octet());
    out.extend_from_slice(&length);
    out.extend_from_slice(content);
    Ok(out)
}

/// Encode `value` as a DER `INTEGER` element.
pub fn encode_integer(value: &BigInt) -> Result<Vec<u8>> {
    encode_tlv(Tag::Integer, &int::encode_signed(value))
}

/// Encode a DER `SEQUENCE` element from already encoded children.
pub fn encode_sequence(children: &[&[u8]]) -> Result<Vec<u8>> {
    encode_tlv(Tag::Sequence, &children.concat())
}
