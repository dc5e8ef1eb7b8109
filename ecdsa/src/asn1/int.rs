//! Two's-complement conversion between `BigInt` and big endian `INTEGER`
//! content octets.

use num_bigint::{BigInt, BigUint, Sign};

/// Negate a big endian two's-complement byte string in place: invert every
/// bit, then add one with carry from the least significant byte.
pub(crate) fn twos_complement(bytes: &mut [u8]) {
    for byte in bytes.iter_mut() {
        *byte = !*byte;
    }

    for byte in bytes.iter_mut().rev() {
        let (sum, carry) = byte.overflowing_add(1);
        *byte = sum;

        if !carry {
            break;
        }
    }
}

/// Decode `INTEGER` content octets. Empty content is zero.
pub(crate) fn decode_signed(content: &[u8]) -> BigInt {
    match content.first() {
        None => BigInt::default(),
        Some(&lead) if lead & 0x80 != 0 => {
            let mut magnitude = content.to_vec();
            twos_complement(&mut magnitude);
            BigInt::from_biguint(Sign::Minus, BigUint::from_bytes_be(&magnitude))
        }
        Some(_) => BigInt::from(BigUint::from_bytes_be(content)),
    }
}

/// Encode `value` as minimal `INTEGER` content octets.
pub(crate) fn encode_signed(value: &BigInt) -> Vec<u8> {
    // `to_bytes_be` yields the minimal magnitude, `[0]` for zero
    let (sign, mut bytes) = value.to_bytes_be();

    if sign == Sign::Minus {
        twos_complement(&mut bytes);

        if bytes[0] & 0x80 == 0 {
            bytes.insert(0, 0xff);
        }
    } else if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0x00);
    }

    bytes
}
