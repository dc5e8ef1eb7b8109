//! NIST P-521 elliptic curve (a.k.a. secp521r1)

use hex_literal::hex;

/// 521-bit scalars, serialized as 66 bytes
pub(super) const FIELD_BYTES_SIZE: usize = 66;

/// Order of the base point, big endian.
pub(super) const ORDER: [u8; FIELD_BYTES_SIZE] = hex!(
    "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
    "FA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E91386409"
);
