//! NIST P-384 elliptic curve (a.k.a. secp384r1)

use hex_literal::hex;

/// 384-bit (48-byte) scalars
pub(super) const FIELD_BYTES_SIZE: usize = 48;

/// Order of the base point, big endian.
pub(super) const ORDER: [u8; FIELD_BYTES_SIZE] = hex!(
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
    "C7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973"
);
