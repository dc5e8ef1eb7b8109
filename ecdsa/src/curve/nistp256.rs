//! NIST P-256 elliptic curve (a.k.a. prime256v1, secp256r1)

use hex_literal::hex;

/// 256-bit (32-byte) scalars
pub(super) const FIELD_BYTES_SIZE: usize = 32;

/// Order of the base point, big endian.
pub(super) const ORDER: [u8; FIELD_BYTES_SIZE] =
    hex!("FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551");
