//! Elliptic curves whose group orders bound ECDSA signature scalars.
//!
//! Only the order `n` and the scalar width of each curve are needed here:
//! no curve arithmetic is performed by this crate.

mod nistp256;
mod nistp384;
mod nistp521;

use crate::{Error, Result};
use core::{fmt, str::FromStr};
use num_bigint::{BigInt, Sign};
use std::sync::LazyLock;

/// Group order and half order of every curve, indexed like [`NamedCurve::ALL`].
static ORDERS: LazyLock<[(BigInt, BigInt); 3]> = LazyLock::new(|| {
    NamedCurve::ALL.map(|curve| {
        let order = BigInt::from_bytes_be(Sign::Plus, curve.order_bytes());
        let half = &order >> 1u32;
        (order, half)
    })
});

/// Named elliptic curves supported for low-S normalization and raw
/// (fixed-width) signatures.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum NamedCurve {
    /// NIST P-256, a.k.a. secp256r1 / prime256v1
    P256,

    /// NIST P-384, a.k.a. secp384r1
    P384,

    /// NIST P-521, a.k.a. secp521r1
    P521,
}

impl NamedCurve {
    /// All supported curves, ordered by increasing group order.
    pub const ALL: [NamedCurve; 3] = [NamedCurve::P256, NamedCurve::P384, NamedCurve::P521];

    /// SEC 2 name of the curve.
    pub const fn name(self) -> &'static str {
        match self {
            NamedCurve::P256 => "secp256r1",
            NamedCurve::P384 => "secp384r1",
            NamedCurve::P521 => "secp521r1",
        }
    }

    /// Size of a serialized scalar in bytes. This is also half the size of a
    /// raw `r‖s` signature.
    pub const fn field_bytes_size(self) -> usize {
        match self {
            NamedCurve::P256 => nistp256::FIELD_BYTES_SIZE,
            NamedCurve::P384 => nistp384::FIELD_BYTES_SIZE,
            NamedCurve::P521 => nistp521::FIELD_BYTES_SIZE,
        }
    }

    /// Size of a raw `r‖s` signature in bytes.
    pub const fn raw_signature_size(self) -> usize {
        self.field_bytes_size() * 2
    }

    /// Big endian bytes of the group order.
    pub const fn order_bytes(self) -> &'static [u8] {
        match self {
            NamedCurve::P256 => &nistp256::ORDER,
            NamedCurve::P384 => &nistp384::ORDER,
            NamedCurve::P521 => &nistp521::ORDER,
        }
    }

    /// Group order `n`.
    pub fn order(self) -> &'static BigInt {
        &ORDERS[self.index()].0
    }

    /// Half of the group order, `n >> 1`.
    pub fn half_order(self) -> &'static BigInt {
        &ORDERS[self.index()].1
    }

    const fn index(self) -> usize {
        match self {
            NamedCurve::P256 => 0,
            NamedCurve::P384 => 1,
            NamedCurve::P521 => 2,
        }
    }

    /// Pick the first curve, by increasing order, whose order is larger than
    /// `s`.
    ///
    /// This is a compatibility fallback for callers which carry no curve
    /// context: a small `s` produced on P-384 or P-521 is attributed to
    /// P-256.
    pub fn infer_from_scalar(s: &BigInt) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|curve| s < curve.order())
            .ok_or(Error::UnsupportedCurve)
    }

    /// Curve whose raw `r‖s` signature size is `len` bytes.
    pub fn from_raw_len(len: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|curve| curve.raw_signature_size() == len)
    }
}

impl fmt::Display for NamedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedCurve {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "secp256r1" | "prime256v1" | "p-256" | "p256" | "nistp256" => Ok(NamedCurve::P256),
            "secp384r1" | "p-384" | "p384" | "nistp384" => Ok(NamedCurve::P384),
            "secp521r1" | "p-521" | "p521" | "nistp521" => Ok(NamedCurve::P521),
            _ => Err(Error::UnknownCurve(name.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn order_widths() {
        for curve in NamedCurve::ALL {
            assert_eq!(curve.order_bytes().len(), curve.field_bytes_size());
        }

        assert_eq!(NamedCurve::P256.order().bits(), 256);
        assert_eq!(NamedCurve::P384.order().bits(), 384);
        assert_eq!(NamedCurve::P521.order().bits(), 521);
    }

    #[test]
    fn half_orders() {
        assert_eq!(
            NamedCurve::P256.half_order(),
            &BigInt::from_bytes_be(
                Sign::Plus,
                &hex!("7FFFFFFF800000007FFFFFFFFFFFFFFFDE737D56D38BCF4279DCE5617E3192A8")
            )
        );
        assert_eq!(
            NamedCurve::P384.half_order(),
            &BigInt::from_bytes_be(
                Sign::Plus,
                &hex!(
                    "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE3B1A6C0FA1B96EF"
                    "AC0D06D9245853BD76760CB5666294B9"
                )
            )
        );
    }

    #[test]
    fn orders_are_built_once() {
        for curve in NamedCurve::ALL {
            assert!(core::ptr::eq(curve.order(), curve.order()));
            assert!(core::ptr::eq(curve.half_order(), curve.half_order()));
            assert_eq!(curve.half_order(), &(curve.order() >> 1u32));
        }
    }

    #[test]
    fn inference_by_magnitude() {
        let p256 = NamedCurve::P256.order();
        let p384 = NamedCurve::P384.order();
        let p521 = NamedCurve::P521.order();

        assert_eq!(NamedCurve::infer_from_scalar(&BigInt::from(1)), Ok(NamedCurve::P256));
        assert_eq!(
            NamedCurve::infer_from_scalar(&(p256 - 1u32)),
            Ok(NamedCurve::P256)
        );
        assert_eq!(NamedCurve::infer_from_scalar(p256), Ok(NamedCurve::P384));
        assert_eq!(NamedCurve::infer_from_scalar(p384), Ok(NamedCurve::P521));
        assert_eq!(
            NamedCurve::infer_from_scalar(p521),
            Err(Error::UnsupportedCurve)
        );
    }

    #[test]
    fn raw_lengths() {
        assert_eq!(NamedCurve::from_raw_len(64), Some(NamedCurve::P256));
        assert_eq!(NamedCurve::from_raw_len(96), Some(NamedCurve::P384));
        assert_eq!(NamedCurve::from_raw_len(132), Some(NamedCurve::P521));
        assert_eq!(NamedCurve::from_raw_len(65), None);
    }

    #[test]
    fn names() {
        assert_eq!("secp256r1".parse(), Ok(NamedCurve::P256));
        assert_eq!("prime256v1".parse(), Ok(NamedCurve::P256));
        assert_eq!("P-384".parse(), Ok(NamedCurve::P384));
        assert_eq!("SECP521R1".parse(), Ok(NamedCurve::P521));
        assert_eq!(
            "secp256k1".parse::<NamedCurve>(),
            Err(Error::UnknownCurve("secp256k1".into()))
        );

        for curve in NamedCurve::ALL {
            assert_eq!(curve.to_string().parse(), Ok(curve));
        }
    }
}
