//! Normalization of the `s` component of ECDSA signatures to the lower half
//! of the curve order.
//!
//! Both `(r, s)` and `(r, n - s)` verify against the same key and message.
//! Fabric peers and orderers only accept the "low-S" form, so every
//! signature forwarded to the network is normalized first.

use crate::{Error, Result, Signature, curve::NamedCurve};
use num_bigint::BigInt;
use num_traits::Signed;

impl Signature {
    /// Normalize `s` to the lower half of `curve`'s order: if `s > n/2` the
    /// result carries `n - s`, otherwise it is an unchanged copy.
    ///
    /// Fails with [`Error::ScalarOutOfRange`] if `s` is negative or not below
    /// `n`.
    pub fn normalize_s(&self, curve: NamedCurve) -> Result<Self> {
        let order = curve.order();

        if self.s().is_negative() || self.s() >= order {
            return Err(Error::ScalarOutOfRange {
                curve: curve.name(),
            });
        }

        Ok(self.with_s(lower_half(self.s(), curve)))
    }

    /// Normalize `s` against the order of the curve inferred from the
    /// magnitude of `s` (see [`NamedCurve::infer_from_scalar`]).
    ///
    /// Prefer [`Signature::normalize_s`] whenever the curve is known.
    pub fn normalize_s_inferred(&self) -> Result<Self> {
        let curve = NamedCurve::infer_from_scalar(self.s())?;
        Ok(self.with_s(lower_half(self.s(), curve)))
    }

    /// In-place form of [`Signature::normalize_s_inferred`]. On error `self`
    /// is left untouched.
    pub fn lower_s(&mut self) -> Result<()> {
        *self = self.normalize_s_inferred()?;
        Ok(())
    }

    /// Is `s` already in the lower half of `curve`'s order?
    pub fn is_low_s(&self, curve: NamedCurve) -> bool {
        !self.s().is_negative() && self.s() <= curve.half_order()
    }

    fn with_s(&self, s: BigInt) -> Self {
        Self::from_components(self.r().clone(), s)
    }
}

fn lower_half(s: &BigInt, curve: NamedCurve) -> BigInt {
    if s > curve.half_order() {
        curve.order() - s
    } else {
        s.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use num_bigint::Sign;

    fn p256(bytes: &[u8]) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, bytes)
    }

    #[test]
    fn already_normalized() {
        let sig = Signature::from_components(1, 1);
        assert_eq!(sig.normalize_s(NamedCurve::P256), Ok(sig.clone()));
        assert_eq!(sig.normalize_s_inferred(), Ok(sig.clone()));
        assert!(sig.is_low_s(NamedCurve::P256));
    }

    #[test]
    fn not_normalized() {
        let n = NamedCurve::P256.order();
        let s_hi = p256(&hex!(
            "ee2f11ef8cb00a49617d1357f4d55641090a48f201e9b959c48f6f6bec6f938f"
        ));
        let sig = Signature::from_components(65, s_hi.clone());
        assert!(!sig.is_low_s(NamedCurve::P256));

        let normalized = sig.normalize_s(NamedCurve::P256).expect("in range");
        assert_eq!(normalized.r(), &BigInt::from(65));
        assert_eq!(normalized.s(), &(n - s_hi));
        assert!(normalized.is_low_s(NamedCurve::P256));
    }

    #[test]
    fn half_order_boundary() {
        let half = NamedCurve::P256.half_order();

        let at_half = Signature::from_components(1, half.clone());
        assert_eq!(at_half.normalize_s(NamedCurve::P256), Ok(at_half.clone()));

        let above_half = Signature::from_components(1, half + 1u32);
        let normalized = above_half.normalize_s(NamedCurve::P256).expect("in range");
        assert_eq!(normalized.s(), half);
    }

    #[test]
    fn explicit_curve_rejects_out_of_range_s() {
        let sig = Signature::from_components(1, NamedCurve::P256.order().clone());
        assert_eq!(
            sig.normalize_s(NamedCurve::P256),
            Err(Error::ScalarOutOfRange { curve: "secp256r1" })
        );
        assert!(sig.normalize_s(NamedCurve::P384).is_ok());

        let negative = Signature::from_components(1, -5);
        assert_eq!(
            negative.normalize_s(NamedCurve::P256),
            Err(Error::ScalarOutOfRange { curve: "secp256r1" })
        );
    }

    #[test]
    fn explicit_curve_differs_from_inference_for_small_s() {
        // Above the P-256 order: inference picks P-384, where `s` is already
        // in the lower half.
        let s: BigInt = NamedCurve::P256.order() + 1u32;
        let sig = Signature::from_components(1, s.clone());
        assert_eq!(sig.normalize_s_inferred().map(|sig| sig.s().clone()), Ok(s.clone()));

        // Below the P-256 order but above its half: inference normalizes
        // against P-256, an explicit P-384 leaves `s` untouched.
        let s: BigInt = NamedCurve::P256.half_order() + 1u32;
        let sig = Signature::from_components(1, s.clone());
        assert_eq!(
            sig.normalize_s_inferred().map(|sig| sig.s().clone()),
            Ok(NamedCurve::P256.order() - &s)
        );
        assert_eq!(
            sig.normalize_s(NamedCurve::P384).map(|sig| sig.s().clone()),
            Ok(s)
        );
    }

    #[test]
    fn inference_walks_the_curve_table() {
        for curve in NamedCurve::ALL {
            let n = curve.order();
            let sig = Signature::from_components(1, n - 1u32);
            let normalized = sig.normalize_s_inferred().expect("below n");
            assert_eq!(normalized.s(), &BigInt::from(1), "{curve}");
        }
    }

    #[test]
    fn inference_rejects_s_beyond_every_order() {
        let mut sig = Signature::from_components(7, NamedCurve::P521.order().clone());
        let before = sig.clone();
        assert_eq!(sig.lower_s(), Err(Error::UnsupportedCurve));
        assert_eq!(sig, before);
    }

    #[test]
    fn lower_s_in_place_is_idempotent() {
        let mut sig = Signature::from_components(65, NamedCurve::P384.order() - 2u32);
        sig.lower_s().expect("supported");
        assert_eq!(sig.s(), &BigInt::from(2));

        let once = sig.clone();
        sig.lower_s().expect("supported");
        assert_eq!(sig, once);
    }

    #[test]
    fn inference_keeps_negative_s() {
        let sig = Signature::from_components(1, -6);
        assert_eq!(sig.normalize_s_inferred(), Ok(sig.clone()));
        assert!(!sig.is_low_s(NamedCurve::P256));
    }
}
