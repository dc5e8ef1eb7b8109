//! ECDSA signature transcoding and low-S canonicalization for Hyperledger
//! Fabric gateways.
//!
//! Clients of a Fabric gateway sign proposals and transactions themselves and
//! submit the signature either as ASN.1 DER or as a raw fixed-width `r‖s`
//! byte string. Before a signature is forwarded to peers and orderers it has
//! to be converted to DER and its `s` component normalized to the lower half
//! of the curve order, since Fabric rejects the malleable "high-S" twin of
//! every signature.
//!
//! This crate doesn't contain an implementation of ECDSA itself: it only
//! decodes, normalizes and re-encodes an already produced `(r, s)` pair. It
//! ships its own minimal DER codec for `INTEGER` and `SEQUENCE` (see
//! [`asn1`]) and a [`Signature`] type built on it.
//!
//! ## Usage
//!
//! ```
//! use fabric_ecdsa::{NamedCurve, Signature};
//! use hex_literal::hex;
//!
//! // s = n - 1 for P-256, i.e. in the upper half of the order
//! let der = hex!(
//!     "3026"
//!     "020141"
//!     "022100FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632550"
//! );
//!
//! let signature = Signature::from_der(&der)?;
//! let normalized = signature.normalize_s(NamedCurve::P256)?;
//! assert_eq!(normalized.to_der()?, hex!("3006020141020101"));
//! # Ok::<(), fabric_ecdsa::Error>(())
//! ```
//!
//! Supported curves are NIST P-256, P-384 and P-521 (secp256r1, secp384r1
//! and secp521r1).

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod asn1;
pub mod curve;
pub mod envelope;

mod error;
mod normalize;
mod signature;

pub use crate::{
    curve::NamedCurve,
    envelope::{SignatureEnvelope, SignatureFormat},
    error::{Error, Result},
    signature::{ECDSA_SIG_VALUE, Signature},
};

pub use num_bigint;

/// Canonicalize a DER-encoded signature the way it is done before a signed
/// transaction is broadcast: decode it, normalize `s` to the lower half of
/// the curve order and re-encode it.
///
/// Without a `curve` the order is inferred from the magnitude of `s`.
pub fn canonicalize_der(der: &[u8], curve: Option<NamedCurve>) -> Result<Vec<u8>> {
    let signature = Signature::from_der(der)?;

    let normalized = match curve {
        Some(curve) => signature.normalize_s(curve)?,
        None => signature.normalize_s_inferred()?,
    };

    normalized.to_der()
}
