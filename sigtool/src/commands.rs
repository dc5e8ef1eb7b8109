//! Subcommand implementations over decoded input bytes.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use fabric_ecdsa::{NamedCurve, Signature, SignatureEnvelope, SignatureFormat};
use tracing::{debug, info};

/// Decode a signature, resolving the curve of raw signatures from their
/// length when none was given.
fn read_signature(
    bytes: &[u8],
    format: SignatureFormat,
    curve: Option<NamedCurve>,
) -> Result<(Signature, Option<NamedCurve>)> {
    match format {
        SignatureFormat::Der => {
            let signature = Signature::from_der(bytes).context("failed to decode DER signature")?;
            Ok((signature, curve))
        }
        SignatureFormat::Raw => {
            let curve = raw_curve(bytes.len(), curve)?;
            let signature =
                Signature::from_raw(bytes, curve).context("failed to decode raw signature")?;
            Ok((signature, Some(curve)))
        }
    }
}

fn raw_curve(len: usize, curve: Option<NamedCurve>) -> Result<NamedCurve> {
    match curve {
        Some(curve) => Ok(curve),
        None => {
            let curve = NamedCurve::from_raw_len(len)
                .with_context(|| format!("no supported curve has {len}-byte raw signatures"))?;
            debug!(%curve, len, "curve resolved from raw signature length");
            Ok(curve)
        }
    }
}

fn lower_s(signature: &Signature, curve: Option<NamedCurve>) -> Result<Signature> {
    let normalized = match curve {
        Some(curve) => signature.normalize_s(curve),
        None => signature.normalize_s_inferred(),
    }
    .context("failed to normalize signature")?;

    if normalized != *signature {
        info!("high-S signature replaced by its low-S twin");
    }

    Ok(normalized)
}

/// Low-S normalize a signature and return it as DER.
pub fn normalize(
    bytes: &[u8],
    format: SignatureFormat,
    curve: Option<NamedCurve>,
) -> Result<Vec<u8>> {
    let (signature, curve) = read_signature(bytes, format, curve)?;
    let normalized = lower_s(&signature, curve)?;
    Ok(normalized.to_der()?)
}

/// Describe the components of a signature, one `key: value` per line.
pub fn inspect(bytes: &[u8], format: SignatureFormat, curve: Option<NamedCurve>) -> Result<String> {
    let (signature, curve) = read_signature(bytes, format, curve)?;

    let curve = match curve {
        Some(curve) => Some(curve),
        None => NamedCurve::infer_from_scalar(signature.s()).ok(),
    };

    let mut report = String::new();
    writeln!(report, "r: {:x}", signature.r())?;
    writeln!(report, "s: {:x}", signature.s())?;

    match curve {
        Some(curve) => {
            writeln!(report, "curve: {curve}")?;
            writeln!(report, "low-s: {}", signature.is_low_s(curve))?;
        }
        None => writeln!(report, "curve: unsupported")?,
    }

    Ok(report)
}

/// Re-encode a signature in the `to` format. Raw output needs a curve, which
/// is taken from `curve` or from the length of a raw input.
pub fn convert(
    bytes: &[u8],
    format: SignatureFormat,
    curve: Option<NamedCurve>,
    to: SignatureFormat,
) -> Result<Vec<u8>> {
    let (signature, curve) = read_signature(bytes, format, curve)?;
    debug!(from = %format, %to, "converting signature");

    match to {
        SignatureFormat::Der => Ok(signature.to_der()?),
        SignatureFormat::Raw => {
            let curve = curve.context("--curve is required for raw output")?;
            Ok(signature.to_raw(curve)?)
        }
    }
}

/// Decode a JSON envelope, low-S normalize the signature and return it as DER.
pub fn envelope(json: &str, curve: Option<NamedCurve>) -> Result<Vec<u8>> {
    let envelope: SignatureEnvelope =
        serde_json::from_str(json.trim()).context("failed to parse signature envelope")?;
    debug!(format = %envelope.format(), len = envelope.value().len(), "envelope decoded");

    normalize(envelope.value(), envelope.format(), curve)
}
