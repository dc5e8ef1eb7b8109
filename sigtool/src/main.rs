//! `sigtool`: inspect, convert and low-S canonicalize ECDSA signatures
//! before they are submitted to a Fabric network.

mod commands;

use std::io::{self, Read};

use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use clap::{Parser, Subcommand};
use fabric_ecdsa::{NamedCurve, SignatureFormat};
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Parser)]
#[command(name = "sigtool", version)]
#[command(about = "Inspect, convert and low-S canonicalize ECDSA signatures")]
#[command(long_about = "
Inspect, convert and low-S canonicalize ECDSA signatures.

Signatures are read as base64 from the command line, or from stdin when the
argument is omitted. Results are written to stdout as base64.

EXAMPLES:
    # Canonicalize a DER signature, inferring the curve from `s`
    sigtool normalize MCYCAUECIQD/////AAAAAP//////////vOb6racXnoTzucrC/GMlUA==

    # Convert a raw P-384 signature to DER
    sigtool convert --format raw --curve secp384r1 --to der < sig.b64

    # Canonicalize a JSON envelope
    echo '{\"type\":\"der\",\"value\":\"...\"}' | sigtool envelope

ENVIRONMENT VARIABLES:
    FABRIC_SIG_CURVE    Default curve for --curve
    RUST_LOG            Logging level (debug, info, warn, error)
")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize `s` to the lower half of the curve order and print canonical DER
    Normalize {
        /// Base64 signature (read from stdin if omitted)
        input: Option<String>,

        #[command(flatten)]
        signature: SignatureArgs,
    },

    /// Print the components of a signature
    Inspect {
        /// Base64 signature (read from stdin if omitted)
        input: Option<String>,

        #[command(flatten)]
        signature: SignatureArgs,
    },

    /// Convert a signature between DER and raw `r||s`
    Convert {
        /// Base64 signature (read from stdin if omitted)
        input: Option<String>,

        #[command(flatten)]
        signature: SignatureArgs,

        /// Output format: der or raw
        #[arg(long, value_name = "FORMAT")]
        to: SignatureFormat,
    },

    /// Canonicalize a JSON envelope `{"type": "der"|"raw", "value": "<base64>"}`
    Envelope {
        /// JSON envelope (read from stdin if omitted)
        input: Option<String>,

        /// Curve of the signature (inferred if omitted)
        #[arg(short, long, env = "FABRIC_SIG_CURVE", value_name = "CURVE")]
        curve: Option<NamedCurve>,
    },
}

#[derive(clap::Args)]
struct SignatureArgs {
    /// Input format: der or raw
    #[arg(short, long, default_value = "der", value_name = "FORMAT")]
    format: SignatureFormat,

    /// Curve of the signature, e.g. secp256r1 or P-384 (inferred if omitted)
    #[arg(short, long, env = "FABRIC_SIG_CURVE", value_name = "CURVE")]
    curve: Option<NamedCurve>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Normalize { input, signature } => {
            let bytes = read_base64(input)?;
            let der = commands::normalize(&bytes, signature.format, signature.curve)?;
            println!("{}", STANDARD.encode(der));
        }
        Command::Inspect { input, signature } => {
            let bytes = read_base64(input)?;
            print!(
                "{}",
                commands::inspect(&bytes, signature.format, signature.curve)?
            );
        }
        Command::Convert {
            input,
            signature,
            to,
        } => {
            let bytes = read_base64(input)?;
            let out = commands::convert(&bytes, signature.format, signature.curve, to)?;
            println!("{}", STANDARD.encode(out));
        }
        Command::Envelope { input, curve } => {
            let json = read_input(input)?;
            let der = commands::envelope(&json, curve)?;
            println!("{}", STANDARD.encode(der));
        }
    }

    Ok(())
}

/// Take the positional argument, or all of stdin when it is absent.
fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(arg) => Ok(arg),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn read_base64(arg: Option<String>) -> Result<Vec<u8>> {
    let text = read_input(arg)?;
    STANDARD
        .decode(text.trim())
        .context("input is not valid base64")
}
