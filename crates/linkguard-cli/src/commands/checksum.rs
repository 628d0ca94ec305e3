//! Checksum command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Args};
use linkguard::{CrcParameters, CrcPreset, compute_crc};
use linkguard_config::LinkguardConfig;

use crate::style::{print_field, print_parameters};

#[derive(Args)]
#[command(group(ArgGroup::new("input").required(true).args(["hex", "text", "file"])))]
pub struct ChecksumArgs {
    /// Input bytes as hex (whitespace and a leading 0x are ignored).
    #[arg(long)]
    pub hex: Option<String>,

    /// Input as UTF-8 text.
    #[arg(long)]
    pub text: Option<String>,

    /// Read input from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub crc: CrcArgs,

    /// First byte of the range to checksum.
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Number of bytes to checksum (default: to the end of the input).
    #[arg(long)]
    pub length: Option<usize>,

    /// Print the parameters alongside the result.
    #[arg(short, long)]
    pub verbose: bool,
}

/// CRC selection shared by commands that compute checksums.
#[derive(Args)]
pub struct CrcArgs {
    /// Named preset (xmodem, ccitt-false, kermit, mcrf4xx, modbus).
    #[arg(short, long, conflicts_with = "poly")]
    pub preset: Option<CrcPreset>,

    /// Custom polynomial, e.g. 0x1021.
    #[arg(long, value_parser = parse_u16)]
    pub poly: Option<u16>,

    /// Custom initial value (with --poly).
    #[arg(long, value_parser = parse_u16, requires = "poly")]
    pub init: Option<u16>,

    /// Custom final xor (with --poly).
    #[arg(long, value_parser = parse_u16, requires = "poly")]
    pub xor_out: Option<u16>,

    /// Reflect input bytes (with --poly).
    #[arg(long, requires = "poly")]
    pub refin: bool,

    /// Reflect the output register (with --poly).
    #[arg(long, requires = "poly")]
    pub refout: bool,
}

impl CrcArgs {
    /// Command-line parameters win over the configured ones.
    pub fn resolve(&self, config: &LinkguardConfig) -> CrcParameters {
        if let Some(poly) = self.poly {
            return CrcParameters::new(
                poly,
                self.init.unwrap_or(0),
                self.xor_out.unwrap_or(0),
                self.refin,
                self.refout,
            );
        }
        self.preset
            .map_or_else(|| config.crc.parameters(), CrcPreset::params)
    }
}

pub fn run(args: &ChecksumArgs, config: &LinkguardConfig) -> Result<()> {
    let data = read_input(args)?;
    let params = args.crc.resolve(config);
    let length = args.length.unwrap_or(data.len().saturating_sub(args.start));

    tracing::debug!(bytes = data.len(), start = args.start, length, "computing checksum");

    let crc = compute_crc(&data, args.start, length, &params)
        .with_context(|| format!("cannot checksum {} input bytes", data.len()))?;

    if args.verbose {
        print_parameters(&params);
        print_field("Range", format_args!("{}..{}", args.start, args.start + length));
    }
    println!("{crc:#06X}");
    Ok(())
}

fn read_input(args: &ChecksumArgs) -> Result<Vec<u8>> {
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }
    if let Some(text) = &args.text {
        return Ok(text.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        return std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()));
    }
    bail!("no input given: use --hex, --text or --file")
}

/// Parses `0x`-prefixed hex or plain decimal.
fn parse_u16(value: &str) -> Result<u16, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("invalid 16-bit value '{value}': {e}"))
}

/// Parses hex text such as `ABCDEF`, `0xAB CD EF` or `ab:cd:ef`.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();

    if !digits.is_ascii() {
        bail!("hex input contains non-ASCII characters");
    }
    if digits.len() % 2 != 0 {
        bail!("hex input has an odd number of digits ({})", digits.len());
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .with_context(|| format!("invalid hex byte '{}'", &digits[i..i + 2]))
        })
        .collect()
}
