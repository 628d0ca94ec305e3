//! CRC parameter sets and named presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CrcError;

/// Complete description of a 16-bit CRC (Rocksoft model).
///
/// These seven fields fully determine the checksum; nothing else affects
/// the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrcParameters {
    /// Generator polynomial (normal form, top bit implicit).
    pub polynomial: u16,
    /// Seed loaded into the register before the first byte (xorIn).
    pub initial_value: u16,
    /// Xored into the register by the output transform (xorOut).
    pub final_xor: u16,
    /// Most significant bit of the register, `0x8000` for a 16-bit width.
    #[serde(default = "default_msb_mask")]
    pub msb_mask: u16,
    /// Mask applied to the final value, `0xFFFF` for a 16-bit width.
    #[serde(default = "default_output_mask")]
    pub output_mask: u16,
    /// Reverse the bits of each input byte before processing it.
    pub reflect_input: bool,
    /// Reverse the 16 register bits before the final xor.
    pub reflect_output: bool,
}

const fn default_msb_mask() -> u16 {
    0x8000
}

const fn default_output_mask() -> u16 {
    0xFFFF
}

impl CrcParameters {
    /// XModem: poly 0x1021, init 0x0000, no reflection.
    pub const XMODEM: Self = Self::new(0x1021, 0x0000, 0x0000, false, false);

    /// CCITT-False: poly 0x1021, init 0xFFFF, no reflection.
    pub const CCITT_FALSE: Self = Self::new(0x1021, 0xFFFF, 0x0000, false, false);

    /// Kermit: poly 0x1021, init 0x0000, reflected in and out.
    pub const KERMIT: Self = Self::new(0x1021, 0x0000, 0x0000, true, true);

    /// MCRF4XX: poly 0x1021, init 0xFFFF, reflected in and out.
    pub const MCRF4XX: Self = Self::new(0x1021, 0xFFFF, 0x0000, true, true);

    /// Modbus: poly 0x8005, init 0xFFFF, reflected in and out.
    pub const MODBUS: Self = Self::new(0x8005, 0xFFFF, 0x0000, true, true);

    /// Creates a 16-bit parameter set (`msb_mask = 0x8000`,
    /// `output_mask = 0xFFFF`).
    pub const fn new(
        polynomial: u16,
        initial_value: u16,
        final_xor: u16,
        reflect_input: bool,
        reflect_output: bool,
    ) -> Self {
        Self {
            polynomial,
            initial_value,
            final_xor,
            msb_mask: default_msb_mask(),
            output_mask: default_output_mask(),
            reflect_input,
            reflect_output,
        }
    }

    /// Overrides the MSB and output masks.
    pub const fn with_masks(mut self, msb_mask: u16, output_mask: u16) -> Self {
        self.msb_mask = msb_mask;
        self.output_mask = output_mask;
        self
    }
}

impl Default for CrcParameters {
    fn default() -> Self {
        Self::XMODEM
    }
}

/// Named CRC-16 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrcPreset {
    #[default]
    #[serde(rename = "xmodem")]
    XModem,
    CcittFalse,
    Kermit,
    Mcrf4xx,
    Modbus,
}

impl CrcPreset {
    /// Every preset, in display order.
    pub const ALL: [CrcPreset; 5] = [
        CrcPreset::XModem,
        CrcPreset::CcittFalse,
        CrcPreset::Kermit,
        CrcPreset::Mcrf4xx,
        CrcPreset::Modbus,
    ];

    /// Returns the parameter set for this preset.
    pub const fn params(self) -> CrcParameters {
        match self {
            CrcPreset::XModem => CrcParameters::XMODEM,
            CrcPreset::CcittFalse => CrcParameters::CCITT_FALSE,
            CrcPreset::Kermit => CrcParameters::KERMIT,
            CrcPreset::Mcrf4xx => CrcParameters::MCRF4XX,
            CrcPreset::Modbus => CrcParameters::MODBUS,
        }
    }

    /// Published check value: the CRC of ASCII `"123456789"`.
    pub const fn check(self) -> u16 {
        match self {
            CrcPreset::XModem => 0x31C3,
            CrcPreset::CcittFalse => 0x29B1,
            CrcPreset::Kermit => 0x2189,
            CrcPreset::Mcrf4xx => 0x6F91,
            CrcPreset::Modbus => 0x4B37,
        }
    }

    /// Canonical kebab-case name.
    pub const fn name(self) -> &'static str {
        match self {
            CrcPreset::XModem => "xmodem",
            CrcPreset::CcittFalse => "ccitt-false",
            CrcPreset::Kermit => "kermit",
            CrcPreset::Mcrf4xx => "mcrf4xx",
            CrcPreset::Modbus => "modbus",
        }
    }

    /// Computes this preset's CRC over `data`.
    pub fn checksum(self, data: &[u8]) -> u16 {
        crate::checksum(data, &self.params())
    }
}

impl From<CrcPreset> for CrcParameters {
    fn from(preset: CrcPreset) -> Self {
        preset.params()
    }
}

impl fmt::Display for CrcPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CrcPreset {
    type Err = CrcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "xmodem" | "x-modem" | "default" => Ok(CrcPreset::XModem),
            "ccitt-false" | "ccitt" => Ok(CrcPreset::CcittFalse),
            "kermit" => Ok(CrcPreset::Kermit),
            "mcrf4xx" => Ok(CrcPreset::Mcrf4xx),
            "modbus" => Ok(CrcPreset::Modbus),
            _ => Err(CrcError::UnknownPreset(s.to_string())),
        }
    }
}
