//! Bit-serial CRC-16 computation.
//!
//! The register is updated one input bit at a time, most significant bit
//! first, without a lookup table:
//!
//! ```text
//! for each bit j of the (optionally reflected) input byte, MSB first:
//!     bit       = register & msb_mask
//!     register <<= 1
//!     if byte & j  { bit ^= msb_mask }
//!     if bit != 0  { register ^= polynomial }
//! ```
//!
//! The output transform reflects the register when `reflect_output` is set,
//! then applies `final_xor` and `output_mask`. It never mutates the running
//! register, so [`CrcEngine::finalize`] can be called any number of times.

use crate::{CrcError, CrcParameters, CrcPreset, Reflect};

/// Feeds one byte through the register.
#[inline]
fn step(mut register: u16, byte: u8, params: &CrcParameters) -> u16 {
    let byte = if params.reflect_input {
        byte.reflect()
    } else {
        byte
    };

    let mut j: u8 = 0x80;
    while j > 0 {
        let mut bit = register & params.msb_mask;
        register <<= 1;
        if byte & j != 0 {
            bit ^= params.msb_mask;
        }
        if bit != 0 {
            register ^= params.polynomial;
        }
        j >>= 1;
    }
    register
}

/// Applies the output transform to a copy of the register.
#[inline]
fn output(register: u16, params: &CrcParameters) -> u16 {
    let register = if params.reflect_output {
        register.reflect()
    } else {
        register
    };
    (register ^ params.final_xor) & params.output_mask
}

/// Computes the CRC of `data[start..start + length]`.
///
/// A zero `length` returns `params.initial_value` without looking at `data`
/// or `start`. Otherwise the range must lie inside `data`.
///
/// # Examples
///
/// ```
/// use linkguard_crc::{CrcParameters, compute_crc};
///
/// let frame = b"\x02Hello World\x03";
/// let crc = compute_crc(frame, 1, 11, &CrcParameters::XMODEM).unwrap();
/// assert_eq!(crc, 0x992A);
/// ```
pub fn compute_crc(
    data: &[u8],
    start: usize,
    length: usize,
    params: &CrcParameters,
) -> Result<u16, CrcError> {
    if length == 0 {
        return Ok(params.initial_value);
    }

    let end = start
        .checked_add(length)
        .filter(|&end| end <= data.len())
        .ok_or(CrcError::RangeOutOfBounds {
            start,
            length,
            len: data.len(),
        })?;

    Ok(checksum(&data[start..end], params))
}

/// Computes the CRC of the whole slice.
///
/// An empty slice returns `params.initial_value`.
pub fn checksum(data: &[u8], params: &CrcParameters) -> u16 {
    if data.is_empty() {
        return params.initial_value;
    }

    let register = data
        .iter()
        .fold(params.initial_value, |register, &byte| {
            step(register, byte, params)
        });
    output(register, params)
}

/// Incremental CRC-16 accumulator.
///
/// Not internally synchronized: mutation goes through `&mut self`, so share
/// one engine across threads only behind your own lock, or use one engine
/// per thread.
///
/// # Examples
///
/// ```
/// use linkguard_crc::{CrcEngine, CrcParameters};
///
/// let mut engine = CrcEngine::new(CrcParameters::XMODEM);
/// engine.update_slice(b"Hello ");
/// engine.update_slice(b"World");
/// assert_eq!(engine.finalize(), 0x992A);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrcEngine {
    params: CrcParameters,
    register: u16,
}

impl CrcEngine {
    /// Creates an engine with its register seeded to `params.initial_value`.
    #[must_use]
    pub fn new(params: CrcParameters) -> Self {
        Self {
            params,
            register: params.initial_value,
        }
    }

    /// Creates an engine for a named preset.
    #[must_use]
    pub fn from_preset(preset: CrcPreset) -> Self {
        Self::new(preset.params())
    }

    /// Returns the register to the initial value.
    pub fn reset(&mut self) {
        self.register = self.params.initial_value;
    }

    /// Feeds one byte.
    pub fn update(&mut self, byte: u8) {
        self.register = step(self.register, byte, &self.params);
    }

    /// Feeds every byte of `data` in order.
    pub fn update_slice(&mut self, data: &[u8]) {
        for &byte in data {
            self.update(byte);
        }
    }

    /// Returns the checksum of everything fed since construction or the
    /// last [`reset`](Self::reset).
    ///
    /// The register is left untouched, so more bytes may follow. Unlike
    /// [`checksum`], an engine that has seen no bytes still applies the
    /// output transform to the initial value.
    #[must_use]
    #[doc(alias = "get_result")]
    pub fn finalize(&self) -> u16 {
        output(self.register, &self.params)
    }

    /// The parameters this engine was built with.
    pub fn params(&self) -> &CrcParameters {
        &self.params
    }

    /// Raw register contents, before the output transform.
    pub fn register(&self) -> u16 {
        self.register
    }
}

impl Default for CrcEngine {
    fn default() -> Self {
        Self::new(CrcParameters::default())
    }
}
