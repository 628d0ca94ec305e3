//! # linkguard-crc: Parameterized CRC-16
//!
//! A table-free, bit-serial CRC-16 engine. Every behavior is determined by a
//! [`CrcParameters`] value (Rocksoft model: polynomial, initial value, final
//! xor, input/output reflection, plus the MSB and output masks), so the same
//! code computes XModem, CCITT-False, Kermit, MCRF4XX and Modbus checksums.
//!
//! Two modes are offered:
//!
//! - **One-shot**: [`compute_crc`] over a `start`/`length` range, or
//!   [`checksum`] over a whole slice. Pure functions, safe to call from any
//!   number of threads.
//! - **Streaming**: [`CrcEngine`] accumulates bytes with
//!   [`update`](CrcEngine::update) and produces the result with
//!   [`finalize`](CrcEngine::finalize).
//!
//! ## Usage
//!
//! ```
//! use linkguard_crc::{CrcEngine, CrcPreset, compute_crc};
//!
//! // One-shot over a range
//! let data = [0xAB, 0xCD, 0xEF];
//! let crc = compute_crc(&data, 0, data.len(), &CrcPreset::XModem.params()).unwrap();
//! assert_eq!(crc, 0x21A4);
//!
//! // Streaming
//! let mut engine = CrcEngine::from_preset(CrcPreset::Modbus);
//! engine.update_slice(b"123456789");
//! assert_eq!(engine.finalize(), 0x4B37);
//! ```

mod engine;
mod error;
mod params;
mod reflect;

#[cfg(kani)]
mod kani_proofs;

pub use engine::{CrcEngine, checksum, compute_crc};
pub use error::CrcError;
pub use params::{CrcParameters, CrcPreset};
pub use reflect::Reflect;
