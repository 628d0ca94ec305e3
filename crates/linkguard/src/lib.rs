//! # Linkguard
//!
//! Data-integrity primitives for binary link protocols.
//!
//! - **CRC engine** ([`linkguard_crc`]): parameterized, bit-serial CRC-16
//!   with XModem, CCITT-False, Kermit, MCRF4XX and Modbus presets.
//! - **Bounded buffer** ([`linkguard_buffer`]): fixed-capacity, lock-guarded
//!   FIFO that stages received bytes until a frame is complete.
//!
//! # Architecture
//!
//! ```text
//!   bytes in ──▶ BoundedBuffer<u8> ──▶ [payload | crc] ──▶ CrcEngine ──▶ ok / corrupt
//!               (staging, capacity)     (caller framing)    (validation)
//! ```
//!
//! The two primitives compose only by convention; this crate adds the
//! small glue for checksumming staged bytes.
//!
//! # Quick Start
//!
//! ```
//! use linkguard::{BoundedBuffer, CrcPreset, checksum_staged, take_checked};
//!
//! let buffer = BoundedBuffer::new(64)?;
//! buffer.add_data(b"123456789")?;
//!
//! // Inspect without consuming
//! let crc = checksum_staged(&buffer, 9, &CrcPreset::Modbus.params())?;
//! assert_eq!(crc, 0x4B37);
//!
//! // Consume a frame together with its checksum
//! let (frame, crc) = take_checked(&buffer, 9, &CrcPreset::XModem.params())?;
//! assert_eq!(frame, b"123456789");
//! assert_eq!(crc, 0x31C3);
//! # Ok::<(), linkguard::Error>(())
//! ```

mod error;
mod staged;

pub use error::{Error, Result};
pub use staged::{checksum_staged, take_checked};

// Re-export the CRC engine
pub use linkguard_crc::{
    CrcEngine, CrcError, CrcParameters, CrcPreset, Reflect, checksum, compute_crc,
};

// Re-export the staging buffer
pub use linkguard_buffer::{BoundedBuffer, BufferError};
