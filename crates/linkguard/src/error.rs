//! Unified error type.

use linkguard_buffer::BufferError;
use linkguard_crc::CrcError;

/// Result alias for Linkguard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Any error raised by the Linkguard primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Crc(#[from] CrcError),

    #[error(transparent)]
    Buffer(#[from] BufferError),
}
