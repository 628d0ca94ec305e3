//! Checksumming bytes held in a staging buffer.

use linkguard_buffer::BoundedBuffer;
use linkguard_crc::{CrcParameters, checksum, compute_crc};

use crate::Result;

/// Computes the CRC of the first `length` staged bytes without consuming
/// them.
///
/// The buffer lock is held while the checksum runs, so the bytes cannot be
/// drained underneath the computation. A `length` of zero returns
/// `params.initial_value`; a `length` beyond the staged count fails with
/// [`CrcError::RangeOutOfBounds`](linkguard_crc::CrcError::RangeOutOfBounds).
pub fn checksum_staged(
    buffer: &BoundedBuffer<u8>,
    length: usize,
    params: &CrcParameters,
) -> Result<u16> {
    let crc = buffer.with_contents(|staged| compute_crc(staged, 0, length, params))?;
    Ok(crc)
}

/// Removes the first `length` staged bytes and returns them with their CRC.
pub fn take_checked(
    buffer: &BoundedBuffer<u8>,
    length: usize,
    params: &CrcParameters,
) -> Result<(Vec<u8>, u16)> {
    let frame = buffer.get_data(length)?;
    let crc = checksum(&frame, params);

    tracing::debug!(
        length,
        crc,
        remaining = buffer.count(),
        "took checked frame"
    );

    Ok((frame, crc))
}
