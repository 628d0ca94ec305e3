//! CRC error types.

/// Errors from the CRC engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrcError {
    /// The requested `start..start + length` range does not fit in the input.
    #[error("range {start}..{start}+{length} is out of bounds for input of {len} bytes")]
    RangeOutOfBounds {
        start: usize,
        length: usize,
        len: usize,
    },

    /// A preset name did not match any known preset.
    #[error("unknown CRC preset: {0}")]
    UnknownPreset(String),
}
