//! Buffer error types.

/// Errors from [`BoundedBuffer`](crate::BoundedBuffer) operations.
///
/// A failed operation never modifies the buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// Construction with a capacity below 1.
    #[error("buffer capacity must be at least 1 (got {capacity})")]
    InvalidCapacity { capacity: usize },

    /// The backing store for `capacity` elements could not be reserved.
    #[error("cannot reserve storage for {capacity} elements")]
    AllocationFailed { capacity: usize },

    /// A drain request of zero elements or more than are buffered.
    #[error("invalid amount {requested}: must be between 1 and {available}")]
    InvalidAmount { requested: usize, available: usize },

    /// `peek` past the end of the valid data.
    #[error("index {index} out of range: buffer holds {count} elements")]
    IndexOutOfRange { index: usize, count: usize },

    /// Appending would overflow the fixed capacity.
    #[error("buffer is full: cannot add {requested} elements ({available} of {capacity} free)")]
    CapacityExceeded {
        requested: usize,
        available: usize,
        capacity: usize,
    },
}
