//! Fixed-capacity buffer guarded by one coarse lock.
//!
//! Storage is a `VecDeque` reserved to the full capacity at construction, so
//! appends never reallocate and removing from the front does not shift the
//! remaining elements. Valid data is always observed in arrival order from
//! index 0.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::BufferError;

/// A bounded, thread-safe FIFO staging area.
///
/// All methods take `&self`; share the buffer between threads with an
/// `Arc`. Each call holds the internal lock for its whole duration and
/// releases it on every exit path.
///
/// # Examples
///
/// ```
/// use linkguard_buffer::BoundedBuffer;
///
/// let buffer = BoundedBuffer::new(8).unwrap();
/// buffer.add_data(&[1u8, 2, 3, 4]).unwrap();
///
/// assert_eq!(buffer.peek(0).unwrap(), 1);
/// assert_eq!(buffer.get_data(3).unwrap(), vec![1, 2, 3]);
/// assert_eq!(buffer.count(), 1);
/// ```
#[derive(Debug)]
pub struct BoundedBuffer<T> {
    capacity: usize,
    data: Mutex<VecDeque<T>>,
}

impl<T> BoundedBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        if capacity < 1 {
            return Err(BufferError::InvalidCapacity { capacity });
        }

        let mut data = VecDeque::new();
        if let Err(e) = data.try_reserve_exact(capacity) {
            tracing::debug!(capacity, error = %e, "could not reserve bounded buffer");
            return Err(BufferError::AllocationFailed { capacity });
        }

        tracing::debug!(capacity, "created bounded buffer");

        Ok(Self {
            capacity,
            data: Mutex::new(data),
        })
    }

    /// Every mutation completes before user code can run under the lock,
    /// so the store behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.data.lock().unwrap_or_else(|poisoned| {
            tracing::warn!(
                capacity = self.capacity,
                "recovering bounded buffer after a panic while locked"
            );
            poisoned.into_inner()
        })
    }

    /// Maximum number of elements the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of valid elements currently buffered.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Number of elements that can still be added.
    ///
    /// A snapshot: another producer may fill the space before the caller
    /// appends. Use [`add_up_to`](Self::add_up_to) to check and append
    /// under one lock.
    pub fn available(&self) -> usize {
        self.capacity - self.count()
    }

    /// Returns true if at least one element is buffered.
    pub fn has_data(&self) -> bool {
        self.count() > 0
    }

    /// Returns true if at least `amount` elements are buffered.
    pub fn has_data_at_least(&self, amount: usize) -> bool {
        self.count() >= amount
    }

    /// Returns true if no more elements can be added.
    pub fn is_full(&self) -> bool {
        self.count() == self.capacity
    }

    /// Removes the first `amount` elements and returns them in order.
    ///
    /// Fails with [`BufferError::InvalidAmount`] if `amount` is zero or
    /// exceeds [`count`](Self::count).
    pub fn get_data(&self, amount: usize) -> Result<Vec<T>, BufferError> {
        let mut data = self.lock();

        if amount == 0 || amount > data.len() {
            tracing::debug!(
                requested = amount,
                available = data.len(),
                "rejected get_data"
            );
            return Err(BufferError::InvalidAmount {
                requested: amount,
                available: data.len(),
            });
        }

        let drained: Vec<T> = data.drain(..amount).collect();
        tracing::trace!(taken = amount, remaining = data.len(), "drained buffer");
        Ok(drained)
    }

    /// Discards the first `amount` elements.
    ///
    /// `remove(0)` is a no-op. Fails with [`BufferError::InvalidAmount`] if
    /// `amount` exceeds [`count`](Self::count).
    pub fn remove(&self, amount: usize) -> Result<(), BufferError> {
        let mut data = self.lock();

        if amount > data.len() {
            tracing::debug!(
                requested = amount,
                available = data.len(),
                "rejected remove"
            );
            return Err(BufferError::InvalidAmount {
                requested: amount,
                available: data.len(),
            });
        }

        if amount == data.len() {
            data.clear();
        } else {
            data.drain(..amount);
        }
        Ok(())
    }

    /// Discards all buffered elements. The allocation is kept.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Runs `f` on a contiguous view of the buffered elements, holding the
    /// lock for the duration of the call.
    ///
    /// Useful for checksumming staged bytes without consuming them.
    pub fn with_contents<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let mut data = self.lock();
        f(data.make_contiguous())
    }
}

impl<T: Clone> BoundedBuffer<T> {
    /// Appends every element of `items` after the existing data.
    ///
    /// The whole slice is rejected with [`BufferError::CapacityExceeded`]
    /// if it does not fit; nothing is written in that case.
    pub fn add_data(&self, items: &[T]) -> Result<(), BufferError> {
        // Cloned outside the lock: a panicking `Clone` must not leave a partial write.
        let staged = items.to_vec();
        let mut data = self.lock();

        let available = self.capacity - data.len();
        if staged.len() > available {
            tracing::debug!(
                requested = staged.len(),
                available,
                capacity = self.capacity,
                "rejected add_data"
            );
            return Err(BufferError::CapacityExceeded {
                requested: staged.len(),
                available,
                capacity: self.capacity,
            });
        }

        data.extend(staged);
        tracing::trace!(added = items.len(), count = data.len(), "appended to buffer");
        Ok(())
    }

    /// Appends as many leading elements of `items` as fit and returns how
    /// many were taken.
    ///
    /// The free-space check and the append happen under one lock, so
    /// concurrent producers never observe a stale [`available`](Self::available).
    pub fn add_up_to(&self, items: &[T]) -> usize {
        let mut data = self.lock();
        let take = items.len().min(self.capacity - data.len());
        if take == 0 {
            return 0;
        }

        // Cloned outside the store: a panicking `Clone` must not leave a partial write.
        let staged = items[..take].to_vec();
        data.extend(staged);
        tracing::trace!(added = take, count = data.len(), "appended to buffer");
        take
    }

    /// Returns a copy of the element at `index` without removing it.
    pub fn peek(&self, index: usize) -> Result<T, BufferError> {
        let data = self.lock();
        data.get(index)
            .cloned()
            .ok_or(BufferError::IndexOutOfRange {
                index,
                count: data.len(),
            })
    }
}
