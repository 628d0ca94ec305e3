//! # linkguard-buffer: Bounded Staging Buffer
//!
//! [`BoundedBuffer`] holds up to a fixed number of elements in arrival
//! order. Producers append with [`add_data`](BoundedBuffer::add_data);
//! consumers inspect with [`peek`](BoundedBuffer::peek) and drain from the
//! front with [`get_data`](BoundedBuffer::get_data) or
//! [`remove`](BoundedBuffer::remove).
//!
//! ```text
//!  producer ──add_data──▶ ┌───────────────────────────┐
//!                         │ [0] [1] [2] ... [count-1] │ capacity N
//!  consumer ◀─get_data─── └───────────────────────────┘
//! ```
//!
//! Every operation takes a single coarse lock for its full duration, so the
//! buffer can be shared between threads (e.g. behind an `Arc`). There are no
//! blocking semantics: appending to a full buffer fails immediately with
//! [`BufferError::CapacityExceeded`] and leaves the contents untouched.

mod bounded;
mod error;

pub use bounded::BoundedBuffer;
pub use error::BufferError;
