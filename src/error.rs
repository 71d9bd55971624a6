//! Wrapper module for [`Error`]

use thiserror::Error;

/// Errors produced by [`QuickList`] and [`Cursor`] operations
///
/// Fallible mutations check their arguments (and allocate any node they might need) before moving
/// a single element, so a returned error always means the list was left untouched.
///
/// [`QuickList`]: crate::QuickList
/// [`Cursor`]: crate::Cursor
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// Insertion at a non-zero index into a list with no nodes
    #[error("cannot insert at index {index} into an empty list")]
    InvalidArgument { index: usize },

    /// The chain ran out before reaching `index`; `len` is the number of elements walked past
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A [`Cursor`](crate::Cursor) was advanced from or past the end of the list
    #[error("cursor advanced past the end of the list")]
    RangeError,

    /// The global allocator returned null for a new node
    #[error("failed to allocate {size} bytes for a list node")]
    AllocationFailure { size: usize },
}
