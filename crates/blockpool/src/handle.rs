//! Opaque block handles.
//!
//! A [`BlockHandle`] identifies one block of a pool to a later
//! [`deallocate`](crate::BlockPool::deallocate) or block-access call. It
//! replaces the raw pointer a classic pool hands out: the constructor is
//! crate-private, so a handle can only originate from a successful
//! `allocate` and cannot be fabricated by callers.

use std::fmt;

/// Reference to an allocated block within a [`BlockPool`](crate::BlockPool).
///
/// Handles are plain indices — cheap to copy, valid for as long as the pool
/// that issued them is alive and the block has not been deallocated. Two
/// handles compare equal exactly when they name the same block, so a
/// freed-and-reused block round-trips to an equal handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct BlockHandle {
    /// Index of the block within the pool's region.
    pub(crate) index: u32,
}

impl BlockHandle {
    /// Create a new handle.
    pub(crate) fn new(index: u32) -> Self {
        Self { index }
    }

    /// The block index this handle refers to.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for BlockHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHandle({})", self.index)
    }
}
