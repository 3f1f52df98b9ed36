//! Pool-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while constructing a pool.
///
/// Pool exhaustion is deliberately not represented here — an empty free
/// list is a normal, checkable outcome, signalled by
/// [`allocate`](crate::BlockPool::allocate) returning `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// The system allocator could not provide the backing region.
    OutOfMemory {
        /// Number of bytes requested for the region.
        requested: usize,
    },
    /// The configuration cannot describe a usable pool (zero block size or
    /// count, block smaller than one machine word, or a region size that
    /// overflows `usize`).
    InvalidConfig {
        /// The rejected block size in bytes.
        block_size: usize,
        /// The rejected block count.
        block_count: usize,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: could not reserve {requested} bytes for the pool region")
            }
            Self::InvalidConfig {
                block_size,
                block_count,
            } => {
                write!(
                    f,
                    "invalid pool config: block_size {block_size}, block_count {block_count}"
                )
            }
        }
    }
}

impl Error for PoolError {}
