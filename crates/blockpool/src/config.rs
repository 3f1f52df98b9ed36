//! Pool configuration parameters.

use crate::error::PoolError;

/// Configuration for a [`BlockPool`](crate::BlockPool).
///
/// Controls block sizing and pool capacity. Validated at construction;
/// both values are immutable after the pool is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Size of each block in bytes.
    ///
    /// Must be at least `size_of::<usize>()` — a free block has to be able
    /// to host one machine word of free-list link storage, matching the
    /// intrusive layout this pool's bookkeeping mirrors.
    pub block_size: usize,

    /// Number of blocks in the pool.
    ///
    /// The backing region is `block_size * block_count` bytes, acquired in
    /// a single allocation when the pool is constructed.
    pub block_count: usize,
}

impl PoolConfig {
    /// Minimum permitted block size: one machine word.
    pub const MIN_BLOCK_SIZE: usize = std::mem::size_of::<usize>();

    /// Create a new pool config.
    pub fn new(block_size: usize, block_count: usize) -> Self {
        Self {
            block_size,
            block_count,
        }
    }

    /// Total size of the backing region in bytes.
    ///
    /// Returns `None` if `block_size * block_count` overflows `usize`.
    pub fn region_bytes(&self) -> Option<usize> {
        self.block_size.checked_mul(self.block_count)
    }

    /// Check that this config describes a constructible pool.
    ///
    /// Rejects a zero block size or count, a block size too small to host
    /// a free-list link, a block count beyond the `u32` handle index
    /// space, and a region size that overflows `usize`.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.block_size < Self::MIN_BLOCK_SIZE
            || self.block_count == 0
            || self.block_count > u32::MAX as usize
            || self.region_bytes().is_none()
        {
            return Err(PoolError::InvalidConfig {
                block_size: self.block_size,
                block_count: self.block_count,
            });
        }
        Ok(())
    }
}
