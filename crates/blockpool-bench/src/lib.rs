//! Benchmark profiles for the blockpool allocator.
//!
//! Provides pre-built pool constructors shared by the bench targets:
//!
//! - [`message_buffer_profile`]: 256-byte blocks, 1024 blocks — the
//!   message-buffer workload the pool is designed around
//! - [`small_object_profile`]: 64-byte blocks, 16K blocks — many small
//!   objects, stresses free-list churn

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use blockpool::{BlockPool, PoolConfig};

/// Block size used by the message-buffer profile.
pub const MESSAGE_BLOCK_SIZE: usize = 256;

/// Build a message-buffer pool: 256-byte blocks, 1024 blocks (256KB region).
pub fn message_buffer_profile() -> BlockPool {
    BlockPool::new(PoolConfig::new(MESSAGE_BLOCK_SIZE, 1024))
        .expect("profile config is valid and small enough to allocate")
}

/// Build a small-object pool: 64-byte blocks, 16384 blocks (1MB region).
pub fn small_object_profile() -> BlockPool {
    BlockPool::new(PoolConfig::new(64, 16_384))
        .expect("profile config is valid and small enough to allocate")
}
