//! Fixed-size-block memory pool allocation.
//!
//! Reserves one contiguous region up front, partitions it into equal-size
//! blocks, and serves single-block allocate/deallocate requests in O(1)
//! without touching the general-purpose heap per request. Intended for
//! workloads issuing many short-lived, equal-size allocations (object
//! pools, message buffers) where allocator overhead and fragmentation are
//! unwelcome.
//!
//! # Architecture
//!
//! ```text
//! BlockPool
//! ├── region: Vec<u8>            (block_size * block_count bytes, one allocation)
//! ├── links + head               (singly-linked free list over block indices)
//! └── status: Vec<bool>          (per-block allocated flag, introspection only)
//! ```
//!
//! Allocation pops the free-list head; deallocation pushes onto it, so
//! reuse is LIFO — the most recently freed block is handed out first.
//! Blocks are addressed by opaque [`BlockHandle`]s that only the issuing
//! pool can create.
//!
//! # Scope
//!
//! One size class, one thread, no growth: the pool never resizes, never
//! merges or splits blocks, and takes `&mut self` on every mutating
//! operation. Exhaustion is a normal outcome ([`BlockPool::allocate`]
//! returns `None`), not an error.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod handle;
pub mod pool;

// Public re-exports for the primary API surface.
pub use config::PoolConfig;
pub use error::PoolError;
pub use handle::BlockHandle;
pub use pool::BlockPool;
