//! The fixed-size-block pool allocator.
//!
//! [`BlockPool`] owns one contiguous byte region, partitioned into
//! equal-size blocks, and serves single-block allocations in O(1) off a
//! singly-linked free list. The list is kept as a side table of indices
//! rather than links threaded through block storage, so the payload bytes
//! and the free-list state never alias; the observable behavior (LIFO
//! reuse, ascending initial order, O(1) push/pop) is the same as the
//! classic intrusive layout.

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::BlockHandle;

/// A pool of `block_count` fixed-size blocks backed by one region.
///
/// The region is acquired once at construction and released once on drop.
/// `BlockPool` is intentionally not `Clone` — a copy would duplicate
/// ownership of the same region.
///
/// Blocks are handed out as opaque [`BlockHandle`]s; the block's bytes are
/// reached through [`BlockPool::block`] and [`BlockPool::block_mut`].
/// Exhaustion is a normal outcome ([`BlockPool::allocate`] returns `None`),
/// not an error.
#[derive(Debug)]
pub struct BlockPool {
    config: PoolConfig,
    /// Backing storage for all blocks. Exactly
    /// `block_size * block_count` bytes for the pool's whole lifetime.
    region: Vec<u8>,
    /// Per-block free-list link: `links[i]` is the next free block after
    /// block `i`. Meaningful only while block `i` is free; cleared the
    /// moment the block is allocated.
    links: Vec<Option<u32>>,
    /// First free block, or `None` when the pool is exhausted.
    head: Option<u32>,
    /// `status[i]` is true iff block `i` is currently allocated.
    /// Maintained for introspection; the allocation path never reads it.
    status: Vec<bool>,
    /// Number of blocks currently on the free list.
    free_len: usize,
}

impl BlockPool {
    /// Create a pool from the given configuration.
    ///
    /// Acquires the backing region in a single allocation and threads the
    /// free list through every block in ascending index order. No blocks
    /// are allocated yet.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidConfig`] if the config fails
    ///   [`PoolConfig::validate`].
    /// - [`PoolError::OutOfMemory`] if the system allocator cannot provide
    ///   the region.
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        let total = config
            .region_bytes()
            .expect("validate() rejects overflowing region sizes");

        let mut region = Vec::new();
        region
            .try_reserve_exact(total)
            .map_err(|_| PoolError::OutOfMemory { requested: total })?;
        region.resize(total, 0);

        // Ascending chain: 0 → 1 → … → block_count-1 → None.
        let mut links = Vec::with_capacity(config.block_count);
        for i in 0..config.block_count {
            let next = i + 1;
            links.push((next < config.block_count).then_some(next as u32));
        }

        Ok(Self {
            config,
            region,
            links,
            head: Some(0),
            status: vec![false; config.block_count],
            free_len: config.block_count,
        })
    }

    /// Allocate one block, or `None` if the pool is exhausted.
    ///
    /// Pops the head of the free list in O(1). The returned block's bytes
    /// are whatever the previous occupant left behind — callers must not
    /// assume zero-initialisation.
    pub fn allocate(&mut self) -> Option<BlockHandle> {
        let index = self.head?;
        // The popped block stops carrying free-list state as soon as it is
        // allocated; its link slot is cleared here.
        self.head = self.links[index as usize].take();
        self.status[index as usize] = true;
        self.free_len -= 1;
        Some(BlockHandle::new(index))
    }

    /// Return a block to the pool.
    ///
    /// Pushes the block onto the head of the free list in O(1), so reuse
    /// is LIFO: the next [`BlockPool::allocate`] after `deallocate(x)`
    /// (with no intervening allocate) returns exactly `x`.
    ///
    /// The handle must have been issued by this pool's `allocate` and not
    /// yet deallocated. Debug builds panic on a double free or an
    /// out-of-range handle; release builds skip the status check and only
    /// bounds-check the index. A still-in-range handle from a *different*
    /// pool is not detectable and corrupts this pool's bookkeeping.
    pub fn deallocate(&mut self, handle: BlockHandle) {
        let index = handle.index as usize;
        debug_assert!(
            index < self.status.len(),
            "{handle} is out of range for a pool of {} blocks",
            self.config.block_count
        );
        debug_assert!(
            self.status[index],
            "double free: block {index} is not currently allocated"
        );
        self.links[index] = self.head;
        self.head = Some(handle.index);
        self.status[index] = false;
        self.free_len += 1;
    }

    /// Get a shared view of a block's bytes.
    ///
    /// The slice is exactly [`block_size`](Self::block_size) bytes long.
    ///
    /// # Panics
    ///
    /// Panics if the handle's index is out of range for this pool.
    pub fn block(&self, handle: BlockHandle) -> &[u8] {
        let start = handle.index as usize * self.config.block_size;
        &self.region[start..start + self.config.block_size]
    }

    /// Get a mutable view of a block's bytes.
    ///
    /// # Panics
    ///
    /// Panics if the handle's index is out of range for this pool.
    pub fn block_mut(&mut self, handle: BlockHandle) -> &mut [u8] {
        let start = handle.index as usize * self.config.block_size;
        &mut self.region[start..start + self.config.block_size]
    }

    /// Per-block allocated/free snapshot, in block-index order.
    ///
    /// `allocation_status()[i]` is true iff block `i` is currently
    /// allocated. Intended for diagnostics and tests, not control flow.
    pub fn allocation_status(&self) -> &[bool] {
        &self.status
    }

    /// Size of each block in bytes.
    pub fn block_size(&self) -> usize {
        self.config.block_size
    }

    /// Total number of blocks in the pool.
    pub fn block_count(&self) -> usize {
        self.config.block_count
    }

    /// Number of blocks currently free.
    pub fn free_count(&self) -> usize {
        self.free_len
    }

    /// Number of blocks currently allocated.
    pub fn allocated_count(&self) -> usize {
        self.config.block_count - self.free_len
    }

    /// Whether the next [`BlockPool::allocate`] would return `None`.
    pub fn is_exhausted(&self) -> bool {
        self.head.is_none()
    }

    /// Memory usage of the backing region in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.region.len()
    }

    /// The configuration this pool was built from.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(block_size: usize, block_count: usize) -> BlockPool {
        BlockPool::new(PoolConfig::new(block_size, block_count)).unwrap()
    }

    #[test]
    fn new_pool_has_all_blocks_free() {
        let p = pool(64, 8);
        assert_eq!(p.free_count(), 8);
        assert_eq!(p.allocated_count(), 0);
        assert!(p.allocation_status().iter().all(|&b| !b));
        assert!(!p.is_exhausted());
        assert_eq!(p.memory_bytes(), 64 * 8);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = BlockPool::new(PoolConfig::new(64, 0)).unwrap_err();
        assert!(matches!(err, PoolError::InvalidConfig { .. }));
    }

    #[test]
    fn allocate_walks_blocks_in_ascending_order() {
        let mut p = pool(64, 4);
        for expected in 0..4u32 {
            assert_eq!(p.allocate().unwrap().index(), expected);
        }
    }

    #[test]
    fn capacity_is_exact() {
        // Exactly N allocations succeed; the (N+1)-th returns None.
        let mut p = pool(64, 8);
        for _ in 0..8 {
            assert!(p.allocate().is_some());
        }
        assert!(p.is_exhausted());
        assert!(p.allocate().is_none());
    }

    #[test]
    fn lifo_reuse_returns_the_last_freed_block() {
        let mut p = pool(64, 8);
        let _a = p.allocate().unwrap();
        let b = p.allocate().unwrap();
        p.deallocate(b);
        assert_eq!(p.allocate().unwrap(), b);
    }

    #[test]
    fn consecutive_allocations_are_disjoint() {
        let mut p = pool(16, 4);
        let a = p.allocate().unwrap();
        let b = p.allocate().unwrap();
        assert_ne!(a, b);

        p.block_mut(a).fill(0xAA);
        p.block_mut(b).fill(0xBB);
        assert!(p.block(a).iter().all(|&v| v == 0xAA));
        assert!(p.block(b).iter().all(|&v| v == 0xBB));
    }

    #[test]
    fn status_tracks_outstanding_blocks() {
        let mut p = pool(64, 4);
        let a = p.allocate().unwrap();
        let b = p.allocate().unwrap();
        assert_eq!(p.allocation_status(), &[true, true, false, false]);

        p.deallocate(a);
        assert_eq!(p.allocation_status(), &[false, true, false, false]);
        assert_eq!(p.allocated_count(), 1);

        p.deallocate(b);
        assert!(p.allocation_status().iter().all(|&s| !s));
    }

    #[test]
    fn drain_refill_drain_succeeds() {
        let mut p = pool(64, 8);
        let handles: Vec<_> = (0..8).map(|_| p.allocate().unwrap()).collect();
        for h in handles {
            p.deallocate(h);
        }
        assert_eq!(p.free_count(), 8);
        for _ in 0..8 {
            assert!(p.allocate().is_some());
        }
        assert!(p.allocate().is_none());
    }

    #[test]
    fn block_views_have_block_size_len() {
        let mut p = pool(256, 2);
        let h = p.allocate().unwrap();
        assert_eq!(p.block(h).len(), 256);
        assert_eq!(p.block_mut(h).len(), 256);
    }

    #[test]
    fn single_block_pool_cycles() {
        let mut p = pool(PoolConfig::MIN_BLOCK_SIZE, 1);
        let h = p.allocate().unwrap();
        assert!(p.allocate().is_none());
        p.deallocate(h);
        assert_eq!(p.allocate().unwrap(), h);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "double free")]
    fn double_free_panics_in_debug() {
        let mut p = pool(64, 2);
        let h = p.allocate().unwrap();
        p.deallocate(h);
        p.deallocate(h);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // P2: after any alloc/dealloc interleaving, the status table
            // agrees exactly with the set of outstanding handles.
            #[test]
            fn status_matches_outstanding_set(
                block_count in 1usize..24,
                ops in proptest::collection::vec(any::<bool>(), 1..100),
            ) {
                let mut p = pool(32, block_count);
                let mut outstanding: Vec<BlockHandle> = Vec::new();

                for (step, &do_alloc) in ops.iter().enumerate() {
                    if do_alloc {
                        if let Some(h) = p.allocate() {
                            outstanding.push(h);
                        } else {
                            prop_assert_eq!(outstanding.len(), block_count);
                        }
                    } else if !outstanding.is_empty() {
                        // Vary which outstanding block goes back.
                        let h = outstanding.swap_remove(step % outstanding.len());
                        p.deallocate(h);
                    }

                    let status = p.allocation_status();
                    let allocated = status.iter().filter(|&&s| s).count();
                    prop_assert_eq!(allocated, outstanding.len());
                    prop_assert_eq!(p.allocated_count(), outstanding.len());
                    for h in &outstanding {
                        prop_assert!(status[h.index() as usize]);
                    }
                }
            }

            // P5: drain the pool, free everything in an arbitrary order,
            // and the pool serves a full second drain.
            #[test]
            fn refill_in_any_order_restores_full_capacity(
                order in Just((0..12u32).collect::<Vec<_>>()).prop_shuffle(),
            ) {
                let mut p = pool(32, 12);
                let handles: Vec<_> = (0..12).map(|_| p.allocate().unwrap()).collect();
                prop_assert!(p.allocate().is_none());

                for &i in &order {
                    p.deallocate(handles[i as usize]);
                }
                prop_assert_eq!(p.free_count(), 12);

                for _ in 0..12 {
                    prop_assert!(p.allocate().is_some());
                }
                prop_assert!(p.allocate().is_none());
            }

            // Distinct live handles always denote disjoint byte ranges.
            #[test]
            fn live_handles_are_pairwise_disjoint(
                take in 2usize..10,
            ) {
                let mut p = pool(16, 10);
                let handles: Vec<_> = (0..take).map(|_| p.allocate().unwrap()).collect();
                for (i, a) in handles.iter().enumerate() {
                    for b in &handles[i + 1..] {
                        prop_assert_ne!(a.index(), b.index());
                    }
                }
            }
        }
    }
}
