//! Pool walkthrough — allocate, inspect, free, and time the pool.
//!
//! Demonstrates:
//!   1. Constructing a pool (256-byte blocks, 10 blocks)
//!   2. Allocating blocks and reading the per-block status view
//!   3. LIFO reuse of a freed block
//!   4. Timing pool allocate/deallocate against plain heap allocation
//!
//! Run with:
//!   cargo run --release --example pool_walkthrough

use std::time::Instant;

use blockpool::{BlockPool, PoolConfig, PoolError};

const BLOCK_SIZE: usize = 256;
const BLOCK_COUNT: usize = 10;

/// Print one line per block: allocated or free.
fn print_pool_state(pool: &BlockPool, phase: &str) {
    println!("memory state after {phase}:");
    for (i, &allocated) in pool.allocation_status().iter().enumerate() {
        println!(
            "  block {i}: {}",
            if allocated { "allocated" } else { "free" }
        );
    }
}

fn main() -> Result<(), PoolError> {
    // ── 1. Construct ────────────────────────────────────────────
    let mut pool = BlockPool::new(PoolConfig::new(BLOCK_SIZE, BLOCK_COUNT))?;
    print_pool_state(&pool, "initialisation");

    // ── 2. Allocate two blocks ──────────────────────────────────
    let p1 = pool.allocate().expect("fresh pool has free blocks");
    println!("allocated first block: {p1}");
    let p2 = pool.allocate().expect("fresh pool has free blocks");
    println!("allocated second block: {p2}");
    print_pool_state(&pool, "two allocations");

    // ── 3. Free and reuse ───────────────────────────────────────
    pool.deallocate(p1);
    print_pool_state(&pool, "freeing the first block");

    let p3 = pool.allocate().expect("a block was just freed");
    println!("allocated third block: {p3}");
    assert_eq!(p3, p1, "LIFO reuse hands back the just-freed block");
    println!("third allocation reused the freed block (LIFO)");
    print_pool_state(&pool, "reallocation");

    pool.deallocate(p2);
    pool.deallocate(p3);
    print_pool_state(&pool, "final deallocation");

    // ── 4. Timing: pool vs heap ─────────────────────────────────
    let start = Instant::now();
    let h = pool.allocate().expect("pool is empty again");
    let pool_alloc = start.elapsed();

    let start = Instant::now();
    pool.deallocate(h);
    let pool_dealloc = start.elapsed();

    let start = Instant::now();
    let heap_block: Box<[u8]> = vec![0u8; BLOCK_SIZE].into_boxed_slice();
    let heap_alloc = start.elapsed();

    let start = Instant::now();
    drop(heap_block);
    let heap_dealloc = start.elapsed();

    println!("pool allocate:   {} ns", pool_alloc.as_nanos());
    println!("pool deallocate: {} ns", pool_dealloc.as_nanos());
    println!("heap allocate:   {} ns", heap_alloc.as_nanos());
    println!("heap deallocate: {} ns", heap_dealloc.as_nanos());

    Ok(())
}
