//! # decint-memory
//!
//! Per-thread scratch arenas for the decint engine.
//!
//! Every thread owns an independent set of buffer pools: transform buffers
//! for the convolution engine, digit scratch for division, and the text
//! emission buffer. Pools grow monotonically to the thread's high-water mark
//! and are released at thread exit. Nothing here is shared across threads,
//! so no locking is ever needed.

pub mod scratch;
pub mod stats;
pub mod thread_local;

pub use scratch::{
    acquire_digits, acquire_string, acquire_u64, release_digits, release_string, release_u64,
    reset_thread_pools,
};
pub use stats::{thread_stats, ScratchStats};
pub use thread_local::TlPool;
