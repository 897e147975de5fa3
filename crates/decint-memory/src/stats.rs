//! Per-thread scratch usage statistics.

use std::cell::Cell;

/// Snapshot of the calling thread's scratch pool counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScratchStats {
    /// Buffers served from a pool.
    pub hits: u64,
    /// Buffers freshly allocated.
    pub misses: u64,
    /// Largest single buffer request seen on this thread, in bytes.
    pub high_water_bytes: usize,
}

thread_local! {
    static HITS: Cell<u64> = const { Cell::new(0) };
    static MISSES: Cell<u64> = const { Cell::new(0) };
    static HIGH_WATER: Cell<usize> = const { Cell::new(0) };
}

pub(crate) fn record_hit() {
    HITS.with(|c| c.set(c.get() + 1));
}

pub(crate) fn record_miss() {
    MISSES.with(|c| c.set(c.get() + 1));
}

pub(crate) fn record_request(bytes: usize) {
    HIGH_WATER.with(|c| c.set(c.get().max(bytes)));
}

/// Snapshot the calling thread's counters.
#[must_use]
pub fn thread_stats() -> ScratchStats {
    ScratchStats {
        hits: HITS.with(Cell::get),
        misses: MISSES.with(Cell::get),
        high_water_bytes: HIGH_WATER.with(Cell::get),
    }
}

pub(crate) fn reset() {
    HITS.with(|c| c.set(0));
    MISSES.with(|c| c.set(0));
    HIGH_WATER.with(|c| c.set(0));
}
