//! Thread-local scratch buffers.
//!
//! Acquire functions hand out buffers sized for the request; release
//! functions return them for reuse. Capacity is retained across uses, so
//! each pool grows to its thread's high-water mark and stays there until
//! thread exit or an explicit [`reset_thread_pools`].

use crate::stats;
use crate::thread_local::TlPool;

const POOL_DEPTH: usize = 4;

thread_local! {
    static U64_BUFS: TlPool<Vec<u64>> = const { TlPool::new(POOL_DEPTH) };
    static DIGIT_BUFS: TlPool<Vec<u32>> = const { TlPool::new(POOL_DEPTH) };
    static STRING_BUFS: TlPool<String> = const { TlPool::new(POOL_DEPTH) };
}

/// Acquire a zero-filled `u64` buffer of exactly `len` elements.
#[must_use]
pub fn acquire_u64(len: usize) -> Vec<u64> {
    stats::record_request(len * core::mem::size_of::<u64>());
    let mut buf = U64_BUFS.with(|p| match p.try_acquire() {
        Some(buf) => {
            stats::record_hit();
            buf
        }
        None => {
            stats::record_miss();
            Vec::new()
        }
    });
    buf.clear();
    buf.resize(len, 0);
    buf
}

/// Return a `u64` buffer to the calling thread's pool.
pub fn release_u64(buf: Vec<u64>) {
    U64_BUFS.with(|p| p.release(buf));
}

/// Acquire a zero-filled digit buffer of exactly `len` limbs.
#[must_use]
pub fn acquire_digits(len: usize) -> Vec<u32> {
    stats::record_request(len * core::mem::size_of::<u32>());
    let mut buf = DIGIT_BUFS.with(|p| match p.try_acquire() {
        Some(buf) => {
            stats::record_hit();
            buf
        }
        None => {
            stats::record_miss();
            Vec::new()
        }
    });
    buf.clear();
    buf.resize(len, 0);
    buf
}

/// Return a digit buffer to the calling thread's pool.
pub fn release_digits(buf: Vec<u32>) {
    DIGIT_BUFS.with(|p| p.release(buf));
}

/// Acquire an empty string buffer, retaining past capacity.
#[must_use]
pub fn acquire_string() -> String {
    let mut buf = STRING_BUFS.with(|p| match p.try_acquire() {
        Some(buf) => {
            stats::record_hit();
            buf
        }
        None => {
            stats::record_miss();
            String::new()
        }
    });
    buf.clear();
    buf
}

/// Return a string buffer to the calling thread's pool.
pub fn release_string(buf: String) {
    stats::record_request(buf.capacity());
    STRING_BUFS.with(|p| p.release(buf));
}

/// Drop every pooled buffer on the calling thread and zero its counters.
pub fn reset_thread_pools() {
    U64_BUFS.with(TlPool::clear);
    DIGIT_BUFS.with(TlPool::clear);
    STRING_BUFS.with(TlPool::clear);
    stats::reset();
}
