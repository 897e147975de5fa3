//! Thread-local twiddle tables.
//!
//! Each thread caches the power table of the primitive root for every
//! transform length it has used, grown on demand and kept until thread exit.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::field;

thread_local! {
    static TWIDDLES: RefCell<HashMap<usize, Rc<Vec<u64>>>> = RefCell::new(HashMap::new());
}

/// Twiddle table for a transform of length `n` (a power of two).
///
/// The table holds ω^0 .. ω^(n/2 − 1) for ω the primitive n-th root of
/// unity. The returned handle stays valid after later cache growth.
#[must_use]
pub fn roots_for(n: usize) -> Rc<Vec<u64>> {
    debug_assert!(n.is_power_of_two());
    TWIDDLES.with(|cache| {
        let mut cache = cache.borrow_mut();
        if let Some(table) = cache.get(&n) {
            return Rc::clone(table);
        }
        let table = Rc::new(build_table(n));
        cache.insert(n, Rc::clone(&table));
        table
    })
}

/// Number of cached tables on the calling thread.
#[must_use]
pub fn cached_tables() -> usize {
    TWIDDLES.with(|cache| cache.borrow().len())
}

fn build_table(n: usize) -> Vec<u64> {
    let half = (n / 2).max(1);
    let omega = field::root_of_unity(n.trailing_zeros());
    let mut table = Vec::with_capacity(half);
    let mut cur = 1u64;
    for _ in 0..half {
        table.push(cur);
        cur = field::mul(cur, omega);
    }
    table
}
