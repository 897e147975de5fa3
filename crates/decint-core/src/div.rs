//! Division via a Newton-iteration reciprocal.
//!
//! For long divisors the quotient comes from a fixed-point approximation of
//! B^k / b refined by `R ← R·(2·B^k − b·R)/B^k`, which doubles the number of
//! valid digits per step. A short correction loop absorbs the residual
//! approximation error; the reciprocal precision keeps it to at most two
//! rounds.

use std::cmp::Ordering;

use tracing::debug;

use crate::digits::Digits;
use crate::kernels::{self, compare};
use crate::mul::{mul, MAX_MUL_LIMBS};

/// Divisor length (limbs) at or below which schoolbook division wins.
pub const SCHOOLBOOK_DIV_THRESHOLD: usize = 64;

/// Largest division operand, in limbs. Half the multiply cap, so the
/// reciprocal's internal double-width products stay inside the transform
/// limit.
pub const MAX_DIV_LIMBS: usize = MAX_MUL_LIMBS / 2;

/// Decimal digits carried by the double-precision reciprocal seed.
const SEED_DIGITS: usize = 8;

/// Euclidean quotient and remainder: `a = q·b + r` with `0 <= r < b`.
///
/// # Panics
/// Panics if `b` is zero.
#[must_use]
pub(crate) fn divmod(a: &Digits, b: &Digits) -> (Digits, Digits) {
    assert!(!b.is_zero(), "attempt to divide by zero");
    if compare(a, b) == Ordering::Less {
        return (Digits::new(), a.clone());
    }
    assert!(
        a.len() <= MAX_DIV_LIMBS,
        "divide operand exceeds {MAX_DIV_LIMBS} limbs"
    );
    if b.len() <= SCHOOLBOOK_DIV_THRESHOLD {
        return kernels::schoolbook_divmod(a, b);
    }
    newton_divmod(a, b)
}

fn newton_divmod(a: &Digits, b: &Digits) -> (Digits, Digits) {
    let n = a.len();
    let m = b.len();
    debug_assert!(n >= m && m >= 2);

    // Fixed-point scale: R approximates B^k / b to prec = n − m + 2 limbs,
    // leaving two guard limbs over the quotient width.
    let k = n + 2;
    let prec = n - m + 2;

    // Seed from the divisor's top two limbs. Truncation below them costs at
    // most one part in B, so the seed starts with one good limb.
    let b_limbs = b.limbs();
    let d_top = u64::from(b_limbs[m - 1]) * u64::from(crate::BASE) + u64::from(b_limbs[m - 2]);
    let seed = (1e27 / d_top as f64) as u64;
    let mut r = Digits::from_u64(seed.max(1));
    r.shift_limbs_left(k - m - 1);

    let mut two_bk = Digits::from_u64(2);
    two_bk.shift_limbs_left(k);

    let mut good_digits = SEED_DIGITS;
    let target_digits = 9 * prec;
    let mut steps = 0u32;
    while good_digits < target_digits {
        // b·R stays below 2·B^k while the relative error is under one, which
        // the seed guarantees and each step only improves.
        let br = mul(b, &r);
        let diff = kernels::sub(&two_bk, &br);
        let mut next = mul(&r, &diff);
        next.shift_limbs_right(k);
        r.swap(&mut next);
        // Each step doubles the valid digits, less one for truncation.
        good_digits = 2 * good_digits - 1;
        steps += 1;
    }
    debug!(n, m, steps, "newton reciprocal converged");

    let mut q = mul(a, &r);
    q.shift_limbs_right(k);

    // Correction: nudge q until 0 <= a − q·b < b. The reciprocal bound keeps
    // this to at most two rounds in either direction.
    let one = Digits::from_u64(1);
    let mut qb = mul(&q, b);
    while compare(&qb, a) == Ordering::Greater {
        q = kernels::sub(&q, &one);
        qb = kernels::sub(&qb, b);
    }
    let mut rem = kernels::sub(a, &qb);
    while compare(&rem, b) != Ordering::Less {
        rem = kernels::sub(&rem, b);
        q = kernels::add(&q, &one);
    }
    (q, rem)
}
