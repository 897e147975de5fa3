//! Schoolbook kernels over canonical digit vectors.
//!
//! Inputs are canonical; every output is renormalized before return.
//! Intermediate limb sums stay below 2^31 and widened products below 2^63,
//! so `u32` walks with an occasional `u64` accumulator cover everything.

use std::cmp::Ordering;

use decint_memory::{acquire_digits, release_digits};

use crate::digits::Digits;
use crate::BASE;

const BASE64: u64 = BASE as u64;

/// Lexicographic magnitude comparison: length first, then limbs from the
/// most significant end.
#[must_use]
pub(crate) fn compare(a: &Digits, b: &Digits) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {
            for (&x, &y) in a.limbs().iter().rev().zip(b.limbs().iter().rev()) {
                match x.cmp(&y) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
            }
            Ordering::Equal
        }
        ord => ord,
    }
}

/// Sum of two canonical vectors.
#[must_use]
pub(crate) fn add(a: &Digits, b: &Digits) -> Digits {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u32;
    for (i, &l) in long.limbs().iter().enumerate() {
        let mut s = l + carry;
        if let Some(&r) = short.limbs().get(i) {
            s += r;
        }
        if s >= BASE {
            s -= BASE;
            carry = 1;
        } else {
            carry = 0;
        }
        out.push(s);
    }
    if carry > 0 {
        out.push(1);
    }
    Digits::from_vec(out)
}

/// Difference `a − b`. Requires `a >= b`; the borrow chain ending nonzero
/// means the caller broke that contract.
#[must_use]
pub(crate) fn sub(a: &Digits, b: &Digits) -> Digits {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0u32;
    for (i, &x) in a.limbs().iter().enumerate() {
        let y = b.limbs().get(i).copied().unwrap_or(0) + borrow;
        if x >= y {
            out.push(x - y);
            borrow = 0;
        } else {
            out.push(x + BASE - y);
            borrow = 1;
        }
    }
    assert_eq!(borrow, 0, "big integer subtraction underflow");
    Digits::from_vec(out)
}

/// Product with a single word `s < B`.
#[must_use]
pub(crate) fn scalar_mul(a: &Digits, s: u32) -> Digits {
    debug_assert!(s < BASE);
    if s == 0 || a.is_zero() {
        return Digits::new();
    }
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u64;
    for &l in a.limbs() {
        let cur = u64::from(l) * u64::from(s) + carry;
        out.push((cur % BASE64) as u32);
        carry = cur / BASE64;
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    Digits::from_vec(out)
}

/// Classical O(nm) product.
#[must_use]
pub(crate) fn schoolbook_mul(a: &Digits, b: &Digits) -> Digits {
    if a.is_zero() || b.is_zero() {
        return Digits::new();
    }
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &ai) in a.limbs().iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let ai = u64::from(ai);
        let mut carry = 0u64;
        for (j, &bj) in b.limbs().iter().enumerate() {
            let cur = u64::from(out[i + j]) + ai * u64::from(bj) + carry;
            out[i + j] = (cur % BASE64) as u32;
            carry = cur / BASE64;
        }
        out[i + b.len()] = carry as u32;
    }
    Digits::from_vec(out)
}

/// Quotient and remainder by a single word `0 < d < B`.
#[must_use]
pub(crate) fn divmod_small(a: &Digits, d: u32) -> (Digits, u32) {
    debug_assert!(d > 0 && d < BASE);
    let mut q = vec![0u32; a.len()];
    let mut rem = 0u64;
    for i in (0..a.len()).rev() {
        let cur = rem * BASE64 + u64::from(a.limbs()[i]);
        q[i] = (cur / u64::from(d)) as u32;
        rem = cur % u64::from(d);
    }
    (Digits::from_vec(q), rem as u32)
}

/// Knuth Algorithm D long division. Requires `a >= b > 0`; used below the
/// Newton crossover and as the reference the reciprocal path must match.
#[must_use]
pub(crate) fn schoolbook_divmod(a: &Digits, b: &Digits) -> (Digits, Digits) {
    debug_assert!(!b.is_zero());
    debug_assert!(compare(a, b) != Ordering::Less);

    let m = b.len();
    if m == 1 {
        let (q, rem) = divmod_small(a, b.limbs()[0]);
        return (q, Digits::from_u64(u64::from(rem)));
    }

    // Scale so the divisor's top limb reaches B/2; quotient estimates are
    // then at most two off before refinement.
    let d = BASE / (b.limbs()[m - 1] + 1);
    let (scaled_a, scaled_b);
    let (ra, rb) = if d > 1 {
        scaled_a = scalar_mul(a, d);
        scaled_b = scalar_mul(b, d);
        (&scaled_a, &scaled_b)
    } else {
        (a, b)
    };
    debug_assert_eq!(rb.len(), m);
    debug_assert!(rb.limbs()[m - 1] >= BASE / 2);

    let n = ra.len();
    let mut r = acquire_digits(n + 1);
    r[..n].copy_from_slice(ra.limbs());
    let bl = rb.limbs();
    let b_top = u64::from(bl[m - 1]);
    let b_next = u64::from(bl[m - 2]);

    let mut q = vec![0u32; n - m + 1];
    for j in (0..=n - m).rev() {
        let num = u64::from(r[j + m]) * BASE64 + u64::from(r[j + m - 1]);
        let mut qhat = num / b_top;
        let mut rhat = num % b_top;
        if qhat > BASE64 - 1 {
            rhat += (qhat - (BASE64 - 1)) * b_top;
            qhat = BASE64 - 1;
        }
        while rhat < BASE64 && qhat * b_next > rhat * BASE64 + u64::from(r[j + m - 2]) {
            qhat -= 1;
            rhat += b_top;
        }

        // Multiply-subtract qhat·b from the window r[j .. j+m].
        let mut carry = 0u64;
        let mut borrow = 0i64;
        for i in 0..m {
            let p = qhat * u64::from(bl[i]) + carry;
            carry = p / BASE64;
            let mut t = i64::from(r[j + i]) - (p % BASE64) as i64 - borrow;
            if t < 0 {
                t += BASE64 as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            r[j + i] = t as u32;
        }
        let mut top = i64::from(r[j + m]) - carry as i64 - borrow;
        if top < 0 {
            // Estimate was one too high: add the divisor back.
            qhat -= 1;
            let mut carry2 = 0u32;
            for i in 0..m {
                let s = r[j + i] + bl[i] + carry2;
                if s >= BASE {
                    r[j + i] = s - BASE;
                    carry2 = 1;
                } else {
                    r[j + i] = s;
                    carry2 = 0;
                }
            }
            top += i64::from(carry2);
        }
        r[j + m] = top as u32;
        q[j] = qhat as u32;
    }

    let mut rem = Digits::from_vec(r[..m].to_vec());
    release_digits(r);
    if d > 1 {
        let (unscaled, z) = divmod_small(&rem, d);
        debug_assert_eq!(z, 0);
        rem = unscaled;
    }
    (Digits::from_vec(q), rem)
}
