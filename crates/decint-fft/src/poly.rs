//! Sub-base splitting, convolution, and repacking.
//!
//! A base-10^9 limb splits into three base-10^3 mini-limbs. Convolving the
//! mini-limb sequences and propagating carries in base 10^3 yields the
//! product limbs.

use decint_memory::{acquire_u64, release_u64};
use tracing::debug;

use crate::{cache, field, ntt, MAX_FFT_LEN, MINIS_PER_LIMB, MINI_BASE};

const LIMB_BASE: u32 = 1_000_000_000;

// Worst-case convolution coefficient: (N/2) terms of (B'−1)², which must
// stay below the field modulus for the convolution to be exact.
const _: () = assert!(
    (MAX_FFT_LEN as u64 / 2) * (MINI_BASE - 1) * (MINI_BASE - 1) < field::MODULUS
);

/// Multiply two canonical little-endian limb slices exactly.
///
/// The result is little-endian and may carry trailing zero limbs; callers
/// normalize. Panics if the required transform length exceeds [`MAX_FFT_LEN`].
#[must_use]
pub fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(!a.is_empty() && !b.is_empty());

    let out_limbs = a.len() + b.len();
    let need = out_limbs * MINIS_PER_LIMB;
    let n = need.next_power_of_two();
    assert!(
        n <= MAX_FFT_LEN,
        "convolution length {n} exceeds the transform cap {MAX_FFT_LEN}"
    );
    debug!(len_a = a.len(), len_b = b.len(), transform = n, "ntt multiply");

    let mut fa = acquire_u64(n);
    let mut fb = acquire_u64(n);
    split_into(a, &mut fa);
    split_into(b, &mut fb);

    let roots = cache::roots_for(n);
    ntt::forward(&mut fa, &roots);
    ntt::forward(&mut fb, &roots);
    for (x, y) in fa.iter_mut().zip(&fb) {
        *x = field::mul(*x, *y);
    }
    ntt::inverse(&mut fa, &roots);

    let out = carry_and_pack(&fa, out_limbs);
    release_u64(fb);
    release_u64(fa);
    out
}

/// Spread limbs into mini-limb coefficients; `out` is zero-filled.
fn split_into(limbs: &[u32], out: &mut [u64]) {
    for (i, &limb) in limbs.iter().enumerate() {
        out[MINIS_PER_LIMB * i] = u64::from(limb % 1_000);
        out[MINIS_PER_LIMB * i + 1] = u64::from(limb / 1_000 % 1_000);
        out[MINIS_PER_LIMB * i + 2] = u64::from(limb / 1_000_000);
    }
}

/// Propagate base-10^3 carries over the coefficients and pack mini-limb
/// triples back into base-10^9 limbs.
fn carry_and_pack(coeffs: &[u64], out_limbs: usize) -> Vec<u32> {
    const MINI_WEIGHT: [u32; MINIS_PER_LIMB] = [1, 1_000, 1_000_000];

    let total_minis = out_limbs * MINIS_PER_LIMB;
    let mut limbs = vec![0u32; out_limbs];
    let mut acc = 0u64;
    for (i, &c) in coeffs.iter().enumerate() {
        acc += c;
        let mini = (acc % MINI_BASE) as u32;
        acc /= MINI_BASE;
        if i < total_minis {
            limbs[i / MINIS_PER_LIMB] += mini * MINI_WEIGHT[i % MINIS_PER_LIMB];
        } else {
            debug_assert_eq!(mini, 0, "convolution overflowed the product width");
        }
    }
    debug_assert_eq!(acc, 0, "convolution overflowed the product width");
    debug_assert!(limbs.iter().all(|&l| l < LIMB_BASE));
    limbs
}
